use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt::Display;

/// Everything outside the RFC 3986 unreserved set (`ALPHA / DIGIT / "-" / "." / "_" / "~"`).
///
/// Stricter than `encodeURIComponent`, which leaves `! ' ( ) *` as-is.
const STRICT_URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a value so it can be used as the local part of a Lightning address.
///
/// The value is stringified first, so numbers and booleans are accepted. Non-ASCII
/// characters are escaped byte by byte from their UTF-8 form, using uppercase hex.
pub fn strict_encode<T: Display>(value: T) -> String {
    utf8_percent_encode(&value.to_string(), STRICT_URI_COMPONENT).to_string()
}
