use super::encoding::strict_encode;
use serde::{Serialize, Serializer};
use std::fmt;

/// An `identifier@domain` address usable with LNURL-pay.
///
/// The local part is always strictly percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LightningAddress {
    local_part: String,
    domain: String,
}

impl LightningAddress {
    /// Builds an address from a raw (unencoded) identifier.
    pub fn new(raw_identifier: &str, domain: impl Into<String>) -> Self {
        Self {
            local_part: strict_encode(raw_identifier),
            domain: domain.into(),
        }
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for LightningAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

impl From<LightningAddress> for String {
    fn from(address: LightningAddress) -> Self {
        address.to_string()
    }
}

impl Serialize for LightningAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
