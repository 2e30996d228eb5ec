//! Application layer containing the resolution policy.
//!
//! `Resolver` matches a payload against every merchant in its registry and
//! decides which match, if any, becomes the Lightning address.

pub mod resolver;
