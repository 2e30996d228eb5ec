use super::network::Network;
use crate::error::{ResolverError, Result};
use regex::Regex;
use std::collections::HashMap;

/// Name of the capture group holding the part of the payload kept in the address.
pub const IDENTIFIER_GROUP: &str = "identifier";

/// A recognizable family of merchant payment codes.
///
/// Pairs a recognition pattern with the routing domains used to build a
/// Lightning address, and an optional display currency that only matters when
/// several definitions recognize the same payload.
#[derive(Debug, Clone)]
pub struct MerchantDefinition {
    id: String,
    pattern: Regex,
    default_domain: String,
    domains: HashMap<Network, String>,
    display_currency: Option<String>,
}

impl MerchantDefinition {
    /// Compiles `pattern` and builds a definition without network-specific domains.
    ///
    /// Fails if the pattern does not compile or lacks an `identifier` group.
    pub fn new(
        id: impl Into<String>,
        pattern: &str,
        default_domain: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let pattern = Regex::new(pattern).map_err(|source| ResolverError::InvalidPattern {
            id: id.clone(),
            source,
        })?;
        if !pattern.capture_names().flatten().any(|n| n == IDENTIFIER_GROUP) {
            return Err(ResolverError::MissingIdentifierGroup(id));
        }

        Ok(Self {
            id,
            pattern,
            default_domain: default_domain.into(),
            domains: HashMap::new(),
            display_currency: None,
        })
    }

    pub fn with_domain(mut self, network: Network, domain: impl Into<String>) -> Self {
        self.domains.insert(network, domain.into());
        self
    }

    pub fn with_display_currency(mut self, currency: impl Into<String>) -> Self {
        self.display_currency = Some(currency.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn default_domain(&self) -> &str {
        &self.default_domain
    }

    pub fn display_currency(&self) -> Option<&str> {
        self.display_currency.as_deref()
    }

    /// Domain to route to on `network`, falling back to the default domain
    /// when none (or an empty one) is configured.
    pub fn domain_for(&self, network: Network) -> &str {
        match self.domains.get(&network) {
            Some(domain) if !domain.is_empty() => domain,
            _ => &self.default_domain,
        }
    }

    /// Returns the `identifier` capture if the payload is recognized and the
    /// capture is non-empty.
    pub fn capture_identifier<'p>(&self, payload: &'p str) -> Option<&'p str> {
        self.pattern
            .captures(payload)
            .and_then(|caps| caps.name(IDENTIFIER_GROUP))
            .map(|m| m.as_str())
            .filter(|identifier| !identifier.is_empty())
    }
}
