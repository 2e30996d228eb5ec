use crate::domain::merchant::MerchantDefinition;
use crate::domain::network::Network;
use crate::domain::ports::RegistrySource;
use crate::domain::registry::MerchantRegistry;
use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// On-disk form of a registry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    pub merchants: Vec<MerchantConfig>,
}

/// On-disk form of one merchant definition.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MerchantConfig {
    pub id: String,
    pub pattern: String,
    pub default_domain: String,
    #[serde(default)]
    pub domains: HashMap<Network, String>,
    #[serde(default)]
    pub display_currency: Option<String>,
}

impl RegistryConfig {
    /// Parses a JSON registry document from any `Read` source.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    /// Compiles every entry, in document order.
    ///
    /// Stops at the first entry whose pattern is invalid.
    pub fn into_registry(self) -> Result<MerchantRegistry> {
        self.merchants
            .into_iter()
            .map(MerchantConfig::into_definition)
            .collect()
    }
}

impl MerchantConfig {
    fn into_definition(self) -> Result<MerchantDefinition> {
        let mut merchant = MerchantDefinition::new(self.id, &self.pattern, self.default_domain)?;
        for (network, domain) in self.domains {
            merchant = merchant.with_domain(network, domain);
        }
        if let Some(currency) = self.display_currency {
            merchant = merchant.with_display_currency(currency);
        }
        Ok(merchant)
    }
}

/// Loads a registry from a JSON file.
///
/// The file is read on every `load`, so callers load once at startup.
#[derive(Debug, Clone)]
pub struct JsonFileRegistry {
    path: PathBuf,
}

impl JsonFileRegistry {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RegistrySource for JsonFileRegistry {
    fn load(&self) -> Result<MerchantRegistry> {
        let file = File::open(&self.path)?;
        let registry = RegistryConfig::from_reader(BufReader::new(file))?.into_registry()?;
        tracing::debug!(
            path = %self.path.display(),
            merchants = registry.len(),
            "loaded merchant registry"
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolverError;
    use std::io::Write;

    const TWO_MERCHANTS: &str = r#"{
        "merchants": [
            {
                "id": "test-usd",
                "pattern": "(?i)(?<identifier>.*test-payment.*)",
                "default_domain": "usd-merchant.com",
                "domains": { "mainnet": "usd-merchant.com", "signet": "staging.usd-merchant.com" },
                "display_currency": "USD"
            },
            {
                "id": "bare",
                "pattern": "^(?<identifier>[0-9]{4})$",
                "default_domain": "bare.example"
            }
        ]
    }"#;

    #[test]
    fn test_config_into_registry() {
        let registry = RegistryConfig::from_reader(TWO_MERCHANTS.as_bytes())
            .unwrap()
            .into_registry()
            .unwrap();

        assert_eq!(registry.len(), 2);
        let usd = registry.get("test-usd").unwrap();
        assert_eq!(usd.display_currency(), Some("USD"));
        assert_eq!(usd.domain_for(Network::Signet), "staging.usd-merchant.com");
        assert_eq!(usd.domain_for(Network::Regtest), "usd-merchant.com");

        let bare = registry.get("bare").unwrap();
        assert_eq!(bare.display_currency(), None);
        assert_eq!(bare.domain_for(Network::Mainnet), "bare.example");
    }

    #[test]
    fn test_config_rejects_unknown_network() {
        let json = r#"{"merchants": [{"id": "x", "pattern": "(?<identifier>.+)",
            "default_domain": "x.example", "domains": {"testnet": "t.example"}}]}"#;
        let result = RegistryConfig::from_reader(json.as_bytes());
        assert!(matches!(result, Err(ResolverError::ConfigError(_))));
    }

    #[test]
    fn test_config_reports_invalid_pattern_id() {
        let json = r#"{"merchants": [{"id": "broken", "pattern": "(?<identifier>[",
            "default_domain": "x.example"}]}"#;
        let result = RegistryConfig::from_reader(json.as_bytes())
            .unwrap()
            .into_registry();
        assert!(matches!(
            result,
            Err(ResolverError::InvalidPattern { ref id, .. }) if id == "broken"
        ));
    }

    #[test]
    fn test_json_file_registry_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_MERCHANTS.as_bytes()).unwrap();

        let registry = JsonFileRegistry::new(file.path()).load().unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_json_file_registry_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonFileRegistry::new(dir.path().join("missing.json")).load();
        assert!(matches!(result, Err(ResolverError::IoError(_))));
    }
}
