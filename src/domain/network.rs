use crate::error::ResolverError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The Bitcoin network a wallet is operating on.
///
/// Only used to pick the routing domain of a merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Signet,
    Regtest,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Signet, Network::Regtest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Signet => "signet",
            Self::Regtest => "regtest",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ResolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "signet" => Ok(Self::Signet),
            "regtest" => Ok(Self::Regtest),
            _ => Err(ResolverError::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_from_str() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!(" Signet ".parse::<Network>().unwrap(), Network::Signet);
        assert_eq!("REGTEST".parse::<Network>().unwrap(), Network::Regtest);
        assert!(matches!(
            "testnet".parse::<Network>(),
            Err(ResolverError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_network_serde_lowercase() {
        let json = serde_json::to_string(&Network::Signet).unwrap();
        assert_eq!(json, "\"signet\"");
        let parsed: Network = serde_json::from_str("\"regtest\"").unwrap();
        assert_eq!(parsed, Network::Regtest);
    }

    #[test]
    fn test_network_display_roundtrips_through_parse() {
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
    }
}
