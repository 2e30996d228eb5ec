#![allow(dead_code)]

use merchant_qr::application::resolver::Resolver;
use merchant_qr::domain::ports::RegistrySource;
use merchant_qr::infrastructure::builtin::BuiltinRegistry;
use std::io::Write;
use tempfile::NamedTempFile;

pub fn builtin_resolver() -> Resolver {
    Resolver::new(BuiltinRegistry::new().load().unwrap())
}

/// Two overlapping merchants recognizing `test-payment`, one in USD, one in ZAR.
pub const USD_ZAR_REGISTRY: &str = r#"{
    "merchants": [
        {
            "id": "test-usd",
            "pattern": "(?i)(?<identifier>.*test-payment.*)",
            "default_domain": "usd-merchant.com",
            "domains": {
                "mainnet": "usd-merchant.com",
                "signet": "staging.usd-merchant.com",
                "regtest": "staging.usd-merchant.com"
            },
            "display_currency": "USD"
        },
        {
            "id": "test-zar",
            "pattern": "(?i)(?<identifier>.*test-payment.*)",
            "default_domain": "zar-merchant.com",
            "domains": {
                "mainnet": "zar-merchant.com",
                "signet": "staging.zar-merchant.com",
                "regtest": "staging.zar-merchant.com"
            },
            "display_currency": "ZAR"
        }
    ]
}"#;

pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
