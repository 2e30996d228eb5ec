use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Registry config error: {0}")]
    ConfigError(#[from] serde_json::Error),
    #[error("Invalid pattern for merchant '{id}': {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },
    #[error("Pattern for merchant '{0}' has no 'identifier' capture group")]
    MissingIdentifierGroup(String),
    #[error("Unknown network '{0}', expected mainnet, signet or regtest")]
    UnknownNetwork(String),
}

pub type Result<T> = std::result::Result<T, ResolverError>;
