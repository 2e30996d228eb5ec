use crate::error::{ResolverError, Result};
use serde::Deserialize;
use std::io::Read;

/// One scanned QR payload to resolve, with an optional currency hint.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PayloadRecord {
    pub payload: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub currency: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Reads payload records from a CSV source.
///
/// Expects a `payload` column and an optional `currency` column. Fields are not
/// trimmed: payloads are opaque and leading or trailing whitespace is part of them.
pub struct PayloadReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PayloadReader<R> {
    /// Creates a new `PayloadReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn records(self) -> impl Iterator<Item = Result<PayloadRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ResolverError::from))
    }
}
