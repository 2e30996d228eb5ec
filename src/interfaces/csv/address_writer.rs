use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One output row: the payload and what it resolved to, if anything.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AddressRecord {
    pub payload: String,
    pub merchant: Option<String>,
    pub address: Option<String>,
}

/// Writes resolution results as CSV with a `payload,merchant,address` header.
///
/// Unresolved payloads get empty `merchant` and `address` fields.
pub struct AddressWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AddressWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_record(&mut self, record: &AddressRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_output() {
        let mut buf = Vec::new();
        {
            let mut writer = AddressWriter::new(&mut buf);
            writer
                .write_record(&AddressRecord {
                    payload: "8784599487".to_string(),
                    merchant: Some("scantopay-10-digits".to_string()),
                    address: Some("8784599487@cryptoqr.net".to_string()),
                })
                .unwrap();
            writer
                .write_record(&AddressRecord {
                    payload: "Nakamoto+btc".to_string(),
                    merchant: None,
                    address: None,
                })
                .unwrap();
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "payload,merchant,address\n\
             8784599487,scantopay-10-digits,8784599487@cryptoqr.net\n\
             Nakamoto+btc,,\n"
        );
    }
}
