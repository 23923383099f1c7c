use crate::domain::shipping::ShippingQuote;
use crate::error::{EngineError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct QuoteRecord {
    destination: String,
    cost: Decimal,
    estimated_days: u32,
}

/// Reads shipping quotes from a CSV source with header `destination, cost, estimated_days`.
pub struct QuoteReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> QuoteReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Yields `(destination, quote)` pairs. Rows that fail to parse or that break
    /// the quote invariants come back as errors.
    pub fn quotes(self) -> impl Iterator<Item = Result<(String, ShippingQuote)>> {
        self.reader.into_deserialize().map(|result| {
            let record: QuoteRecord = result.map_err(EngineError::from)?;
            let quote = ShippingQuote::new(record.cost, record.estimated_days)?;
            Ok((record.destination, quote))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "destination, cost, estimated_days\nLondon, 30, 5\nParis, 12.50, 2";
        let results: Vec<_> = QuoteReader::new(data.as_bytes()).quotes().collect();

        assert_eq!(results.len(), 2);
        let (destination, quote) = results[0].as_ref().unwrap();
        assert_eq!(destination, "London");
        assert_eq!(quote.cost(), dec!(30));
        assert_eq!(quote.estimated_days(), 5);
    }

    #[test]
    fn test_reader_rejects_invalid_quotes() {
        let data = "destination, cost, estimated_days\nLondon, -1, 5\nParis, 10, 0\nRome, 8, 3";
        let results: Vec<_> = QuoteReader::new(data.as_bytes()).quotes().collect();

        assert!(matches!(results[0], Err(EngineError::ValidationError(_))));
        assert!(matches!(results[1], Err(EngineError::ValidationError(_))));
        assert!(results[2].is_ok());
    }
}
