use crate::error::{EngineError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of an exchange-rate table: `currency, rate`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct RateRecord {
    pub currency: String,
    pub rate: Decimal,
}

/// Reads exchange rates from a CSV source.
///
/// Whitespace around fields is trimmed, so `JPY, 156.84` is accepted.
pub struct RateReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RateReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one result per row; a malformed row does not stop the rest.
    pub fn rates(self) -> impl Iterator<Item = Result<RateRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(EngineError::from))
    }
}
