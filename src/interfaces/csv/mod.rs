pub mod quote_reader;
pub mod rate_reader;
