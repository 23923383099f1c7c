use crate::domain::order::PaymentStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Exchange rate lookup failed: {0}")]
    ExchangeRate(String),
    #[error("Shipping quote lookup failed: {0}")]
    ShippingQuote(String),
    #[error("Payment submission failed: {0}")]
    Payment(String),
    #[error("Unexpected payment status: {0:?}")]
    UnexpectedPaymentStatus(PaymentStatus),
    #[error("Email delivery failed: {0}")]
    EmailDelivery(String),
    #[error("Code generation failed: {0}")]
    CodeGeneration(String),
    #[error("Price overflow: {0}")]
    PriceOverflow(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
