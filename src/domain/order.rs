use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error code reported to callers when the processor declines a charge.
pub const PAYMENT_ERROR: &str = "payment_error";

/// An order placed by a caller.
///
/// The total is expected to be positive, but the engine does not enforce it:
/// zero or negative totals are forwarded to the payment processor as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub total_amount: Decimal,
}

impl Order {
    pub fn new(total_amount: Decimal) -> Self {
        Self { total_amount }
    }
}

/// Opaque payment instrument, passed straight through to the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub credit_card_number: String,
}

impl PaymentMethod {
    pub fn card(number: impl Into<String>) -> Self {
        Self {
            credit_card_number: number.into(),
        }
    }
}

/// Status reported by the payment processor for a single charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Success,
    Failed,
    ErrorSubmittingPayment,
}

/// Caller-visible result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckoutOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn payment_error() -> Self {
        Self {
            success: false,
            error: Some(PAYMENT_ERROR.to_string()),
        }
    }
}
