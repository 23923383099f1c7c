use crate::domain::order::{CheckoutOutcome, Order, PaymentMethod, PaymentStatus};
use crate::domain::ports::PaymentProcessorRef;
use crate::error::{EngineError, Result};

/// Charges an order once and reports the outcome.
pub struct CheckoutOrchestrator {
    processor: PaymentProcessorRef,
}

impl CheckoutOrchestrator {
    pub fn new(processor: PaymentProcessorRef) -> Self {
        Self { processor }
    }

    /// Submits exactly one charge for `order.total_amount` and maps the status.
    ///
    /// `Success` and `Failed` become a [`CheckoutOutcome`]. Any other status, and any
    /// error raised by the processor, is returned as an error for the caller to handle.
    /// No retries are attempted.
    pub async fn submit_order(
        &self,
        order: &Order,
        payment_method: &PaymentMethod,
    ) -> Result<CheckoutOutcome> {
        let status = self
            .processor
            .charge(payment_method, order.total_amount)
            .await?;

        match status {
            PaymentStatus::Success => Ok(CheckoutOutcome::succeeded()),
            PaymentStatus::Failed => Ok(CheckoutOutcome::payment_error()),
            other => Err(EngineError::UnexpectedPaymentStatus(other)),
        }
    }
}
