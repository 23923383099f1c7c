use super::calendar::ClockReading;
use super::order::{PaymentMethod, PaymentStatus};
use super::shipping::ShippingQuote;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn get_rate(&self, currency_code: &str) -> Result<Decimal>;
}

#[async_trait]
pub trait ShippingQuoteProvider: Send + Sync {
    /// `Ok(None)` means the provider has no quote for this destination.
    async fn get_quote(&self, destination: &str) -> Result<Option<ShippingQuote>>;
}

#[async_trait]
pub trait AnalyticsTracker: Send + Sync {
    async fn track_page_view(&self, path: &str);
}

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn charge(&self, payment_method: &PaymentMethod, amount: Decimal)
    -> Result<PaymentStatus>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, recipient: &str, body: &str) -> Result<()>;
}

pub trait SecurityCodeGenerator: Send + Sync {
    fn generate_code(&self) -> Result<u32>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> ClockReading;
}

pub type ExchangeRateProviderRef = Arc<dyn ExchangeRateProvider>;
pub type ShippingQuoteProviderRef = Arc<dyn ShippingQuoteProvider>;
pub type AnalyticsTrackerRef = Arc<dyn AnalyticsTracker>;
pub type PaymentProcessorRef = Arc<dyn PaymentProcessor>;
pub type EmailSenderRef = Arc<dyn EmailSender>;
pub type SecurityCodeGeneratorRef = Arc<dyn SecurityCodeGenerator>;
pub type ClockRef = Arc<dyn Clock>;
