use crate::domain::calendar::ClockReading;
use crate::domain::order::{PaymentMethod, PaymentStatus};
use crate::domain::ports::{
    AnalyticsTracker, Clock, EmailSender, ExchangeRateProvider, PaymentProcessor,
    SecurityCodeGenerator, ShippingQuoteProvider,
};
use crate::domain::shipping::ShippingQuote;
use crate::error::{EngineError, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Exchange rates held in memory, keyed by upper-cased currency code.
///
/// Unknown currencies are reported as an `ExchangeRate` error.
#[derive(Default, Clone)]
pub struct StaticRateTable {
    rates: Arc<RwLock<HashMap<String, Decimal>>>,
}

impl StaticRateTable {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, currency_code: &str, rate: Decimal) {
        let mut rates = self.rates.write().await;
        rates.insert(currency_code.to_uppercase(), rate);
    }
}

#[async_trait]
impl ExchangeRateProvider for StaticRateTable {
    async fn get_rate(&self, currency_code: &str) -> Result<Decimal> {
        let rates = self.rates.read().await;
        rates
            .get(&currency_code.to_uppercase())
            .copied()
            .ok_or_else(|| {
                EngineError::ExchangeRate(format!("No exchange rate for {currency_code}"))
            })
    }
}

/// Shipping quotes held in memory, keyed by destination.
#[derive(Default, Clone)]
pub struct StaticQuoteTable {
    quotes: Arc<RwLock<HashMap<String, ShippingQuote>>>,
}

impl StaticQuoteTable {
    /// Creates an empty quote table.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, destination: &str, quote: ShippingQuote) {
        let mut quotes = self.quotes.write().await;
        quotes.insert(destination.to_string(), quote);
    }
}

#[async_trait]
impl ShippingQuoteProvider for StaticQuoteTable {
    async fn get_quote(&self, destination: &str) -> Result<Option<ShippingQuote>> {
        let quotes = self.quotes.read().await;
        Ok(quotes.get(destination).copied())
    }
}

/// A message delivered through [`OutboxEmailSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub recipient: String,
    pub body: String,
}

/// Email sender that keeps every delivered message in an outbox.
#[derive(Default, Clone)]
pub struct OutboxEmailSender {
    outbox: Arc<RwLock<Vec<SentEmail>>>,
}

impl OutboxEmailSender {
    /// Creates a sender with an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages delivered so far, oldest first.
    pub async fn sent(&self) -> Vec<SentEmail> {
        self.outbox.read().await.clone()
    }
}

#[async_trait]
impl EmailSender for OutboxEmailSender {
    async fn send(&self, recipient: &str, body: &str) -> Result<()> {
        let mut outbox = self.outbox.write().await;
        outbox.push(SentEmail {
            recipient: recipient.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Analytics tracker that remembers every page view path.
#[derive(Default, Clone)]
pub struct RecordingAnalyticsTracker {
    page_views: Arc<RwLock<Vec<String>>>,
}

impl RecordingAnalyticsTracker {
    /// Creates a tracker with no recorded views.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn page_views(&self) -> Vec<String> {
        self.page_views.read().await.clone()
    }
}

#[async_trait]
impl AnalyticsTracker for RecordingAnalyticsTracker {
    async fn track_page_view(&self, path: &str) {
        let mut page_views = self.page_views.write().await;
        page_views.push(path.to_string());
    }
}

/// A charge submitted to [`ScriptedPaymentProcessor`].
#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    pub payment_method: PaymentMethod,
    pub amount: Decimal,
}

/// Payment processor that answers every charge with a preset status.
///
/// Each charge is recorded so callers can inspect what was submitted.
#[derive(Clone)]
pub struct ScriptedPaymentProcessor {
    status: PaymentStatus,
    charges: Arc<RwLock<Vec<Charge>>>,
}

impl ScriptedPaymentProcessor {
    /// Creates a processor that answers every charge with `status`.
    pub fn new(status: PaymentStatus) -> Self {
        Self {
            status,
            charges: Arc::default(),
        }
    }

    pub async fn charges(&self) -> Vec<Charge> {
        self.charges.read().await.clone()
    }
}

#[async_trait]
impl PaymentProcessor for ScriptedPaymentProcessor {
    async fn charge(
        &self,
        payment_method: &PaymentMethod,
        amount: Decimal,
    ) -> Result<PaymentStatus> {
        let mut charges = self.charges.write().await;
        charges.push(Charge {
            payment_method: payment_method.clone(),
            amount,
        });
        tracing::debug!(status = ?self.status, %amount, "scripted charge");
        Ok(self.status)
    }
}

/// Clock pinned to a single reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockReading);

impl Clock for FixedClock {
    fn now(&self) -> ClockReading {
        self.0
    }
}

/// Code generator that always issues the same code.
#[derive(Debug, Clone, Copy)]
pub struct FixedCodeGenerator(pub u32);

impl SecurityCodeGenerator for FixedCodeGenerator {
    fn generate_code(&self) -> Result<u32> {
        Ok(self.0)
    }
}
