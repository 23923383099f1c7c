#![allow(dead_code)]

use async_trait::async_trait;
use rust_decimal::Decimal;
use storedesk::domain::order::{PaymentMethod, PaymentStatus};
use storedesk::domain::ports::{
    EmailSender, ExchangeRateProvider, PaymentProcessor, SecurityCodeGenerator,
    ShippingQuoteProvider,
};
use storedesk::domain::shipping::ShippingQuote;
use storedesk::error::{EngineError, Result};

pub struct FailingRates;

#[async_trait]
impl ExchangeRateProvider for FailingRates {
    async fn get_rate(&self, _currency_code: &str) -> Result<Decimal> {
        Err(EngineError::ExchangeRate("rate service down".to_string()))
    }
}

pub struct FailingQuotes;

#[async_trait]
impl ShippingQuoteProvider for FailingQuotes {
    async fn get_quote(&self, _destination: &str) -> Result<Option<ShippingQuote>> {
        Err(EngineError::ShippingQuote("carrier timeout".to_string()))
    }
}

pub struct FailingProcessor;

#[async_trait]
impl PaymentProcessor for FailingProcessor {
    async fn charge(
        &self,
        _payment_method: &PaymentMethod,
        _amount: Decimal,
    ) -> Result<PaymentStatus> {
        Err(EngineError::Payment("gateway unreachable".to_string()))
    }
}

pub struct FailingEmailSender;

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _recipient: &str, _body: &str) -> Result<()> {
        Err(EngineError::EmailDelivery("smtp refused".to_string()))
    }
}

pub struct FailingCodeGenerator;

impl SecurityCodeGenerator for FailingCodeGenerator {
    fn generate_code(&self) -> Result<u32> {
        Err(EngineError::CodeGeneration("entropy exhausted".to_string()))
    }
}
