use super::account::AccountGateway;
use super::availability::AvailabilityClock;
use super::checkout::CheckoutOrchestrator;
use super::pricing::PricingService;
use super::shipping::ShippingAdvisor;
use super::storefront::Storefront;
use crate::domain::ports::{
    AnalyticsTrackerRef, ClockRef, EmailSenderRef, ExchangeRateProviderRef, PaymentProcessorRef,
    SecurityCodeGeneratorRef, ShippingQuoteProviderRef,
};

/// Every external service the engine talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub exchange_rates: ExchangeRateProviderRef,
    pub shipping_quotes: ShippingQuoteProviderRef,
    pub analytics: AnalyticsTrackerRef,
    pub payments: PaymentProcessorRef,
    pub email: EmailSenderRef,
    pub codes: SecurityCodeGeneratorRef,
    pub clock: ClockRef,
}

/// The main entry point for order and account decisions.
///
/// `DecisionEngine` holds no state of its own. Each component receives only the
/// collaborators it needs; the clock and email sender are shared between components.
pub struct DecisionEngine {
    pub pricing: PricingService,
    pub shipping: ShippingAdvisor,
    pub checkout: CheckoutOrchestrator,
    pub accounts: AccountGateway,
    pub availability: AvailabilityClock,
    pub storefront: Storefront,
}

impl DecisionEngine {
    /// Creates a new `DecisionEngine` wired to `collaborators`.
    pub fn new(collaborators: Collaborators) -> Self {
        let Collaborators {
            exchange_rates,
            shipping_quotes,
            analytics,
            payments,
            email,
            codes,
            clock,
        } = collaborators;

        Self {
            pricing: PricingService::new(exchange_rates, clock.clone()),
            shipping: ShippingAdvisor::new(shipping_quotes),
            checkout: CheckoutOrchestrator::new(payments),
            accounts: AccountGateway::new(email, codes),
            availability: AvailabilityClock::new(clock),
            storefront: Storefront::new(analytics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{CheckoutOutcome, Order, PaymentMethod, PaymentStatus};
    use crate::infrastructure::in_memory::{
        FixedClock, FixedCodeGenerator, OutboxEmailSender, RecordingAnalyticsTracker,
        ScriptedPaymentProcessor, StaticQuoteTable, StaticRateTable,
    };
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_engine_shares_collaborators() {
        let outbox = OutboxEmailSender::new();
        let christmas_morning = NaiveDate::from_ymd_opt(2024, 12, 25)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let engine = DecisionEngine::new(Collaborators {
            exchange_rates: Arc::new(StaticRateTable::new()),
            shipping_quotes: Arc::new(StaticQuoteTable::new()),
            analytics: Arc::new(RecordingAnalyticsTracker::new()),
            payments: Arc::new(ScriptedPaymentProcessor::new(PaymentStatus::Success)),
            email: Arc::new(outbox.clone()),
            codes: Arc::new(FixedCodeGenerator(42)),
            clock: Arc::new(FixedClock(christmas_morning)),
        });

        assert!(engine.availability.is_open_now());
        assert_eq!(engine.pricing.current_seasonal_discount(), dec!(0.2));

        assert!(engine.accounts.sign_up("david@gmail.com").await.unwrap());
        engine.accounts.login("david@gmail.com").await.unwrap();
        assert_eq!(outbox.sent().await.len(), 2);

        let outcome = engine
            .checkout
            .submit_order(&Order::new(dec!(15)), &PaymentMethod::card("1234"))
            .await
            .unwrap();
        assert_eq!(outcome, CheckoutOutcome::succeeded());
    }
}
