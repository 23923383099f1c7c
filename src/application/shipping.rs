use crate::domain::ports::ShippingQuoteProviderRef;
use crate::error::Result;

/// Message returned when no quote exists for a destination.
pub const SHIPPING_UNAVAILABLE: &str = "Shipping unavailable";

/// Turns provider quotes into customer-facing shipping text.
pub struct ShippingAdvisor {
    quotes: ShippingQuoteProviderRef,
}

impl ShippingAdvisor {
    pub fn new(quotes: ShippingQuoteProviderRef) -> Self {
        Self { quotes }
    }

    /// Describes shipping to `destination` as `Shipping cost: $<cost> (<days> days)`.
    ///
    /// A missing quote yields [`SHIPPING_UNAVAILABLE`]; provider failures are returned as errors.
    pub async fn describe_shipping(&self, destination: &str) -> Result<String> {
        let Some(quote) = self.quotes.get_quote(destination).await? else {
            return Ok(SHIPPING_UNAVAILABLE.to_string());
        };
        Ok(format!(
            "Shipping cost: ${} ({} days)",
            quote.cost().normalize(),
            quote.estimated_days()
        ))
    }
}
