use crate::domain::calendar::{self, ClockReading};
use crate::domain::ports::{ClockRef, ExchangeRateProviderRef};
use crate::error::{EngineError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fraction taken off every price on December 25.
pub const CHRISTMAS_DISCOUNT: Decimal = dec!(0.2);

/// Converts prices between currencies and applies calendar promotions.
pub struct PricingService {
    rates: ExchangeRateProviderRef,
    clock: ClockRef,
}

impl PricingService {
    pub fn new(rates: ExchangeRateProviderRef, clock: ClockRef) -> Self {
        Self { rates, clock }
    }

    /// Returns `base_price` multiplied by the provider's rate for `target_currency_code`.
    ///
    /// No rounding is applied and the currency code is not validated here;
    /// lookup failures from the provider are returned unchanged. A product too
    /// large for `Decimal` is reported as `PriceOverflow`.
    pub async fn convert_price(
        &self,
        base_price: Decimal,
        target_currency_code: &str,
    ) -> Result<Decimal> {
        let rate = self.rates.get_rate(target_currency_code).await?;
        base_price.checked_mul(rate).ok_or_else(|| {
            EngineError::PriceOverflow(format!(
                "{base_price} converted to {target_currency_code} at {rate}"
            ))
        })
    }

    pub fn seasonal_discount(reading: &ClockReading) -> Decimal {
        if calendar::is_christmas(reading) {
            CHRISTMAS_DISCOUNT
        } else {
            Decimal::ZERO
        }
    }

    /// Seasonal discount in effect at the instant of the call.
    pub fn current_seasonal_discount(&self) -> Decimal {
        Self::seasonal_discount(&self.clock.now())
    }

    /// `base_price` with the current seasonal discount applied.
    pub fn promotional_price(&self, base_price: Decimal) -> Result<Decimal> {
        let discount = self.current_seasonal_discount();
        base_price
            .checked_mul(Decimal::ONE - discount)
            .ok_or_else(|| {
                EngineError::PriceOverflow(format!("{base_price} with discount {discount}"))
            })
    }
}
