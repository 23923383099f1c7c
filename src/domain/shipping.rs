use crate::error::{EngineError, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// A priced shipping offer returned by a quote provider.
///
/// Construction enforces `cost >= 0` and `estimated_days >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShippingQuote {
    cost: Decimal,
    estimated_days: u32,
}

impl ShippingQuote {
    pub fn new(cost: Decimal, estimated_days: u32) -> Result<Self> {
        if cost < Decimal::ZERO {
            return Err(EngineError::ValidationError(
                "Shipping cost must not be negative".to_string(),
            ));
        }
        if estimated_days == 0 {
            return Err(EngineError::ValidationError(
                "Estimated delivery must be at least one day".to_string(),
            ));
        }
        Ok(Self {
            cost,
            estimated_days,
        })
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn estimated_days(&self) -> u32 {
        self.estimated_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_validation() {
        assert!(ShippingQuote::new(dec!(30), 5).is_ok());
        assert!(ShippingQuote::new(dec!(0), 1).is_ok());
        assert!(matches!(
            ShippingQuote::new(dec!(-1), 5),
            Err(EngineError::ValidationError(_))
        ));
        assert!(matches!(
            ShippingQuote::new(dec!(30), 0),
            Err(EngineError::ValidationError(_))
        ));
    }
}
