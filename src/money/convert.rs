//! Currency conversion with a caller-supplied rate.

use rust_decimal::Decimal;

use super::rounding::{self, RoundingMode};
use super::Money;
use crate::currency::CurrencyUnit;
use crate::errors::MoneyError;

impl Money {
    /// Convert to `target` by multiplying with `rate` and rescaling to the
    /// target currency's canonical scale under `mode`.
    ///
    /// The rate is supplied by the caller; this crate does not fetch or
    /// hold exchange rates.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidConversion`] when `target` equals the
    /// source currency (use arithmetic for that) or when `rate` is not
    /// strictly positive; rescale and overflow behave as in
    /// [`Money::multiplied_by`].
    pub fn converted_to(
        self,
        target: CurrencyUnit,
        rate: Decimal,
        mode: RoundingMode,
    ) -> Result<Self, MoneyError> {
        if target == self.currency() {
            return Err(MoneyError::InvalidConversion {
                reason: "target currency equals the source currency",
            });
        }
        if rate <= Decimal::ZERO {
            return Err(MoneyError::InvalidConversion {
                reason: "conversion rate must be strictly positive",
            });
        }
        let product = self
            .amount()
            .checked_mul(rate)
            .ok_or(MoneyError::overflow("converted_to"))?;
        let minor = rounding::decimal_to_minor(product, target.decimal_places(), mode)?;
        tracing::debug!(
            from = %self.currency(),
            to = %target,
            %rate,
            "Converted currency amount"
        );
        Ok(Self::of_minor(target, minor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn unit(code: &str) -> CurrencyUnit {
        CurrencyUnit::of(code).unwrap()
    }

    fn money(text: &str) -> Money {
        Money::parse(text).unwrap()
    }

    #[test]
    fn converted_to_truncating() {
        let test = money("GBP 2.33")
            .converted_to(unit("EUR"), dec!(2.5), RoundingMode::Down)
            .unwrap();
        assert_eq!(test.to_string(), "EUR 5.82");
    }

    #[test]
    fn converted_to_half_up() {
        let test = money("GBP 2.33")
            .converted_to(unit("EUR"), dec!(2.5), RoundingMode::HalfUp)
            .unwrap();
        assert_eq!(test.to_string(), "EUR 5.83");
    }

    #[test]
    fn converted_to_changes_scale() {
        let test = money("GBP 2.33")
            .converted_to(unit("JPY"), dec!(180), RoundingMode::Down)
            .unwrap();
        assert_eq!(test.to_string(), "JPY 419");
    }

    #[test]
    fn converted_to_same_currency_is_rejected() {
        let err = money("GBP 2.33")
            .converted_to(unit("GBP"), dec!(2.5), RoundingMode::Down)
            .unwrap_err();
        assert!(matches!(err, MoneyError::InvalidConversion { .. }));
    }

    #[test]
    fn converted_to_non_positive_rate_is_rejected() {
        for rate in [dec!(-2.5), dec!(0)] {
            let err = money("GBP 2.33")
                .converted_to(unit("EUR"), rate, RoundingMode::Down)
                .unwrap_err();
            assert!(matches!(err, MoneyError::InvalidConversion { .. }));
        }
    }

    #[test]
    fn converted_to_overflow() {
        let big = Money::of_minor(unit("GBP"), i64::MAX / 2 + 1);
        assert!(
            big.converted_to(unit("EUR"), dec!(2), RoundingMode::Down)
                .is_err()
        );
    }

    #[test]
    fn converted_to_inexact_without_rounding() {
        let err = money("GBP 2.33")
            .converted_to(unit("EUR"), dec!(2.5), RoundingMode::Unnecessary)
            .unwrap_err();
        assert_eq!(err, MoneyError::InexactRounding);
    }
}
