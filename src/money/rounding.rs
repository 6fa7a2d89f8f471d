//! Rounding policies and the rescale kernel.
//!
//! Every place the crate moves an amount between scales — factories,
//! multiplication, division, conversion, [`Money::rounded`] — funnels
//! through the integer quotient/remainder kernel in this module, so all
//! of them share one set of rounding-mode semantics.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::Money;
use crate::errors::MoneyError;

/// Policy for choosing a representable value when a rescale discards
/// fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Truncate toward zero.
    Down,
    /// Round away from zero.
    Up,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceiling,
    /// Round to the nearest neighbour; ties toward zero.
    HalfDown,
    /// Round to the nearest neighbour; ties away from zero.
    HalfUp,
    /// Round to the nearest neighbour; ties to the even neighbour.
    HalfEven,
    /// Refuse to discard non-zero digits.
    Unnecessary,
}

/// Divide `value` by `pow` (a positive power of ten), selecting the
/// quotient according to `mode`.
///
/// # Errors
///
/// Returns [`MoneyError::InexactRounding`] when digits would be lost under
/// [`RoundingMode::Unnecessary`].
pub(crate) fn div_round(value: i128, pow: i128, mode: RoundingMode) -> Result<i128, MoneyError> {
    let quotient = value / pow;
    let remainder = value % pow;
    if remainder == 0 {
        return Ok(quotient);
    }
    let away = quotient + if value < 0 { -1 } else { 1 };
    let rounded = match mode {
        RoundingMode::Down => quotient,
        RoundingMode::Up => away,
        RoundingMode::Floor => {
            if value < 0 {
                away
            } else {
                quotient
            }
        }
        RoundingMode::Ceiling => {
            if value > 0 {
                away
            } else {
                quotient
            }
        }
        RoundingMode::HalfDown | RoundingMode::HalfUp | RoundingMode::HalfEven => {
            // Compare twice the discarded part against the divisor in the
            // unsigned domain; doubling can exceed i128::MAX otherwise.
            let twice = remainder.unsigned_abs() * 2;
            match twice.cmp(&pow.unsigned_abs()) {
                Ordering::Greater => away,
                Ordering::Less => quotient,
                Ordering::Equal => match mode {
                    RoundingMode::HalfUp => away,
                    RoundingMode::HalfDown => quotient,
                    _ => {
                        if quotient % 2 == 0 {
                            quotient
                        } else {
                            away
                        }
                    }
                },
            }
        }
        RoundingMode::Unnecessary => return Err(MoneyError::InexactRounding),
    };
    Ok(rounded)
}

/// Project an exact decimal onto `decimal_places` fractional digits under
/// `mode`, returning the result as minor units.
pub(crate) fn decimal_to_minor(
    amount: Decimal,
    decimal_places: u32,
    mode: RoundingMode,
) -> Result<i64, MoneyError> {
    let mantissa = amount.mantissa();
    let scale = amount.scale();
    let minor = if scale > decimal_places {
        div_round(mantissa, 10i128.pow(scale - decimal_places), mode)?
    } else {
        mantissa
            .checked_mul(10i128.pow(decimal_places - scale))
            .ok_or(MoneyError::overflow("rescale"))?
    };
    i64::try_from(minor).map_err(|_| MoneyError::overflow("rescale"))
}

/// As [`decimal_to_minor`] with no rounding allowed, reporting excess
/// precision as [`MoneyError::InexactAmount`].
pub(crate) fn exact_minor(amount: Decimal, decimal_places: u32) -> Result<i64, MoneyError> {
    decimal_to_minor(amount, decimal_places, RoundingMode::Unnecessary).map_err(|err| {
        match err {
            MoneyError::InexactRounding => MoneyError::InexactAmount {
                amount,
                decimal_places,
            },
            other => other,
        }
    })
}

impl Money {
    /// Round to `scale` fractional digits under `mode`, keeping the
    /// currency's canonical scale in the result.
    ///
    /// A negative `scale` rounds to a power of ten above one:
    /// `GBP 432.34` rounded at `-1` becomes `GBP 430.00` under
    /// [`RoundingMode::Down`] and `GBP 440.00` under [`RoundingMode::Up`].
    /// An unchanged value is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidScale`] when `scale` exceeds the
    /// currency's decimal places (rounding cannot manufacture precision),
    /// [`MoneyError::InexactRounding`] under
    /// [`RoundingMode::Unnecessary`], and
    /// [`MoneyError::ArithmeticOverflow`] when rounding away from zero
    /// leaves the minor-unit range.
    pub fn rounded(self, scale: i32, mode: RoundingMode) -> Result<Self, MoneyError> {
        let decimal_places = self.currency().decimal_places();
        if scale > i32::try_from(decimal_places).unwrap_or(i32::MAX) {
            return Err(MoneyError::InvalidScale {
                requested: scale,
                max: decimal_places,
            });
        }
        // Digits to clear. Beyond 20 every i64 rounds exactly as at 20
        // (the divisor already exceeds any representable value), so the
        // clamp changes nothing and keeps the power in range.
        let drop = (i64::from(decimal_places) - i64::from(scale)).min(20);
        if drop == 0 {
            return Ok(self);
        }
        let pow = 10i128.pow(u32::try_from(drop).unwrap_or(20));
        let quotient = div_round(i128::from(self.amount_minor()), pow, mode)?;
        let minor = quotient
            .checked_mul(pow)
            .and_then(|value| i64::try_from(value).ok())
            .ok_or(MoneyError::overflow("rounded"))?;
        Ok(self.with_minor(minor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn gbp(minor: i64) -> Money {
        Money::of_minor(crate::CurrencyUnit::of("GBP").unwrap(), minor)
    }

    #[test]
    fn div_round_exact_ignores_mode() {
        for mode in [
            RoundingMode::Down,
            RoundingMode::Up,
            RoundingMode::Floor,
            RoundingMode::Ceiling,
            RoundingMode::HalfDown,
            RoundingMode::HalfUp,
            RoundingMode::HalfEven,
            RoundingMode::Unnecessary,
        ] {
            assert_eq!(div_round(2300, 100, mode).unwrap(), 23);
            assert_eq!(div_round(-2300, 100, mode).unwrap(), -23);
        }
    }

    #[test]
    fn div_round_down_truncates_toward_zero() {
        assert_eq!(div_round(237, 10, RoundingMode::Down).unwrap(), 23);
        assert_eq!(div_round(-237, 10, RoundingMode::Down).unwrap(), -23);
    }

    #[test]
    fn div_round_up_moves_away_from_zero() {
        assert_eq!(div_round(231, 10, RoundingMode::Up).unwrap(), 24);
        assert_eq!(div_round(-231, 10, RoundingMode::Up).unwrap(), -24);
    }

    #[test]
    fn div_round_floor_and_ceiling() {
        assert_eq!(div_round(237, 10, RoundingMode::Floor).unwrap(), 23);
        assert_eq!(div_round(-237, 10, RoundingMode::Floor).unwrap(), -24);
        assert_eq!(div_round(231, 10, RoundingMode::Ceiling).unwrap(), 24);
        assert_eq!(div_round(-231, 10, RoundingMode::Ceiling).unwrap(), -23);
    }

    #[test]
    fn div_round_half_modes_off_tie() {
        // .4 rounds toward zero, .6 away, in all half modes.
        for mode in [
            RoundingMode::HalfDown,
            RoundingMode::HalfUp,
            RoundingMode::HalfEven,
        ] {
            assert_eq!(div_round(234, 10, mode).unwrap(), 23);
            assert_eq!(div_round(236, 10, mode).unwrap(), 24);
            assert_eq!(div_round(-234, 10, mode).unwrap(), -23);
            assert_eq!(div_round(-236, 10, mode).unwrap(), -24);
        }
    }

    #[test]
    fn div_round_half_modes_on_tie() {
        assert_eq!(div_round(235, 10, RoundingMode::HalfUp).unwrap(), 24);
        assert_eq!(div_round(235, 10, RoundingMode::HalfDown).unwrap(), 23);
        // 23.5 has an odd quotient, 24.5 an even one.
        assert_eq!(div_round(235, 10, RoundingMode::HalfEven).unwrap(), 24);
        assert_eq!(div_round(245, 10, RoundingMode::HalfEven).unwrap(), 24);
        assert_eq!(div_round(-235, 10, RoundingMode::HalfUp).unwrap(), -24);
        assert_eq!(div_round(-235, 10, RoundingMode::HalfEven).unwrap(), -24);
        assert_eq!(div_round(-245, 10, RoundingMode::HalfEven).unwrap(), -24);
    }

    #[test]
    fn div_round_unnecessary_rejects_inexact() {
        assert_eq!(
            div_round(235, 10, RoundingMode::Unnecessary).unwrap_err(),
            MoneyError::InexactRounding
        );
    }

    #[test]
    fn decimal_to_minor_pads_smaller_scales() {
        assert_eq!(
            decimal_to_minor(dec!(2.3), 2, RoundingMode::Unnecessary).unwrap(),
            230
        );
        assert_eq!(
            decimal_to_minor(dec!(423), 0, RoundingMode::Unnecessary).unwrap(),
            423
        );
    }

    #[test]
    fn decimal_to_minor_overflows_outside_i64() {
        let err = decimal_to_minor(dec!(12345678912345678912), 2, RoundingMode::Down).unwrap_err();
        assert_eq!(err, MoneyError::overflow("rescale"));
    }

    #[test]
    fn exact_minor_reports_inexact_amount() {
        let err = exact_minor(dec!(2.345), 2).unwrap_err();
        assert_eq!(
            err,
            MoneyError::InexactAmount {
                amount: dec!(2.345),
                decimal_places: 2
            }
        );
    }

    #[test]
    fn rounded_at_currency_scale_is_identity() {
        let money = gbp(234);
        assert_eq!(money.rounded(2, RoundingMode::Down).unwrap(), money);
    }

    #[test]
    fn rounded_at_one_decimal() {
        assert_eq!(
            gbp(234).rounded(1, RoundingMode::Down).unwrap().to_string(),
            "GBP 2.30"
        );
        assert_eq!(
            gbp(234).rounded(1, RoundingMode::Up).unwrap().to_string(),
            "GBP 2.40"
        );
    }

    #[test]
    fn rounded_at_zero_decimals() {
        assert_eq!(
            gbp(234).rounded(0, RoundingMode::Down).unwrap().to_string(),
            "GBP 2.00"
        );
        assert_eq!(
            gbp(234).rounded(0, RoundingMode::Up).unwrap().to_string(),
            "GBP 3.00"
        );
    }

    #[test]
    fn rounded_at_negative_scale() {
        let money = gbp(43234);
        assert_eq!(
            money.rounded(-1, RoundingMode::Down).unwrap().to_string(),
            "GBP 430.00"
        );
        assert_eq!(
            money.rounded(-1, RoundingMode::Up).unwrap().to_string(),
            "GBP 440.00"
        );
    }

    #[test]
    fn rounded_half_even_tie() {
        assert_eq!(
            gbp(235)
                .rounded(1, RoundingMode::HalfEven)
                .unwrap()
                .to_string(),
            "GBP 2.40"
        );
        assert_eq!(
            gbp(245)
                .rounded(1, RoundingMode::HalfEven)
                .unwrap()
                .to_string(),
            "GBP 2.40"
        );
    }

    #[test]
    fn rounded_above_currency_scale_is_rejected() {
        let err = gbp(234).rounded(3, RoundingMode::Down).unwrap_err();
        assert_eq!(
            err,
            MoneyError::InvalidScale {
                requested: 3,
                max: 2
            }
        );
    }

    #[test]
    fn rounded_far_negative_scale_collapses_to_zero() {
        assert_eq!(
            gbp(234).rounded(-30, RoundingMode::Down).unwrap().to_string(),
            "GBP 0.00"
        );
    }

    #[test]
    fn rounded_far_negative_scale_up_overflows() {
        let err = gbp(234).rounded(-30, RoundingMode::Up).unwrap_err();
        assert_eq!(err, MoneyError::overflow("rounded"));
    }

    #[test]
    fn rounded_unnecessary_on_exact_value() {
        let money = gbp(230);
        assert_eq!(money.rounded(1, RoundingMode::Unnecessary).unwrap(), money);
        assert_eq!(
            gbp(234).rounded(1, RoundingMode::Unnecessary).unwrap_err(),
            MoneyError::InexactRounding
        );
    }
}
