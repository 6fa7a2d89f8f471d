//! The money value type.
//!
//! [`Money`] pairs a [`CurrencyUnit`] with an exact decimal amount held at
//! the currency's canonical scale. The amount is stored as minor units
//! (pence, cents) in a 64-bit signed integer, which makes the two core
//! invariants structural: the scale of [`Money::amount`] always equals the
//! currency's decimal places, and no value whose minor-unit count leaves
//! the `i64` range can ever be constructed. Operations that would cross
//! that boundary fail with [`MoneyError::ArithmeticOverflow`] instead of
//! wrapping.

mod arithmetic;
mod compare;
mod convert;
mod rounding;

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::currency::{CurrencyRegistry, CurrencyUnit, IsoCurrencies};
use crate::errors::MoneyError;

pub use rounding::RoundingMode;

/// An immutable amount of a specific currency.
///
/// Instances are created through the checked factories and transformed
/// through operations that return new instances; a transformation whose
/// result equals the receiver short-circuits and hands the receiver back
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    currency: CurrencyUnit,
    minor: i64,
}

impl Money {
    /// Create from an amount already at the currency's canonical scale.
    ///
    /// Trailing precision the currency cannot carry is an error here; use
    /// [`Money::of_rounded`] to absorb it under an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InexactAmount`] when `amount` has non-zero
    /// digits past the currency's decimal places, and
    /// [`MoneyError::ArithmeticOverflow`] when the minor-unit value leaves
    /// the 64-bit range.
    pub fn of(currency: CurrencyUnit, amount: Decimal) -> Result<Self, MoneyError> {
        let minor = rounding::exact_minor(amount, currency.decimal_places())?;
        Ok(Self { currency, minor })
    }

    /// Create from an amount, rescaling to the currency's canonical scale
    /// under `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InexactRounding`] when digits would be lost
    /// under [`RoundingMode::Unnecessary`], and
    /// [`MoneyError::ArithmeticOverflow`] outside the minor-unit range.
    pub fn of_rounded(
        currency: CurrencyUnit,
        amount: Decimal,
        mode: RoundingMode,
    ) -> Result<Self, MoneyError> {
        let minor = rounding::decimal_to_minor(amount, currency.decimal_places(), mode)?;
        Ok(Self { currency, minor })
    }

    /// Create from a whole number of major units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] when
    /// `major * 10^decimal_places` leaves the 64-bit minor-unit range.
    pub fn of_major(currency: CurrencyUnit, major: i64) -> Result<Self, MoneyError> {
        major
            .checked_mul(10i64.pow(currency.decimal_places()))
            .map(|minor| Self { currency, minor })
            .ok_or(MoneyError::overflow("of_major"))
    }

    /// Create from a whole number of minor units. Never fails: the storage
    /// domain is exactly the argument's domain.
    #[must_use]
    pub const fn of_minor(currency: CurrencyUnit, minor: i64) -> Self {
        Self { currency, minor }
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency: CurrencyUnit) -> Self {
        Self { currency, minor: 0 }
    }

    /// Parse the canonical `"CODE amount"` form using the built-in ISO
    /// currency table.
    ///
    /// # Errors
    ///
    /// See [`Money::parse_with`].
    pub fn parse(text: &str) -> Result<Self, MoneyError> {
        Self::parse_with(&IsoCurrencies, text)
    }

    /// Parse the canonical `"CODE amount"` form, resolving the code
    /// through `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::MalformedInput`] when the text is shorter
    /// than the minimum valid form or the space separator is missing or
    /// the amount is not a decimal literal,
    /// [`MoneyError::UnknownCurrency`] when the code does not resolve,
    /// and the [`Money::of`] errors for the parsed amount.
    pub fn parse_with<R>(registry: &R, text: &str) -> Result<Self, MoneyError>
    where
        R: CurrencyRegistry + ?Sized,
    {
        let bytes = text.as_bytes();
        if bytes.len() < 5 {
            return Err(MoneyError::MalformedInput {
                text: text.to_string(),
                reason: "expected 'CODE amount'",
            });
        }
        if bytes[3] != b' ' {
            return Err(MoneyError::MalformedInput {
                text: text.to_string(),
                reason: "missing space after the currency code",
            });
        }
        let currency = registry.resolve(&text[..3])?;
        let amount =
            Decimal::from_str_exact(&text[4..]).map_err(|_| MoneyError::MalformedInput {
                text: text.to_string(),
                reason: "amount is not a decimal literal",
            })?;
        Self::of(currency, amount)
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> CurrencyUnit {
        self.currency
    }

    /// The currency's decimal places.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.currency.decimal_places()
    }

    /// The exact decimal amount at the currency's canonical scale.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.minor, self.currency.decimal_places())
    }

    /// The whole-major-unit part, truncated toward zero.
    #[must_use]
    pub const fn amount_major(&self) -> i64 {
        self.minor / self.minor_factor()
    }

    /// The whole-major-unit part as an `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] outside the 32-bit range.
    pub fn amount_major_i32(&self) -> Result<i32, MoneyError> {
        i32::try_from(self.amount_major()).map_err(|_| MoneyError::overflow("amount_major_i32"))
    }

    /// The full value in minor units.
    #[must_use]
    pub const fn amount_minor(&self) -> i64 {
        self.minor
    }

    /// The full value in minor units as an `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] outside the 32-bit range.
    pub fn amount_minor_i32(&self) -> Result<i32, MoneyError> {
        i32::try_from(self.minor).map_err(|_| MoneyError::overflow("amount_minor_i32"))
    }

    /// The minor units past the major part, carrying the sign of the whole
    /// amount (`GBP -5.78` has a minor part of `-78`).
    #[must_use]
    pub const fn minor_part(&self) -> i64 {
        self.minor % self.minor_factor()
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// Whether the amount is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.minor > 0
    }

    /// Whether the amount is zero or greater.
    #[must_use]
    pub const fn is_positive_or_zero(&self) -> bool {
        self.minor >= 0
    }

    /// Whether the amount is less than zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.minor < 0
    }

    /// Whether the amount is zero or less.
    #[must_use]
    pub const fn is_negative_or_zero(&self) -> bool {
        self.minor <= 0
    }

    /// Whether `other` is in the same currency. This is the mismatch-safe
    /// query: it never fails, unlike the binary operations.
    #[must_use]
    pub fn is_same_currency(&self, other: Self) -> bool {
        self.currency == other.currency
    }

    /// Reinterpret the numeric amount under a different currency.
    ///
    /// Returns `self` unchanged when the currency is the same.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InexactAmount`] when the amount does not fit
    /// the new currency's scale exactly; use
    /// [`Money::with_currency_rounded`] to allow rounding.
    pub fn with_currency(self, currency: CurrencyUnit) -> Result<Self, MoneyError> {
        if currency == self.currency {
            return Ok(self);
        }
        let minor = rounding::exact_minor(self.amount(), currency.decimal_places())?;
        Ok(Self { currency, minor })
    }

    /// Reinterpret the numeric amount under a different currency,
    /// rescaling under `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InexactRounding`] when digits would be lost
    /// under [`RoundingMode::Unnecessary`].
    pub fn with_currency_rounded(
        self,
        currency: CurrencyUnit,
        mode: RoundingMode,
    ) -> Result<Self, MoneyError> {
        if currency == self.currency {
            return Ok(self);
        }
        let minor = rounding::decimal_to_minor(self.amount(), currency.decimal_places(), mode)?;
        Ok(Self { currency, minor })
    }

    /// Replace the amount, keeping the currency. Returns `self` unchanged
    /// when the amount is equal.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InexactAmount`] when `amount` does not fit
    /// the currency's scale exactly.
    pub fn with_amount(self, amount: Decimal) -> Result<Self, MoneyError> {
        let minor = rounding::exact_minor(amount, self.currency.decimal_places())?;
        Ok(self.with_minor(minor))
    }

    /// Rebuild with `minor`, handing back `self` when the value is
    /// unchanged.
    pub(crate) const fn with_minor(self, minor: i64) -> Self {
        if minor == self.minor {
            self
        } else {
            Self {
                currency: self.currency,
                minor,
            }
        }
    }

    /// `10^decimal_places`; in range because the scale is capped.
    const fn minor_factor(&self) -> i64 {
        10i64.pow(self.currency.decimal_places())
    }

    pub(crate) fn check_currency(self, other: Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                found: other.currency,
            })
        }
    }
}

impl fmt::Display for Money {
    /// Formats as the canonical `"CODE amount"` form with exactly
    /// `decimal_places` fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl Serialize for Money {
    /// Serializes as the canonical string form, e.g. `"GBP 2.34"`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    /// Deserializes from the canonical string form via the built-in ISO
    /// table; currencies from custom registries must be re-resolved by the
    /// caller.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(D::Error::custom)
    }
}
