//! Checked arithmetic over money values.
//!
//! Binary operations between two [`Money`] values require equal
//! currencies. Amount-level math runs in the 64-bit minor-unit domain
//! where it can (the integer operand families) and through exact decimals
//! where it cannot (decimal operands, multiplication, division); either
//! way a result whose minor-unit value leaves the `i64` range fails with
//! [`MoneyError::ArithmeticOverflow`].

use rust_decimal::Decimal;

use super::rounding::{self, RoundingMode};
use super::Money;
use crate::errors::MoneyError;

impl Money {
    /// Add another money value in the same currency.
    ///
    /// A zero operand returns `self` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies and
    /// [`MoneyError::ArithmeticOverflow`] when the sum leaves the
    /// minor-unit range.
    pub fn plus(self, other: Self) -> Result<Self, MoneyError> {
        self.check_currency(other)?;
        if other.is_zero() {
            return Ok(self);
        }
        self.amount_minor()
            .checked_add(other.amount_minor())
            .map(|minor| self.with_minor(minor))
            .ok_or(MoneyError::overflow("plus"))
    }

    /// Add an exact decimal amount at the currency's scale.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InexactAmount`] when the operand carries
    /// precision the currency cannot hold, and
    /// [`MoneyError::ArithmeticOverflow`] on range overflow.
    pub fn plus_amount(self, amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_zero() {
            return Ok(self);
        }
        let sum = self
            .amount()
            .checked_add(amount)
            .ok_or(MoneyError::overflow("plus_amount"))?;
        let minor = rounding::exact_minor(sum, self.decimal_places())?;
        Ok(self.with_minor(minor))
    }

    /// Add a whole number of major units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] when the result leaves
    /// the minor-unit range.
    pub fn plus_major(self, major: i64) -> Result<Self, MoneyError> {
        if major == 0 {
            return Ok(self);
        }
        let delta = major
            .checked_mul(10i64.pow(self.decimal_places()))
            .ok_or(MoneyError::overflow("plus_major"))?;
        self.amount_minor()
            .checked_add(delta)
            .map(|minor| self.with_minor(minor))
            .ok_or(MoneyError::overflow("plus_major"))
    }

    /// Add a whole number of minor units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] when the result leaves
    /// the minor-unit range.
    pub fn plus_minor(self, minor: i64) -> Result<Self, MoneyError> {
        if minor == 0 {
            return Ok(self);
        }
        self.amount_minor()
            .checked_add(minor)
            .map(|value| self.with_minor(value))
            .ok_or(MoneyError::overflow("plus_minor"))
    }

    /// Subtract another money value in the same currency.
    ///
    /// A zero operand returns `self` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies and
    /// [`MoneyError::ArithmeticOverflow`] when the difference leaves the
    /// minor-unit range.
    pub fn minus(self, other: Self) -> Result<Self, MoneyError> {
        self.check_currency(other)?;
        if other.is_zero() {
            return Ok(self);
        }
        self.amount_minor()
            .checked_sub(other.amount_minor())
            .map(|minor| self.with_minor(minor))
            .ok_or(MoneyError::overflow("minus"))
    }

    /// Subtract an exact decimal amount at the currency's scale.
    ///
    /// # Errors
    ///
    /// As [`Money::plus_amount`].
    pub fn minus_amount(self, amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_zero() {
            return Ok(self);
        }
        let difference = self
            .amount()
            .checked_sub(amount)
            .ok_or(MoneyError::overflow("minus_amount"))?;
        let minor = rounding::exact_minor(difference, self.decimal_places())?;
        Ok(self.with_minor(minor))
    }

    /// Subtract a whole number of major units.
    ///
    /// # Errors
    ///
    /// As [`Money::plus_major`].
    pub fn minus_major(self, major: i64) -> Result<Self, MoneyError> {
        if major == 0 {
            return Ok(self);
        }
        let delta = major
            .checked_mul(10i64.pow(self.decimal_places()))
            .ok_or(MoneyError::overflow("minus_major"))?;
        self.amount_minor()
            .checked_sub(delta)
            .map(|minor| self.with_minor(minor))
            .ok_or(MoneyError::overflow("minus_major"))
    }

    /// Subtract a whole number of minor units.
    ///
    /// # Errors
    ///
    /// As [`Money::plus_minor`].
    pub fn minus_minor(self, minor: i64) -> Result<Self, MoneyError> {
        if minor == 0 {
            return Ok(self);
        }
        self.amount_minor()
            .checked_sub(minor)
            .map(|value| self.with_minor(value))
            .ok_or(MoneyError::overflow("minus_minor"))
    }

    /// Multiply by an exact decimal, rescaling the product to the
    /// currency's scale under `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InexactRounding`] when the product is not
    /// exact at the currency scale under [`RoundingMode::Unnecessary`],
    /// and [`MoneyError::ArithmeticOverflow`] when the result leaves the
    /// minor-unit range.
    pub fn multiplied_by(
        self,
        multiplier: Decimal,
        mode: RoundingMode,
    ) -> Result<Self, MoneyError> {
        let product = self
            .amount()
            .checked_mul(multiplier)
            .ok_or(MoneyError::overflow("multiplied_by"))?;
        let minor = rounding::decimal_to_minor(product, self.decimal_places(), mode)?;
        Ok(self.with_minor(minor))
    }

    /// Multiply by a whole number; always exact apart from overflow.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] when the product leaves
    /// the minor-unit range.
    pub fn multiplied_by_int(self, multiplier: i64) -> Result<Self, MoneyError> {
        self.amount_minor()
            .checked_mul(multiplier)
            .map(|minor| self.with_minor(minor))
            .ok_or(MoneyError::overflow("multiplied_by_int"))
    }

    /// Divide by an exact decimal, rescaling the full-precision quotient
    /// to the currency's scale under `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] for a zero divisor,
    /// [`MoneyError::InexactRounding`] under
    /// [`RoundingMode::Unnecessary`] when the quotient is inexact, and
    /// [`MoneyError::ArithmeticOverflow`] on range overflow.
    pub fn divided_by(self, divisor: Decimal, mode: RoundingMode) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = self
            .amount()
            .checked_div(divisor)
            .ok_or(MoneyError::overflow("divided_by"))?;
        let minor = rounding::decimal_to_minor(quotient, self.decimal_places(), mode)?;
        Ok(self.with_minor(minor))
    }

    /// Divide by a whole number, truncating the quotient toward zero
    /// (`GBP 2.34` divided by `-3` is `GBP -0.78`).
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::DivisionByZero`] for a zero divisor and
    /// [`MoneyError::ArithmeticOverflow`] for the single unrepresentable
    /// quotient (`i64::MIN / -1`).
    pub fn divided_by_int(self, divisor: i64) -> Result<Self, MoneyError> {
        if divisor == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount_minor()
            .checked_div(divisor)
            .map(|minor| self.with_minor(minor))
            .ok_or(MoneyError::overflow("divided_by_int"))
    }

    /// Flip the sign.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::ArithmeticOverflow`] for the single
    /// minor-unit value with no positive counterpart.
    pub fn negated(self) -> Result<Self, MoneyError> {
        self.amount_minor()
            .checked_neg()
            .map(|minor| self.with_minor(minor))
            .ok_or(MoneyError::overflow("negated"))
    }

    /// Absolute value.
    ///
    /// # Errors
    ///
    /// As [`Money::negated`].
    pub fn abs(self) -> Result<Self, MoneyError> {
        self.amount_minor()
            .checked_abs()
            .map(|minor| self.with_minor(minor))
            .ok_or(MoneyError::overflow("abs"))
    }
}
