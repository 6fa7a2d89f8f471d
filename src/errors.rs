//! Error types for money operations.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::currency::CurrencyUnit;

/// Errors produced by money construction, arithmetic, rounding, conversion
/// and parsing.
///
/// Every failure is terminal for the call that raised it: nothing is retried
/// or recovered internally, and no result is silently truncated or wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// A currency code did not resolve to a known currency.
    #[error("unknown currency code '{code}'")]
    UnknownCurrency {
        /// The code that failed to resolve.
        code: String,
    },

    /// Text did not match the canonical `"CODE amount"` grammar.
    #[error("cannot parse money from '{text}': {reason}")]
    MalformedInput {
        /// The rejected input.
        text: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A binary operation received operands in different currencies.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// The receiver's currency.
        expected: CurrencyUnit,
        /// The other operand's currency.
        found: CurrencyUnit,
    },

    /// An amount carries more fractional digits than the currency allows
    /// and no rounding mode was supplied to absorb them.
    #[error("amount {amount} cannot be represented exactly with {decimal_places} decimal places")]
    InexactAmount {
        /// The offending amount.
        amount: Decimal,
        /// The currency's canonical scale.
        decimal_places: u32,
    },

    /// A rescale would discard non-zero digits under
    /// [`RoundingMode::Unnecessary`](crate::RoundingMode::Unnecessary).
    #[error("rounding is required but the rounding mode forbids it")]
    InexactRounding,

    /// A rescale requested more precision than the currency carries.
    #[error("scale {requested} exceeds the currency's {max} decimal places")]
    InvalidScale {
        /// The requested target scale.
        requested: i32,
        /// The currency's decimal places.
        max: u32,
    },

    /// A currency conversion was requested with invalid parameters.
    #[error("invalid conversion: {reason}")]
    InvalidConversion {
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The true result's minor-unit value left the 64-bit signed range.
    #[error("arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// The operation that overflowed.
        operation: &'static str,
    },
}

impl MoneyError {
    /// Shorthand used by the arithmetic paths.
    pub(crate) const fn overflow(operation: &'static str) -> Self {
        Self::ArithmeticOverflow { operation }
    }
}
