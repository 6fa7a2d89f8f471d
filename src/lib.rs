// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::items_after_statements
    )
)]

//! Currency-safe money arithmetic on exact decimals.
//!
//! A [`Money`] value pairs a [`CurrencyUnit`] with an exact decimal amount
//! held at the currency's canonical scale (2 fractional digits for GBP,
//! 0 for JPY). All arithmetic is overflow-checked in the 64-bit minor-unit
//! domain, rescaling is driven by an explicit [`RoundingMode`], and every
//! binary operation enforces that both operands share a currency. Nothing
//! in the arithmetic path touches binary floating point.
//!
//! # Example
//!
//! ```
//! use coinage::{CurrencyUnit, Money, RoundingMode};
//!
//! # fn main() -> Result<(), coinage::MoneyError> {
//! let gbp = CurrencyUnit::of("GBP")?;
//! let price = Money::parse("GBP 2.34")?;
//! let shipping = Money::of_minor(gbp, 50);
//! let total = price.multiplied_by_int(3)?.plus(shipping)?;
//! assert_eq!(total.to_string(), "GBP 7.52");
//!
//! let eur = CurrencyUnit::of("EUR")?;
//! let rate = rust_decimal::Decimal::new(117, 2); // 1.17
//! let abroad = total.converted_to(eur, rate, RoundingMode::HalfEven)?;
//! assert_eq!(abroad.to_string(), "EUR 8.80");
//! # Ok(()) }
//! ```
//!
//! # Failure model
//!
//! Every fallible operation returns [`MoneyError`]; nothing panics, and no
//! overflow or precision loss is ever silent. Operations that would
//! discard precision take a [`RoundingMode`], and passing
//! [`RoundingMode::Unnecessary`] turns any inexact rescale into an error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Currency identification, metadata and registries.
pub mod currency;

/// The crate-wide error type.
pub mod errors;

/// The money value type and its operations.
pub mod money;

pub use currency::{CurrencyRegistry, CurrencyUnit, IsoCurrencies};
pub use errors::MoneyError;
pub use money::{Money, RoundingMode};
