//! Currency metadata lookup.

use super::CurrencyUnit;
use crate::errors::MoneyError;

/// Resolves currency codes to their minor-unit scale.
///
/// The core consumes currency metadata through this trait rather than
/// global state, so arithmetic stays deterministic and callers can inject
/// a fixture table in tests or extend the ISO set with private codes.
pub trait CurrencyRegistry: Send + Sync {
    /// Number of decimal places for `code`, if the code is known.
    fn decimal_places(&self, code: &str) -> Option<u32>;

    /// Whether `code` resolves in this registry.
    fn is_valid(&self, code: &str) -> bool {
        self.decimal_places(code).is_some()
    }

    /// Resolve `code` to a [`CurrencyUnit`].
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] if the code does not
    /// resolve, and passes through [`CurrencyUnit::new`] validation for
    /// registries that hand out malformed codes or scales.
    fn resolve(&self, code: &str) -> Result<CurrencyUnit, MoneyError> {
        match self.decimal_places(code) {
            Some(decimal_places) => CurrencyUnit::new(code, decimal_places),
            None => Err(MoneyError::UnknownCurrency {
                code: code.to_string(),
            }),
        }
    }
}

/// Decimal places for the common ISO 4217 currencies, sorted by code.
static ISO_TABLE: &[(&str, u32)] = &[
    ("AED", 2),
    ("AUD", 2),
    ("BHD", 3),
    ("BRL", 2),
    ("CAD", 2),
    ("CHF", 2),
    ("CLP", 0),
    ("CNY", 2),
    ("CZK", 2),
    ("DKK", 2),
    ("EUR", 2),
    ("GBP", 2),
    ("HKD", 2),
    ("HUF", 2),
    ("IDR", 2),
    ("ILS", 2),
    ("INR", 2),
    ("ISK", 0),
    ("JOD", 3),
    ("JPY", 0),
    ("KRW", 0),
    ("KWD", 3),
    ("MXN", 2),
    ("MYR", 2),
    ("NOK", 2),
    ("NZD", 2),
    ("OMR", 3),
    ("PHP", 2),
    ("PLN", 2),
    ("RUB", 2),
    ("SAR", 2),
    ("SEK", 2),
    ("SGD", 2),
    ("THB", 2),
    ("TND", 3),
    ("TRY", 2),
    ("TWD", 2),
    ("USD", 2),
    ("VND", 0),
    ("ZAR", 2),
];

/// The built-in ISO 4217 registry.
///
/// Backed by a static sorted table; lookups are a binary search and the
/// registry is freely shareable across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoCurrencies;

impl CurrencyRegistry for IsoCurrencies {
    fn decimal_places(&self, code: &str) -> Option<u32> {
        ISO_TABLE
            .binary_search_by_key(&code, |&(entry, _)| entry)
            .ok()
            .map(|index| ISO_TABLE[index].1)
    }
}
