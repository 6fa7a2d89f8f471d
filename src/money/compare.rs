//! Currency-checked ordering.
//!
//! Ordering across different currencies is undefined, so [`Money`] does
//! not implement [`Ord`]. [`PartialOrd`] answers `None` for mismatched
//! currencies, and the explicit predicates surface the mismatch as an
//! error.

use std::cmp::Ordering;

use super::Money;
use crate::errors::MoneyError;

impl Money {
    /// Compare with another value in the same currency.
    ///
    /// The ordering is total for equal-currency values and consistent
    /// with equality.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn compare_to(&self, other: &Self) -> Result<Ordering, MoneyError> {
        self.check_currency(*other)?;
        Ok(self.amount_minor().cmp(&other.amount_minor()))
    }

    /// Whether this value is strictly greater than `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn is_greater_than(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.compare_to(other)? == Ordering::Greater)
    }

    /// Whether this value is strictly less than `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] across currencies.
    pub fn is_less_than(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.compare_to(other)? == Ordering::Less)
    }
}

impl PartialOrd for Money {
    /// `None` across currencies; otherwise the amount ordering.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(text: &str) -> Money {
        Money::parse(text).unwrap()
    }

    #[test]
    fn compare_to_orders_amounts() {
        let a = money("GBP 2.34");
        let b = money("GBP 2.35");
        let c = money("GBP 2.36");

        assert_eq!(a.compare_to(&a).unwrap(), Ordering::Equal);
        assert_eq!(a.compare_to(&b).unwrap(), Ordering::Less);
        assert_eq!(b.compare_to(&a).unwrap(), Ordering::Greater);
        assert_eq!(a.compare_to(&c).unwrap(), Ordering::Less);
        assert_eq!(c.compare_to(&b).unwrap(), Ordering::Greater);
    }

    #[test]
    fn compare_to_currency_mismatch() {
        let err = money("GBP 2.34").compare_to(&money("USD 2.35")).unwrap_err();
        assert!(matches!(err, MoneyError::CurrencyMismatch { .. }));
    }

    #[test]
    fn greater_and_less_predicates() {
        let a = money("GBP 2.34");
        let b = money("GBP 2.35");

        assert!(!a.is_greater_than(&a).unwrap());
        assert!(b.is_greater_than(&a).unwrap());
        assert!(!a.is_greater_than(&b).unwrap());

        assert!(!a.is_less_than(&a).unwrap());
        assert!(a.is_less_than(&b).unwrap());
        assert!(!b.is_less_than(&a).unwrap());
    }

    #[test]
    fn predicates_currency_mismatch() {
        let a = money("GBP 2.34");
        let b = money("USD 2.35");
        assert!(a.is_greater_than(&b).is_err());
        assert!(a.is_less_than(&b).is_err());
    }

    #[test]
    fn partial_ord_within_currency() {
        let a = money("GBP 2.34");
        let b = money("GBP 2.35");
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
    }

    #[test]
    fn partial_ord_is_none_across_currencies() {
        let a = money("GBP 2.34");
        let b = money("USD 2.35");
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b));
        assert!(!(a > b));
    }

    #[test]
    fn ordering_consistent_with_equality() {
        let a = money("GBP 2.34");
        let b = money("GBP 2.34");
        assert_eq!(a.compare_to(&b).unwrap(), Ordering::Equal);
        assert_eq!(a, b);
    }
}
