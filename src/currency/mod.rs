//! Currency identification and metadata.
//!
//! A [`CurrencyUnit`] is the pairing of a three-letter uppercase code with
//! the number of fractional digits the currency conventionally carries
//! (2 for GBP or USD, 0 for JPY, 3 for BHD). Codes are resolved through a
//! [`CurrencyRegistry`]; the built-in [`IsoCurrencies`] table covers the
//! common ISO 4217 set.

mod registry;

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::MoneyError;

pub use registry::{CurrencyRegistry, IsoCurrencies};

/// A currency: a three-letter uppercase code plus its minor-unit scale.
///
/// Two units are the same currency iff their codes are equal; the scale is
/// metadata carried along for arithmetic, not part of identity.
#[derive(Debug, Clone, Copy, Eq)]
pub struct CurrencyUnit {
    code: [u8; 3],
    decimal_places: u32,
}

impl CurrencyUnit {
    /// Largest supported minor-unit scale. Keeps one major unit
    /// representable in 64-bit minor units; real currencies stop at 3.
    pub const MAX_DECIMAL_PLACES: u32 = 18;

    pub(crate) const fn from_parts(code: [u8; 3], decimal_places: u32) -> Self {
        Self {
            code,
            decimal_places,
        }
    }

    /// Create a currency unit with an explicit minor-unit scale.
    ///
    /// Intended for registries of non-ISO currencies; for the common case
    /// use [`CurrencyUnit::of`].
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] unless `code` is exactly
    /// three ASCII uppercase letters, and [`MoneyError::InvalidScale`] if
    /// `decimal_places` exceeds [`Self::MAX_DECIMAL_PLACES`].
    pub fn new(code: &str, decimal_places: u32) -> Result<Self, MoneyError> {
        let &[a, b, c] = code.as_bytes() else {
            return Err(MoneyError::UnknownCurrency {
                code: code.to_string(),
            });
        };
        if ![a, b, c].into_iter().all(|byte| byte.is_ascii_uppercase()) {
            return Err(MoneyError::UnknownCurrency {
                code: code.to_string(),
            });
        }
        if decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(MoneyError::InvalidScale {
                requested: i32::try_from(decimal_places).unwrap_or(i32::MAX),
                max: Self::MAX_DECIMAL_PLACES,
            });
        }
        Ok(Self::from_parts([a, b, c], decimal_places))
    }

    /// Resolve `code` through the built-in ISO 4217 table.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] if the code is not in the
    /// table.
    pub fn of(code: &str) -> Result<Self, MoneyError> {
        IsoCurrencies.resolve(code)
    }

    /// The three-letter uppercase code.
    #[must_use]
    pub fn code(&self) -> &str {
        // Constructors only admit ASCII uppercase, so this cannot fail.
        std::str::from_utf8(&self.code).unwrap_or_default()
    }

    /// Number of fractional digits in the canonical representation.
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }
}

impl PartialEq for CurrencyUnit {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for CurrencyUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for CurrencyUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for CurrencyUnit {
    /// Deserializes from a code string via the built-in ISO table.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::of(&code).map_err(D::Error::custom)
    }
}
