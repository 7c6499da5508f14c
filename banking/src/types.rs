//! Domain types for the banking crate.
//!
//! Identifiers are opaque UUID newtypes; money is an arbitrary-precision
//! decimal that keeps the scale it was written with (`"1000.12345"` stays
//! five decimal places through debits and credits). Sums and differences
//! are exact at any magnitude and scale.

use crate::error::BankingError;
use bigdecimal::{BigDecimal, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a bank account
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Creates a new random `AccountId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a bank
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankId(Uuid);

impl BankId {
    /// Creates a new random `BankId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BankId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exact monetary amount.
///
/// `==` and ordering compare numeric values, so `100` equals `100.00`;
/// [`Money::scale`] tells the two apart. Displays as a decimal string with
/// its scale preserved: `1000.12345` minus `100` prints `900.12345` and
/// `2500` minus `400` prints `2100`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(BigDecimal);

impl Money {
    /// Creates a `Money` amount from a whole number of units
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(BigDecimal::from(units))
    }

    /// Number of digits after the decimal point, as written
    #[must_use]
    pub fn scale(&self) -> i64 {
        self.0.as_bigint_and_exponent().1
    }

    /// Whole units, truncated toward zero and saturated to the `i64` range
    #[must_use]
    pub fn whole_units(&self) -> i64 {
        self.0.with_scale(0).to_i64().unwrap_or(if self.is_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    /// Nearest `f64` approximation
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    /// Checks if this amount is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if this amount is strictly below zero
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Checks if this amount is strictly above zero
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }
}

impl Default for Money {
    fn default() -> Self {
        Self(BigDecimal::zero())
    }
}

impl Add for &Money {
    type Output = Money;

    fn add(self, other: Self) -> Money {
        Money(&self.0 + &other.0)
    }
}

impl Sub for &Money {
    type Output = Money;

    fn sub(self, other: Self) -> Money {
        Money(&self.0 - &other.0)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = BankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s.trim())
            .map(Self)
            .map_err(|e| BankingError::InvalidAmount(format!("{s:?}: {e}")))
    }
}
