//! Price type for product records.
//!
//! Uses a cents-based integer representation so that prices compare with a
//! total order and never carry NaN or rounding drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a value cannot become a [`Price`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    #[error("must be a number")]
    NotANumber,
    #[error("must be finite")]
    NotFinite,
    #[error("must not be negative")]
    Negative,
    #[error("is too large")]
    TooLarge,
    #[error("must not have more than two decimal places")]
    TooPrecise,
}

/// A non-negative product price in cents.
///
/// Serializes as its decimal amount (`10.99`), so fixtures stay readable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price {
    amount_cents: i64,
}

impl Price {
    /// Create a price from cents.
    pub fn from_cents(amount_cents: i64) -> Result<Self, PriceError> {
        if amount_cents < 0 {
            return Err(PriceError::Negative);
        }
        Ok(Self { amount_cents })
    }

    /// Create a price from a decimal amount.
    ///
    /// ```
    /// use catalog_core::price::Price;
    /// let price = Price::from_decimal(49.99).unwrap();
    /// assert_eq!(price.cents(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, PriceError> {
        if amount.is_nan() {
            return Err(PriceError::NotANumber);
        }
        if amount.is_infinite() {
            return Err(PriceError::NotFinite);
        }
        if amount < 0.0 {
            return Err(PriceError::Negative);
        }
        let scaled = amount * 100.0;
        let cents = scaled.round();
        if cents >= i64::MAX as f64 {
            return Err(PriceError::TooLarge);
        }
        // Only binary representation error may be rounded away, never a
        // fraction of a cent.
        let tolerance = (scaled * f64::EPSILON * 8.0).max(1e-6);
        if (scaled - cents).abs() > tolerance {
            return Err(PriceError::TooPrecise);
        }
        Ok(Self {
            amount_cents: cents as i64,
        })
    }

    /// Zero price.
    pub const fn zero() -> Self {
        Self { amount_cents: 0 }
    }

    pub fn cents(&self) -> i64 {
        self.amount_cents
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format!("{}.{:02}", self.amount_cents / 100, self.amount_cents % 100)
    }
}

impl TryFrom<f64> for Price {
    type Error = PriceError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::from_decimal(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.to_decimal()
    }
}

impl FromStr for Price {
    type Err = PriceError;

    /// Parse user-entered text such as `12.5` or `$12.50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        let amount: f64 = digits.parse().map_err(|_| PriceError::NotANumber)?;
        if let Some((_, fraction)) = digits.split_once('.') {
            let fraction = fraction.split(['e', 'E']).next().unwrap_or_default();
            if fraction.len() > 2 && fraction[2..].bytes().any(|b| b != b'0') {
                return Err(PriceError::TooPrecise);
            }
        }
        Price::from_decimal(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.display_amount())
    }
}
