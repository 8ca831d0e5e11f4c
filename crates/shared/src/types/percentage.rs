//! Percentage type with decimal precision.
//!
//! CRITICAL: Never use floating-point for percentages.
//! This type wraps `rust_decimal::Decimal` so `33.4` stays exactly `33.4`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A target percentage, conceptually in `[0, 100]`.
///
/// The bound is not enforced here; range checks belong to the distributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

/// Error returned when a percentage cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercentageParseError {
    /// The input was empty.
    #[error("Empty percentage")]
    Empty,

    /// The input was not a decimal number.
    #[error("Invalid percentage: {0}")]
    Invalid(String),
}

impl Percentage {
    /// Creates a new percentage.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Percentage {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Percentage> for Decimal {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for Percentage {
    type Err = PercentageParseError;

    /// Accepts `33.4` or `33.4%`, with surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        if number.is_empty() {
            return Err(PercentageParseError::Empty);
        }
        Decimal::from_str(number)
            .map(Self)
            .map_err(|_| PercentageParseError::Invalid(s.to_string()))
    }
}
