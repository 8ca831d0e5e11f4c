//! Proportional quantity for a single percentage.
//!
//! CRITICAL: the product `total * percentage / 100` is computed in exact
//! decimal arithmetic and rounded half away from zero. Binary floating point
//! never touches the value, so `10 * 33.4%` is exactly `3.34`.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use crate::distribution::DistributionError;

/// Computes the share of `total` that `percentage` represents, rounded to the
/// nearest integer (midpoints away from zero).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use apportion_core::compute_quota;
///
/// // 10 * 33.4% = 3.34 -> 3
/// assert_eq!(compute_quota(10, dec!(33.4)).unwrap(), 3);
/// // 10 * 25% = 2.5 -> 3
/// assert_eq!(compute_quota(10, dec!(25)).unwrap(), 3);
/// ```
///
/// # Errors
///
/// Returns [`DistributionError::Overflow`] when the product does not fit the
/// decimal range or the rounded result is not a valid `u64`.
pub fn compute_quota(total: u64, percentage: Decimal) -> Result<u64, DistributionError> {
    if total == 0 || percentage.is_zero() {
        return Ok(0);
    }

    Decimal::from(total)
        .checked_mul(percentage)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
        .map(|exact| exact.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_u64())
        .ok_or(DistributionError::Overflow)
}

/// Converts a binary float percentage into an exact decimal.
///
/// The float's shortest round-trip rendering is parsed, so `33.4_f64` becomes
/// exactly `33.4` rather than the nearest binary fraction.
pub fn percentage_from_f64(value: f64, index: usize) -> Result<Decimal, DistributionError> {
    if !value.is_finite() {
        return Err(DistributionError::NonFinitePercentage { index });
    }
    Decimal::from_str(&value.to_string())
        .map_err(|_| DistributionError::PercentageOutOfRange { index })
}
