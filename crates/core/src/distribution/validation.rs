//! Input validation for percentage lists.

use rust_decimal::Decimal;

use super::error::DistributionError;
use super::types::DistributionOptions;

/// Validates a percentage list before apportioning.
///
/// Every entry must be zero or positive. With `require_full_sum` set, the
/// entries must also sum to 100 within `sum_tolerance`.
///
/// # Errors
///
/// Returns the first violation found, scanning in input order.
pub fn validate_percentages(
    percentages: &[Decimal],
    options: &DistributionOptions,
) -> Result<(), DistributionError> {
    let mut sum = Decimal::ZERO;

    for (index, &value) in percentages.iter().enumerate() {
        if value < Decimal::ZERO {
            return Err(DistributionError::NegativePercentage { index, value });
        }
        sum = sum
            .checked_add(value)
            .ok_or(DistributionError::PercentageSumOverflow)?;
    }

    if options.require_full_sum && (sum - Decimal::ONE_HUNDRED).abs() > options.sum_tolerance {
        return Err(DistributionError::PercentageSumMismatch { sum });
    }

    Ok(())
}
