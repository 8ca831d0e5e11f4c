//! Distribution error types.

use apportion_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while apportioning a total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    // ========== Input Errors ==========
    /// A percentage is below zero.
    #[error("Percentage at index {index} is negative: {value}")]
    NegativePercentage {
        /// Position in the input sequence.
        index: usize,
        /// The offending value.
        value: Decimal,
    },

    /// A percentage is NaN or infinite.
    #[error("Percentage at index {index} is not a finite number")]
    NonFinitePercentage {
        /// Position in the input sequence.
        index: usize,
    },

    /// A percentage cannot be represented as a decimal.
    #[error("Percentage at index {index} is out of range")]
    PercentageOutOfRange {
        /// Position in the input sequence.
        index: usize,
    },

    /// Percentages do not add up to 100 (strict mode only).
    #[error("Percentages sum to {sum}, expected 100")]
    PercentageSumMismatch {
        /// Actual sum of the percentages.
        sum: Decimal,
    },

    /// Percentages are too large to add up.
    #[error("Percentages are too large to sum")]
    PercentageSumOverflow,

    // ========== Arithmetic Errors ==========
    /// A quota or a running sum does not fit the integer range.
    #[error("Arithmetic overflow while apportioning")]
    Overflow,

    /// Every share is already zero but units still have to be removed.
    #[error("Distribution impossible: {remaining} unit(s) left to remove and every share is zero")]
    DistributionImpossible {
        /// Units that could not be removed.
        remaining: u64,
    },
}

impl DistributionError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativePercentage { .. } => "NEGATIVE_PERCENTAGE",
            Self::NonFinitePercentage { .. } => "NON_FINITE_PERCENTAGE",
            Self::PercentageOutOfRange { .. } => "PERCENTAGE_OUT_OF_RANGE",
            Self::PercentageSumMismatch { .. } => "PERCENTAGE_SUM_MISMATCH",
            Self::PercentageSumOverflow => "PERCENTAGE_SUM_OVERFLOW",
            Self::Overflow => "OVERFLOW",
            Self::DistributionImpossible { .. } => "DISTRIBUTION_IMPOSSIBLE",
        }
    }

    /// Returns true if the error was caused by the caller's input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NegativePercentage { .. }
                | Self::NonFinitePercentage { .. }
                | Self::PercentageOutOfRange { .. }
                | Self::PercentageSumMismatch { .. }
                | Self::PercentageSumOverflow
        )
    }
}

impl From<DistributionError> for AppError {
    fn from(err: DistributionError) -> Self {
        if err.is_input_error() {
            Self::Validation(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}
