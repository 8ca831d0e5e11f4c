//! Distribution data types.

use apportion_shared::config::DistributionConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of the unit adjustments for one run.
///
/// Chosen once from the raw quota sum and fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentMode {
    /// Raw quotas fall short of the total; largest quotas gain units first.
    Increment,
    /// Raw quotas exceed the total; smallest non-zero quotas lose units first.
    Decrement,
    /// Raw quotas already sum to the total.
    Balanced,
}

impl AdjustmentMode {
    /// Picks the mode for a total and the sum of its raw quotas.
    #[must_use]
    pub fn for_sums(total: u64, raw_sum: u128) -> Self {
        match u128::from(total).cmp(&raw_sum) {
            std::cmp::Ordering::Greater => Self::Increment,
            std::cmp::Ordering::Less => Self::Decrement,
            std::cmp::Ordering::Equal => Self::Balanced,
        }
    }
}

impl std::fmt::Display for AdjustmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increment => write!(f, "increment"),
            Self::Decrement => write!(f, "decrement"),
            Self::Balanced => write!(f, "balanced"),
        }
    }
}

/// A raw quota paired with its position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaEntry {
    /// Rounded proportional quantity.
    pub quota: u64,
    /// Index into the original percentage sequence.
    pub index: usize,
}

/// Full outcome of one apportionment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apportionment {
    /// Rounded quotas before any adjustment, in input order.
    pub raw: Vec<u64>,
    /// Final shares, in input order. Sums to the total.
    pub shares: Vec<u64>,
    /// Direction of the adjustments.
    pub mode: AdjustmentMode,
    /// Number of single-unit adjustments applied.
    pub gap: u64,
}

impl Apportionment {
    /// Result for an empty percentage list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            raw: Vec::new(),
            shares: Vec::new(),
            mode: AdjustmentMode::Balanced,
            gap: 0,
        }
    }

    /// Sum of the final shares.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.shares.iter().sum()
    }
}

/// Input checks applied before apportioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DistributionOptions {
    /// Reject percentage lists whose sum differs from 100 by more than
    /// `sum_tolerance`.
    pub require_full_sum: bool,
    /// Allowed absolute deviation from 100.
    pub sum_tolerance: Decimal,
}

impl DistributionOptions {
    /// Options that reject percentage lists not summing to exactly 100.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            require_full_sum: true,
            sum_tolerance: Decimal::ZERO,
        }
    }

    /// Sets the tolerance used by the full-sum check.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.sum_tolerance = tolerance.abs();
        self
    }
}

impl From<&DistributionConfig> for DistributionOptions {
    fn from(config: &DistributionConfig) -> Self {
        Self {
            require_full_sum: config.require_full_sum,
            sum_tolerance: config.sum_tolerance.abs(),
        }
    }
}
