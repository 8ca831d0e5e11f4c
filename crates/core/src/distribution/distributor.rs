//! Largest Remainder distributor.
//!
//! The settle step walks the adjustment order circularly, one unit per visit.
//! Whole passes are applied in bulk (every visited share moves by the same
//! amount), so the cost grows with the number of shares and not with the gap.
//! Only the last, partial pass is walked unit by unit.

use rust_decimal::Decimal;
use tracing::{debug, trace, warn};

use super::error::DistributionError;
use super::types::{AdjustmentMode, Apportionment, DistributionOptions, QuotaEntry};
use super::validation::validate_percentages;
use crate::quota::{compute_quota, percentage_from_f64};

/// Apportions integer totals by percentage using the Largest Remainder Method.
///
/// Guarantees, for every successful call on a non-empty list:
/// - one share per percentage, in input order
/// - shares sum EXACTLY to the total
/// - no share is negative
#[derive(Debug, Clone, Copy, Default)]
pub struct Distributor {
    options: DistributionOptions,
}

impl Distributor {
    /// Creates a distributor with the given input checks.
    #[must_use]
    pub const fn new(options: DistributionOptions) -> Self {
        Self { options }
    }

    /// Returns the input checks in use.
    #[must_use]
    pub const fn options(&self) -> &DistributionOptions {
        &self.options
    }

    /// Splits `total` into shares following `percentages`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use apportion_core::Distributor;
    ///
    /// let shares = Distributor::default()
    ///     .distribute(10, &[dec!(33.3), dec!(33.3), dec!(33.4)])
    ///     .unwrap();
    /// assert_eq!(shares, vec![4, 3, 3]);
    /// ```
    pub fn distribute(
        &self,
        total: u64,
        percentages: &[Decimal],
    ) -> Result<Vec<u64>, DistributionError> {
        self.apportion(total, percentages).map(|result| result.shares)
    }

    /// Same as [`Distributor::distribute`] for binary float percentages.
    ///
    /// Each float is converted to an exact decimal first; NaN and infinities
    /// are rejected.
    pub fn distribute_f64(
        &self,
        total: u64,
        percentages: &[f64],
    ) -> Result<Vec<u64>, DistributionError> {
        let percentages = percentages
            .iter()
            .enumerate()
            .map(|(index, &value)| percentage_from_f64(value, index))
            .collect::<Result<Vec<_>, _>>()?;
        self.distribute(total, &percentages)
    }

    /// Splits `total` and reports the raw quotas, mode and gap alongside the
    /// final shares.
    pub fn apportion(
        &self,
        total: u64,
        percentages: &[Decimal],
    ) -> Result<Apportionment, DistributionError> {
        if percentages.is_empty() {
            return Ok(Apportionment::empty());
        }

        validate_percentages(percentages, &self.options)?;

        let raw = percentages
            .iter()
            .map(|&percentage| compute_quota(total, percentage))
            .collect::<Result<Vec<_>, _>>()?;

        // Rounding can push the raw sum past u64::MAX even when the total fits.
        let raw_sum: u128 = raw.iter().copied().map(u128::from).sum();

        let mode = AdjustmentMode::for_sums(total, raw_sum);
        let gap = u64::try_from(u128::from(total).abs_diff(raw_sum))
            .map_err(|_| DistributionError::Overflow)?;

        debug!(
            total,
            %raw_sum,
            %mode,
            gap,
            entries = raw.len(),
            "apportioning"
        );

        let mut shares = raw.clone();
        settle(&mut shares, mode, gap)?;

        Ok(Apportionment {
            raw,
            shares,
            mode,
            gap,
        })
    }
}

/// Splits `total` into shares following `percentages`, with default options.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
///
/// let shares = apportion_core::distribute(100, &[dec!(50), dec!(30), dec!(20)]).unwrap();
/// assert_eq!(shares, vec![50, 30, 20]);
/// ```
pub fn distribute(total: u64, percentages: &[Decimal]) -> Result<Vec<u64>, DistributionError> {
    Distributor::default().distribute(total, percentages)
}

/// Splits `total` into shares following float `percentages`, with default
/// options.
pub fn distribute_f64(total: u64, percentages: &[f64]) -> Result<Vec<u64>, DistributionError> {
    Distributor::default().distribute_f64(total, percentages)
}

/// Order in which shares receive adjustments.
///
/// Largest first when incrementing, smallest first when decrementing.
/// `sort_by_key` is stable, so equal quotas keep input order.
fn adjustment_order(quotas: &[u64], mode: AdjustmentMode) -> Vec<QuotaEntry> {
    let mut entries: Vec<QuotaEntry> = quotas
        .iter()
        .enumerate()
        .map(|(index, &quota)| QuotaEntry { quota, index })
        .collect();

    match mode {
        AdjustmentMode::Increment => entries.sort_by_key(|entry| std::cmp::Reverse(entry.quota)),
        AdjustmentMode::Decrement => entries.sort_by_key(|entry| entry.quota),
        AdjustmentMode::Balanced => {}
    }

    entries
}

fn settle(shares: &mut [u64], mode: AdjustmentMode, gap: u64) -> Result<(), DistributionError> {
    if gap == 0 {
        return Ok(());
    }

    let order = adjustment_order(shares, mode);
    trace!(
        order = ?order.iter().map(|entry| entry.index).collect::<Vec<_>>(),
        "adjustment order"
    );

    match mode {
        AdjustmentMode::Increment => increment(shares, &order, gap),
        AdjustmentMode::Decrement => decrement(shares, &order, gap),
        AdjustmentMode::Balanced => Ok(()),
    }
}

fn increment(shares: &mut [u64], order: &[QuotaEntry], gap: u64) -> Result<(), DistributionError> {
    let len = u64::try_from(order.len()).map_err(|_| DistributionError::Overflow)?;
    let passes = gap / len;
    let rest = gap % len;

    for (position, entry) in (0u64..).zip(order) {
        let units = passes + u64::from(position < rest);
        let share = &mut shares[entry.index];
        *share = share
            .checked_add(units)
            .ok_or(DistributionError::Overflow)?;
    }

    Ok(())
}

fn decrement(
    shares: &mut [u64],
    order: &[QuotaEntry],
    mut gap: u64,
) -> Result<(), DistributionError> {
    while gap > 0 {
        // Zero shares are visited but never take a unit.
        let live: Vec<usize> = order
            .iter()
            .map(|entry| entry.index)
            .filter(|&index| shares[index] > 0)
            .collect();

        let Some(floor) = live.iter().map(|&index| shares[index]).min() else {
            warn!(remaining = gap, "every share is zero, cannot remove remaining units");
            return Err(DistributionError::DistributionImpossible { remaining: gap });
        };

        let count = u64::try_from(live.len()).map_err(|_| DistributionError::Overflow)?;
        let passes = (gap / count).min(floor);

        if passes > 0 {
            for &index in &live {
                shares[index] -= passes;
            }
            gap -= passes * count;
        } else {
            // gap < count: the final pass ends before wrapping.
            let take = usize::try_from(gap).map_err(|_| DistributionError::Overflow)?;
            for &index in live.iter().take(take) {
                shares[index] -= 1;
            }
            gap = 0;
        }
    }

    Ok(())
}
