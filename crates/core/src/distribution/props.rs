//! Property-based tests for the distributor.
//!
//! - Conservation: shares always sum to the total
//! - Shape: one share per percentage, in input order
//! - Direction: shares only move the way the mode says
//! - Equivalence: bulk passes match a literal unit-by-unit circular walk

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::*;
use crate::quota::compute_quota;

/// Strategy to generate totals (0 to 1,000,000).
fn any_total() -> impl Strategy<Value = u64> {
    0u64..1_000_000
}

/// Strategy to generate small totals for the unit walk (0 to 10,000).
fn small_total() -> impl Strategy<Value = u64> {
    0u64..10_000
}

/// Strategy to generate percentage lists (1 to 12 entries, 0.00 to 100.00 each).
fn any_percentages() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec((0i64..=10_000).prop_map(|v| Decimal::new(v, 2)), 1..12)
}

/// Strategy to generate percentages that sum to 100.
fn percentages_summing_to_100() -> impl Strategy<Value = Vec<Decimal>> {
    // Generate 2-10 random values, then normalize to sum to 100
    prop::collection::vec(1u32..100, 2..10).prop_map(|values| {
        let sum: u32 = values.iter().sum();
        let hundred = Decimal::ONE_HUNDRED;
        values
            .iter()
            .map(|v| (hundred * Decimal::from(*v) / Decimal::from(sum)).round_dp(4))
            .collect()
    })
}

/// Reference: one visit per step, one unit per visit, wrapping around.
fn unit_walk(total: u64, percentages: &[Decimal]) -> Vec<u64> {
    let mut quotas: Vec<u64> = percentages
        .iter()
        .map(|&p| compute_quota(total, p).unwrap())
        .collect();
    let sum: u64 = quotas.iter().sum();
    let incrementing = total > sum;
    let mut gap = total.abs_diff(sum);

    let mut order: Vec<(u64, usize)> = quotas.iter().copied().zip(0..).collect();
    if incrementing {
        order.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        order.sort_by(|a, b| a.0.cmp(&b.0));
    }

    let mut cursor = 0;
    while gap != 0 {
        let index = order[cursor].1;
        let mut adjusted = false;
        if incrementing {
            quotas[index] += 1;
            adjusted = true;
        } else if quotas[index] > 0 {
            quotas[index] -= 1;
            adjusted = true;
        }
        cursor = (cursor + 1) % order.len();
        if adjusted {
            gap -= 1;
        }
    }

    quotas
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* total and non-negative percentages, the shares SHALL sum
    /// exactly to the total.
    #[test]
    fn prop_conservation(
        total in any_total(),
        percentages in any_percentages(),
    ) {
        let result = distribute(total, &percentages).unwrap();
        let sum: u64 = result.iter().sum();
        prop_assert_eq!(sum, total, "Sum of shares ({}) must equal total ({})", sum, total);
    }

    /// *For any* input, there SHALL be exactly one share per percentage.
    #[test]
    fn prop_length_preserved(
        total in any_total(),
        percentages in any_percentages(),
    ) {
        let result = distribute(total, &percentages).unwrap();
        prop_assert_eq!(result.len(), percentages.len());
    }

    /// *For any* input, shares SHALL only move in the direction of the mode.
    #[test]
    fn prop_adjustment_direction(
        total in any_total(),
        percentages in any_percentages(),
    ) {
        let result = Distributor::default().apportion(total, &percentages).unwrap();
        for (raw, share) in result.raw.iter().zip(&result.shares) {
            match result.mode {
                AdjustmentMode::Increment => prop_assert!(share >= raw),
                AdjustmentMode::Decrement => prop_assert!(share <= raw),
                AdjustmentMode::Balanced => prop_assert_eq!(share, raw),
            }
        }
        let moved: u64 = result
            .raw
            .iter()
            .zip(&result.shares)
            .map(|(raw, share)| raw.abs_diff(*share))
            .sum();
        prop_assert_eq!(moved, result.gap);
    }

    /// *For any* total, increment units SHALL be spread within one unit of
    /// each other across the adjustment order.
    #[test]
    fn prop_increment_is_even(
        total in any_total(),
        percentages in any_percentages(),
    ) {
        let result = Distributor::default().apportion(total, &percentages).unwrap();
        if result.mode == AdjustmentMode::Increment {
            let added: Vec<u64> = result
                .raw
                .iter()
                .zip(&result.shares)
                .map(|(raw, share)| share - raw)
                .collect();
            let max = added.iter().copied().max().unwrap();
            let min = added.iter().copied().min().unwrap();
            prop_assert!(max - min <= 1);
        }
    }

    /// *For any* input, the bulk distribution SHALL equal the unit walk.
    #[test]
    fn prop_matches_unit_walk(
        total in small_total(),
        percentages in any_percentages(),
    ) {
        let result = distribute(total, &percentages).unwrap();
        prop_assert_eq!(result, unit_walk(total, &percentages));
    }

    /// *For any* percentages summing to 100, strict mode SHALL accept them
    /// and conserve the total.
    #[test]
    fn prop_strict_accepts_normalized(
        total in any_total(),
        percentages in percentages_summing_to_100(),
    ) {
        let options = DistributionOptions::strict().with_tolerance(Decimal::new(1, 2));
        let result = Distributor::new(options).distribute(total, &percentages).unwrap();
        prop_assert_eq!(result.iter().sum::<u64>(), total);
    }

    /// *For any* input, distributing twice SHALL give the same shares.
    #[test]
    fn prop_deterministic(
        total in any_total(),
        percentages in any_percentages(),
    ) {
        let first = distribute(total, &percentages).unwrap();
        let second = distribute(total, &percentages).unwrap();
        prop_assert_eq!(first, second);
    }
}
