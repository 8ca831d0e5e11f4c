//! Remainder distribution using the Largest Remainder Method.
//!
//! Each percentage is first turned into a rounded quota (see [`crate::quota`]).
//! The rounded quotas rarely add up to the total, so the difference is settled
//! one unit at a time, walking the shares in a fixed order:
//! largest quota first when units are missing, smallest quota first when
//! there are too many. Ties keep input order. A share is never taken below zero.

pub mod distributor;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use distributor::{Distributor, distribute, distribute_f64};
pub use error::DistributionError;
pub use types::{AdjustmentMode, Apportionment, DistributionOptions, QuotaEntry};
