//! Largest Remainder apportionment.
//!
//! This crate splits a whole-number total into integer shares that follow a
//! list of target percentages and always sum back to the total. It has no I/O;
//! everything is a pure computation over in-memory slices.
//!
//! # Modules
//!
//! - `quota` - Proportional quantity for one percentage (exact decimal rounding)
//! - `distribution` - Remainder distribution across all shares

pub mod distribution;
pub mod quota;

pub use distribution::{
    AdjustmentMode, Apportionment, DistributionError, DistributionOptions, Distributor,
    distribute, distribute_f64,
};
pub use quota::compute_quota;
