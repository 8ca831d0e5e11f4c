//! Common types used across the application.

pub mod percentage;

pub use percentage::{Percentage, PercentageParseError};
