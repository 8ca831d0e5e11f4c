//! Shared types, errors, and configuration for Apportion.
//!
//! This crate provides common types used across all other crates:
//! - `Percentage` input type with exact decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
pub use types::Percentage;
