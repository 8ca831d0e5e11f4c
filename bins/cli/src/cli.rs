//! Command-line arguments.

use apportion_core::DistributionOptions;
use apportion_shared::Percentage;
use apportion_shared::config::DistributionConfig;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;

/// Split a whole-number total across percentages (Largest Remainder Method).
#[derive(Debug, Parser)]
#[command(name = "apportion", version)]
pub struct Cli {
    /// Quantity to divide.
    pub total: u64,

    /// Target percentages in order, e.g. `33.4` or `33.4%`.
    #[arg(allow_negative_numbers = true)]
    pub percentages: Vec<Percentage>,

    /// Require percentages to sum to 100.
    #[arg(long)]
    pub strict: bool,

    /// Allowed deviation from 100 in strict mode.
    #[arg(long, value_name = "DECIMAL")]
    pub tolerance: Option<Decimal>,

    /// Show raw quotas, adjustment mode and gap.
    #[arg(long)]
    pub explain: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How the result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Space-separated shares.
    Text,
    /// A JSON object.
    Json,
}

impl Cli {
    /// Percentages as plain decimals.
    pub fn percentage_values(&self) -> Vec<Decimal> {
        self.percentages.iter().map(|p| p.value()).collect()
    }

    /// Configured options with command-line flags applied on top.
    pub fn options(&self, config: &DistributionConfig) -> DistributionOptions {
        let mut options = DistributionOptions::from(config);
        if self.strict {
            options.require_full_sum = true;
        }
        if let Some(tolerance) = self.tolerance {
            options = options.with_tolerance(tolerance);
        }
        options
    }
}
