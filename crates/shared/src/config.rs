//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Distribution configuration.
    #[serde(default)]
    pub distribution: DistributionConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Distribution configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributionConfig {
    /// Reject percentage lists that do not sum to 100.
    #[serde(default)]
    pub require_full_sum: bool,
    /// Allowed deviation from 100 when `require_full_sum` is set.
    #[serde(default = "default_sum_tolerance")]
    pub sum_tolerance: Decimal,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            require_full_sum: false,
            sum_tolerance: default_sum_tolerance(),
        }
    }
}

fn default_sum_tolerance() -> Decimal {
    Decimal::ZERO
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources are layered, later ones overriding earlier ones:
    /// `config/default`, then `config/{RUN_MODE}` (both optional, any format
    /// the `config` crate reads), then `APPORTION__SECTION__KEY` variables.
    /// Missing keys fall back to the serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("APPORTION").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
