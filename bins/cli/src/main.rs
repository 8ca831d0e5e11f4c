//! Apportion command line
//!
//! Splits a whole-number total across percentages and prints the shares.
//!
//! Usage: apportion [--strict] [--explain] [--format text|json] <TOTAL> <PERCENTAGE>...

mod cli;
mod output;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use apportion_core::Distributor;
use apportion_shared::config::LoggingConfig;
use apportion_shared::{AppConfig, AppError};

use cli::Cli;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration before logging so the filter can come from it
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("error: {err}");
            return exit_code(&err);
        }
    };

    init_tracing(&config.logging);

    match run(&cli, &config) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let app_err = err.downcast_ref::<AppError>();
            let code = app_err.map_or("INTERNAL_ERROR", AppError::error_code);
            debug!(code, "apportioning failed");
            eprintln!("error: {err:#}");
            app_err.map_or(ExitCode::from(70), exit_code)
        }
    }
}

fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<String> {
    let distributor = Distributor::new(cli.options(&config.distribution));
    debug!(options = ?distributor.options(), total = cli.total, "apportioning");

    let result = distributor
        .apportion(cli.total, &cli.percentage_values())
        .map_err(AppError::from)?;
    debug!(
        mode = %result.mode,
        gap = result.gap,
        shares_total = result.total(),
        "apportioned"
    );

    output::render(&result, cli.format, cli.explain)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    // Logs go to stderr; stdout carries only the result
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn exit_code(err: &AppError) -> ExitCode {
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
