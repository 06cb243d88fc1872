//! Coinpath CLI entrypoint for browsing exchange-path results.

use std::io::{self, Write};
use std::process::ExitCode;

use coinpath::{CoinpathConfig, CoinpathError, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CoinpathError> {
    let config = load_config()?;
    cli::telemetry::init(&config)?;

    match config.operation_mode() {
        OperationMode::AssetSearch => cli::asset_search::run(&config),
        OperationMode::Explorer => cli::explorer_tui::run(&config).await,
        OperationMode::Summary => cli::summary::run(&config),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CoinpathError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CoinpathConfig, CoinpathError> {
    CoinpathConfig::load().map_err(|error| CoinpathError::Configuration {
        message: error.to_string(),
    })
}
