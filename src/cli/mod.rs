//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`asset_search`]: Search the coin catalogue
//! - [`explorer_tui`]: Interactive TUI over the path results
//! - [`summary`]: Print the filtered path listing
//!
//! Output formatting utilities are in [`output`] and logging setup is in
//! [`telemetry`].

use coinpath::{CoinpathConfig, CoinpathError, Dataset, DirectorySource, ResultFilterController};

pub mod asset_search;
pub mod explorer_tui;
pub mod output;
pub mod summary;
pub mod telemetry;

/// Opens the configured data directory and loads the dataset.
///
/// # Errors
///
/// Returns an error when the directory or any required file cannot be read.
pub fn load_dataset(config: &CoinpathConfig) -> Result<Dataset, CoinpathError> {
    let source = DirectorySource::open(&config.data_dir())?;
    Dataset::load(&source, config.load_options())
}

/// Builds a controller over `dataset` with the configured criteria applied.
///
/// # Errors
///
/// Returns an error when the exchange list or tier bound is invalid.
pub fn configured_controller(
    dataset: &Dataset,
    config: &CoinpathConfig,
) -> Result<ResultFilterController, CoinpathError> {
    let mut controller = dataset.controller();
    if let Some(selection) = config.exchange_selection()? {
        controller.set_exchange_selection(selection);
    }
    controller.set_connection_filter(config.connection_tier()?);
    Ok(controller)
}
