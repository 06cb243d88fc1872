//! Summary mode: print the filtered path listing and exit.

use std::io;

use coinpath::{CoinpathConfig, CoinpathError};
use tracing::debug;

use super::output::write_summary_to;
use super::{configured_controller, load_dataset};

/// Loads the dataset, applies the configured filters, and prints the
/// visible paths to stdout.
///
/// # Errors
///
/// Returns an error when the configuration is invalid, the data cannot be
/// loaded, or stdout cannot be written.
pub fn run(config: &CoinpathConfig) -> Result<(), CoinpathError> {
    let dataset = load_dataset(config)?;
    let controller = configured_controller(&dataset, config)?;
    debug!(data_dir = %config.data_dir(), "printing path summary");

    let mut stdout = io::stdout().lock();
    write_summary_to(&mut stdout, &dataset, &controller)
}
