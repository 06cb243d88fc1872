//! Asset search mode: list coins matching a free-text query.
//!
//! Only the coin catalogue is read; exchanges and paths are not needed.

use std::io;

use coinpath::{AssetQuery, CoinpathConfig, CoinpathError, DatasetSource, DirectorySource};
use tracing::debug;

use super::output::write_asset_results_to;

/// Searches the coin catalogue for the configured asset query.
///
/// # Errors
///
/// Returns an error when the data directory or coin catalogue cannot be
/// read, or stdout cannot be written.
pub fn run(config: &CoinpathConfig) -> Result<(), CoinpathError> {
    let query = AssetQuery::new(config.asset.as_deref().unwrap_or_default());
    let source = DirectorySource::open(&config.data_dir())?;
    search(&source, &query, &mut io::stdout().lock())
}

/// Runs `query` against the coins supplied by `source`.
fn search<S, W>(source: &S, query: &AssetQuery, writer: &mut W) -> Result<(), CoinpathError>
where
    S: DatasetSource + ?Sized,
    W: io::Write,
{
    let coins = source.load_coins()?;
    debug!(coins = coins.len(), "searching coin catalogue");
    write_asset_results_to(writer, query, &coins)
}
