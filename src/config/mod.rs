//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.coinpath.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `COINPATH_DATA_DIR`, `COINPATH_EXCHANGES`,
//!    and so on
//! 4. **Command-line arguments** – `--data-dir`/`-d`, `--exchanges`/`-e`, ...
//!
//! # Configuration File
//!
//! ```toml
//! data_dir = "data"
//! exchanges = "binance,kraken,bank,wallet"
//! max_tier = 1
//! max_paths = 20
//! tui = true
//! log_level = "info"
//! ```

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::dataset::{DEFAULT_MAX_PATHS, LoadOptions};
use crate::error::CoinpathError;
use crate::filter::{ConnectionTier, ExchangeId, ExchangeSelection};

/// Directory searched for data files when none is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Log filter used when neither `COINPATH_LOG` nor `log_level` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print the filtered path listing and exit.
    Summary,
    /// Interactive terminal UI over the path listing.
    Explorer,
    /// Search the coin catalogue and exit.
    AssetSearch,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `COINPATH_DATA_DIR` or `--data-dir`: directory holding the JSON files
/// - `COINPATH_EXCHANGES` or `--exchanges`: comma-separated selection
/// - `COINPATH_MAX_TIER` or `--max-tier`: connection tier bound
/// - `COINPATH_MAX_PATHS` or `--max-paths`: cap on listed paths
/// - `COINPATH_ASSET` or `--asset`: coin search query
/// - `COINPATH_LOG_LEVEL` or `--log-level`: default log filter
///
/// # Example
///
/// ```no_run
/// use coinpath::CoinpathConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CoinpathConfig::load().expect("failed to load configuration");
/// let selection = config.exchange_selection().expect("valid exchange list");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "COINPATH",
    discovery(
        dotfile_name = ".coinpath.toml",
        config_file_name = "coinpath.toml",
        app_name = "coinpath"
    )
)]
pub struct CoinpathConfig {
    /// Directory containing `exchanges.json`, `paths.json`, and optionally
    /// `coins.json`.
    ///
    /// Can be provided via:
    /// - CLI: `--data-dir <DIR>` or `-d <DIR>`
    /// - Environment: `COINPATH_DATA_DIR`
    /// - Config file: `data_dir = "..."`
    #[ortho_config(cli_short = 'd')]
    pub data_dir: Option<String>,

    /// Comma-separated exchange identifiers to select initially.
    ///
    /// When unset every catalogued exchange is selected.
    ///
    /// Can be provided via:
    /// - CLI: `--exchanges <IDS>` or `-e <IDS>`
    /// - Environment: `COINPATH_EXCHANGES`
    /// - Config file: `exchanges = "binance,kraken"`
    #[ortho_config(cli_short = 'e')]
    pub exchanges: Option<String>,

    /// Highest connection tier to show (inclusive).
    ///
    /// Can be provided via:
    /// - CLI: `--max-tier <TIER>` or `-m <TIER>`
    /// - Environment: `COINPATH_MAX_TIER`
    /// - Config file: `max_tier = 1`
    #[ortho_config(cli_short = 'm')]
    pub max_tier: Option<u32>,

    /// Maximum number of paths kept after sorting by fees.
    ///
    /// Defaults to 20.
    #[ortho_config()]
    pub max_paths: usize,

    /// Coin search query. When set, the coin catalogue is searched instead
    /// of listing paths.
    ///
    /// Can be provided via:
    /// - CLI: `--asset <QUERY>` or `-a <QUERY>`
    /// - Environment: `COINPATH_ASSET`
    /// - Config file: `asset = "..."`
    #[ortho_config(cli_short = 'a')]
    pub asset: Option<String>,

    /// Enables the interactive terminal UI.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    ///
    /// Note: booleans are not loaded from the environment by `ortho_config`.
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// Default log filter, overridden by `COINPATH_LOG`.
    ///
    /// Can be provided via:
    /// - CLI: `--log-level <FILTER>`
    /// - Environment: `COINPATH_LOG_LEVEL`
    /// - Config file: `log_level = "debug"`
    #[ortho_config()]
    pub log_level: Option<String>,
}

impl Default for CoinpathConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            exchanges: None,
            max_tier: None,
            max_paths: DEFAULT_MAX_PATHS,
            asset: None,
            tui: false,
            log_level: None,
        }
    }
}

impl CoinpathConfig {
    /// Directory to read data files from.
    #[must_use]
    pub fn data_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    /// Parses the configured exchange list.
    ///
    /// Returns `Ok(None)` when no list is configured, meaning every
    /// catalogued exchange is selected.
    ///
    /// # Errors
    ///
    /// Returns [`CoinpathError::InvalidExchangeList`] when the list contains
    /// an empty entry such as `"binance,,kraken"`.
    pub fn exchange_selection(&self) -> Result<Option<ExchangeSelection>, CoinpathError> {
        let Some(raw) = self.exchanges.as_deref() else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(Some(ExchangeSelection::new()));
        }
        raw.split(',')
            .map(|entry| {
                let id = entry.trim();
                if id.is_empty() {
                    Err(CoinpathError::InvalidExchangeList {
                        message: format!("empty entry in '{raw}'"),
                    })
                } else {
                    Ok(ExchangeId::new(id))
                }
            })
            .collect::<Result<ExchangeSelection, _>>()
            .map(Some)
    }

    /// Converts the configured tier bound.
    ///
    /// # Errors
    ///
    /// Returns [`CoinpathError::InvalidTier`] when the value does not fit a
    /// tier.
    pub fn connection_tier(&self) -> Result<Option<ConnectionTier>, CoinpathError> {
        self.max_tier
            .map(|value| {
                u8::try_from(value)
                    .map(ConnectionTier::new)
                    .map_err(|_| CoinpathError::InvalidTier {
                        value: value.to_string(),
                    })
            })
            .transpose()
    }

    /// Options for preparing the dataset.
    #[must_use]
    pub const fn load_options(&self) -> LoadOptions {
        LoadOptions {
            max_paths: self.max_paths,
        }
    }

    /// Default log filter when `COINPATH_LOG` is unset.
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `AssetSearch` when an asset query is set, `Explorer` when the
    /// TUI is enabled, or `Summary` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.asset.is_some() {
            OperationMode::AssetSearch
        } else if self.tui {
            OperationMode::Explorer
        } else {
            OperationMode::Summary
        }
    }
}

#[cfg(test)]
mod tests;
