//! Sources that supply the static data files.
//!
//! [`DatasetSource`] abstracts where exchanges, coins, and paths come from
//! so the loader can be exercised with mocks. [`DirectorySource`] reads the
//! JSON files from a data directory through a `cap-std` capability handle.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::de::DeserializeOwned;

use super::models::{CoinRecord, ExchangeRecord, PathFile};
use crate::error::CoinpathError;

/// File holding the exchange catalogue.
pub const EXCHANGES_FILE: &str = "exchanges.json";
/// File holding the coin catalogue.
pub const COINS_FILE: &str = "coins.json";
/// File holding the computed paths.
pub const PATHS_FILE: &str = "paths.json";

/// Supplier of dataset records.
#[cfg_attr(test, mockall::automock)]
pub trait DatasetSource {
    /// Loads the exchange catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalogue is missing or malformed.
    fn load_exchanges(&self) -> Result<Vec<ExchangeRecord>, CoinpathError>;

    /// Loads the coin catalogue; an absent catalogue yields no coins.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalogue exists but is malformed.
    fn load_coins(&self) -> Result<Vec<CoinRecord>, CoinpathError>;

    /// Loads the computed paths.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is missing or malformed.
    fn load_paths(&self) -> Result<PathFile, CoinpathError>;
}

/// Reads dataset files from a directory.
pub struct DirectorySource {
    root: Utf8PathBuf,
    dir: Dir,
}

impl fmt::Debug for DirectorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectorySource")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl DirectorySource {
    /// Opens `root` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`CoinpathError::Io`] when the directory cannot be opened.
    pub fn open(root: &Utf8Path) -> Result<Self, CoinpathError> {
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(|error| {
            CoinpathError::io(&format!("failed to open data directory '{root}'"), &error)
        })?;
        Ok(Self {
            root: root.to_path_buf(),
            dir,
        })
    }

    /// Directory this source reads from.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, CoinpathError> {
        let contents = self
            .dir
            .read_to_string(file)
            .map_err(|error| {
                CoinpathError::io(&format!("failed to read '{}/{file}'", self.root), &error)
            })?;
        serde_json::from_str(&contents).map_err(|error| CoinpathError::Parse {
            file: file.to_owned(),
            message: error.to_string(),
        })
    }
}

impl DatasetSource for DirectorySource {
    fn load_exchanges(&self) -> Result<Vec<ExchangeRecord>, CoinpathError> {
        self.read_json(EXCHANGES_FILE)
    }

    fn load_coins(&self) -> Result<Vec<CoinRecord>, CoinpathError> {
        if !self.dir.exists(COINS_FILE) {
            tracing::debug!("no {COINS_FILE} in '{}'; asset search is empty", self.root);
            return Ok(Vec::new());
        }
        self.read_json(COINS_FILE)
    }

    fn load_paths(&self) -> Result<PathFile, CoinpathError> {
        self.read_json(PATHS_FILE)
    }
}
