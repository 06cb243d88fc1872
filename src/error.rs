//! Error types surfaced while loading configuration and data.

use thiserror::Error;

/// Errors surfaced by the data, configuration, and presentation layers.
///
/// The filter core itself never fails; these variants cover everything
/// around it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoinpathError {
    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// A data file could not be decoded.
    #[error("failed to parse {file}: {message}")]
    Parse {
        /// Name of the file being decoded.
        file: String,
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A connection tier outside the representable range was requested.
    #[error("connection tier must be between 0 and 255, got {value}")]
    InvalidTier {
        /// The rejected value.
        value: String,
    },

    /// The exchange list could not be parsed.
    #[error("invalid exchange list: {message}")]
    InvalidExchangeList {
        /// Why the list was rejected.
        message: String,
    },

    /// The terminal UI failed to start or crashed.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail reported by the TUI runtime.
        message: String,
    },
}

impl CoinpathError {
    /// Wraps an I/O error with context about what was being done.
    #[must_use]
    pub fn io(context: &str, error: &std::io::Error) -> Self {
        Self::Io {
            message: format!("{context}: {error}"),
        }
    }
}
