//! Coinpath library crate for browsing exchange-path comparison results.
//!
//! The library loads pre-computed conversion paths from static JSON files,
//! keeps per-path visibility in step with the user's exchange and
//! connection-tier choices, and renders the result either as a plain
//! listing or through an interactive terminal UI.

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod tui;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{CoinpathConfig, OperationMode};
pub use dataset::{Dataset, DatasetSource, DirectorySource, LoadOptions};
pub use error::CoinpathError;
pub use filter::{
    AssetQuery, ConnectionFilter, ConnectionTier, ExchangeId, ExchangeSelection, FilterSummary,
    FilterView, ResultFilterController, ResultRow,
};
