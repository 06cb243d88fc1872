//! Client-side filtering of exchange-path results.
//!
//! This module holds the filter core: the row and criteria types, the
//! [`ResultFilterController`] that keeps per-row visibility in step with
//! the active criteria, and the free-text [`AssetQuery`] used by asset
//! search.

mod asset;
mod controller;
mod model;
mod selection;

pub use asset::AssetQuery;
pub use controller::{FilterView, ResultFilterController};
pub use model::{ConnectionTier, ExchangeId, FilterSummary, ResultRow};
pub use selection::{ConnectionFilter, ExchangeSelection};
