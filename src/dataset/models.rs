//! Records decoded from the static data files.

use serde::{Deserialize, Serialize};

use crate::filter::{ConnectionTier, ExchangeId, ResultRow};

/// What kind of endpoint an exchange record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeKind {
    /// A trading venue.
    #[default]
    Exchange,
    /// A fiat bank account endpoint.
    Bank,
    /// A self-custody crypto wallet endpoint.
    Wallet,
}

/// Catalogue entry for an exchange, bank, or wallet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExchangeRecord {
    /// Stable identifier referenced by path results.
    pub id: ExchangeId,
    /// Display name.
    pub name: String,
    /// Endpoint kind.
    #[serde(default)]
    pub kind: ExchangeKind,
}

/// Catalogue entry for a coin or fiat currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CoinRecord {
    /// Stable identifier.
    pub id: String,
    /// Ticker symbol.
    pub name: String,
    /// Full display name.
    pub long_name: String,
    /// Popularity ranking; lower sorts first.
    #[serde(default = "unranked")]
    pub ranking: u32,
}

const fn unranked() -> u32 {
    u32::MAX
}

/// Where a path starts or ends.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Location {
    /// Exchange, bank, or wallet holding the funds.
    pub exchange: ExchangeId,
    /// Coin held at this location.
    pub coin: String,
    /// Amount of `coin`.
    pub amount: f64,
}

/// One trade (and optional withdrawal) performed on an exchange.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Hop {
    /// Exchange performing the trade.
    pub exchange: ExchangeId,
    /// Coin sold.
    pub sell_coin: String,
    /// Coin bought.
    pub buy_coin: String,
    /// Trading fee in the result currency.
    #[serde(default)]
    pub trade_fee: Option<f64>,
    /// Withdrawal fee in the result currency.
    #[serde(default)]
    pub withdraw_fee: Option<f64>,
}

/// A computed conversion path with its total cost.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PathResult {
    /// Opaque identifier.
    pub id: String,
    /// Number of connecting trades.
    #[serde(rename = "type")]
    pub tier: ConnectionTier,
    /// Starting point.
    pub origin: Location,
    /// First trade.
    pub hop_1: Hop,
    /// Second trade, if the path needs one.
    #[serde(default)]
    pub hop_2: Option<Hop>,
    /// End point.
    pub destination: Location,
    /// Sum of all fees in the result currency.
    pub total_fees: f64,
}

impl PathResult {
    /// Derives the row the filter controller works with.
    #[must_use]
    pub fn filter_row(&self) -> ResultRow {
        ResultRow::new(
            self.hop_1.exchange.clone(),
            self.hop_2.as_ref().map(|hop| hop.exchange.clone()),
            self.tier,
        )
    }

    /// Exchanges this path trades on, in order.
    pub fn exchanges(&self) -> impl Iterator<Item = &ExchangeId> {
        std::iter::once(&self.hop_1.exchange).chain(self.hop_2.as_ref().map(|hop| &hop.exchange))
    }
}

/// Top-level shape of `paths.json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PathFile {
    /// ISO code of the currency fees are expressed in.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Computed paths in any order.
    pub paths: Vec<PathResult>,
}

impl Default for PathFile {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            paths: Vec::new(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_owned()
}
