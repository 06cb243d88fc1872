//! Test helpers for constructing rows, paths, and datasets.
//!
//! Available to unit tests and, through the `test-support` feature, to
//! integration tests.

use crate::dataset::{
    CoinRecord, Dataset, ExchangeKind, ExchangeRecord, Hop, LoadOptions, Location, PathFile,
    PathResult,
};
use crate::filter::{ConnectionTier, ExchangeId, ResultRow};

/// Constructs a filter row from string identifiers.
#[must_use]
pub fn row(exchange_a: &str, exchange_b: Option<&str>, tier: u8) -> ResultRow {
    ResultRow::new(
        ExchangeId::from(exchange_a),
        exchange_b.map(ExchangeId::from),
        ConnectionTier::new(tier),
    )
}

/// Constructs an exchange record whose display name is the capitalised id.
#[must_use]
pub fn exchange(id: &str, kind: ExchangeKind) -> ExchangeRecord {
    let mut chars = id.chars();
    let name = chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    });
    ExchangeRecord {
        id: ExchangeId::from(id),
        name,
        kind,
    }
}

/// Constructs a coin record.
#[must_use]
pub fn coin(id: &str, long_name: &str, ranking: u32) -> CoinRecord {
    CoinRecord {
        id: id.to_owned(),
        name: id.to_owned(),
        long_name: long_name.to_owned(),
        ranking,
    }
}

/// Constructs a EUR-to-BTC path trading on `exchange_a` and, optionally,
/// `exchange_b`.
#[must_use]
pub fn path(
    id: &str,
    exchange_a: &str,
    exchange_b: Option<&str>,
    tier: u8,
    total_fees: f64,
) -> PathResult {
    let hop = |exchange: &str, sell: &str, buy: &str| Hop {
        exchange: ExchangeId::from(exchange),
        sell_coin: sell.to_owned(),
        buy_coin: buy.to_owned(),
        trade_fee: None,
        withdraw_fee: None,
    };
    PathResult {
        id: id.to_owned(),
        tier: ConnectionTier::new(tier),
        origin: Location {
            exchange: ExchangeId::from("bank"),
            coin: "EUR".to_owned(),
            amount: 1_000.0,
        },
        hop_1: hop(exchange_a, "EUR", if exchange_b.is_some() { "USDT" } else { "BTC" }),
        hop_2: exchange_b.map(|id| hop(id, "USDT", "BTC")),
        destination: Location {
            exchange: ExchangeId::from("wallet"),
            coin: "BTC".to_owned(),
            amount: 0.03,
        },
        total_fees,
    }
}

/// A small dataset with four exchanges, two endpoints, and three paths.
///
/// Paths in fee order:
/// 0. `binance` alone, tier 1, 4.2 USD
/// 1. `kraken` then `coinbase`, tier 2, 9.9 USD
/// 2. `bitstamp` alone, tier 0, 15.0 USD
#[must_use]
pub fn sample_dataset() -> Dataset {
    let exchanges = vec![
        exchange("binance", ExchangeKind::Exchange),
        exchange("bitstamp", ExchangeKind::Exchange),
        exchange("coinbase", ExchangeKind::Exchange),
        exchange("kraken", ExchangeKind::Exchange),
        exchange("bank", ExchangeKind::Bank),
        exchange("wallet", ExchangeKind::Wallet),
    ];
    let coins = vec![coin("BTC", "Bitcoin", 1), coin("EUR", "Euro", 50)];
    let path_file = PathFile {
        currency: "USD".to_owned(),
        paths: vec![
            path("bitstamp-direct", "bitstamp", None, 0, 15.0),
            path("binance-single", "binance", None, 1, 4.2),
            path("kraken-coinbase", "kraken", Some("coinbase"), 2, 9.9),
        ],
    };
    Dataset::from_parts(exchanges, coins, path_file, LoadOptions::default())
}
