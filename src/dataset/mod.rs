//! Loading of the exchange catalogue, coin catalogue, and path results.
//!
//! The three files are loaded one after another by [`Dataset::load`] and
//! the controller is only built once all of them are in memory, so no
//! consumer ever sees a half-loaded catalogue.
//!
//! Paths are ordered by total fees (cheapest first) and capped to the
//! configured maximum. The uncapped count is kept for display.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::error::CoinpathError;
use crate::filter::{ExchangeId, ResultFilterController, ResultRow};

mod currency;
mod models;
mod source;

pub use currency::{Currency, format_fee};
pub use models::{
    CoinRecord, ExchangeKind, ExchangeRecord, Hop, Location, PathFile, PathResult,
};
#[cfg(test)]
pub use source::MockDatasetSource;
pub use source::{COINS_FILE, DatasetSource, DirectorySource, EXCHANGES_FILE, PATHS_FILE};

/// Default cap on the number of paths kept after sorting.
pub const DEFAULT_MAX_PATHS: usize = 20;

/// Options controlling how a dataset is prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Maximum number of paths kept after sorting by fees.
    pub max_paths: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_paths: DEFAULT_MAX_PATHS,
        }
    }
}

/// Fully loaded data backing one browsing session.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    exchanges: Vec<ExchangeRecord>,
    coins: Vec<CoinRecord>,
    paths: Vec<PathResult>,
    currency: Currency,
    path_results: usize,
}

impl Dataset {
    /// Loads exchanges, then coins, then paths from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `source`.
    pub fn load<S>(source: &S, options: LoadOptions) -> Result<Self, CoinpathError>
    where
        S: DatasetSource + ?Sized,
    {
        let exchanges = source.load_exchanges()?;
        let coins = source.load_coins()?;
        let path_file = source.load_paths()?;
        let dataset = Self::from_parts(exchanges, coins, path_file, options);
        info!(
            exchanges = dataset.exchanges.len(),
            coins = dataset.coins.len(),
            paths = dataset.paths.len(),
            path_results = dataset.path_results,
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Assembles a dataset from already decoded records.
    #[must_use]
    pub fn from_parts(
        exchanges: Vec<ExchangeRecord>,
        coins: Vec<CoinRecord>,
        path_file: PathFile,
        options: LoadOptions,
    ) -> Self {
        let PathFile { currency, mut paths } = path_file;
        let path_results = paths.len();
        paths.sort_by(|left, right| left.total_fees.total_cmp(&right.total_fees));
        paths.truncate(options.max_paths);

        let dataset = Self {
            exchanges,
            coins,
            paths,
            currency: Currency::parse(&currency),
            path_results,
        };
        dataset.warn_on_unknown_exchanges();
        dataset
    }

    fn warn_on_unknown_exchanges(&self) {
        let universe = self.universe();
        for path in &self.paths {
            for exchange in path.exchanges().filter(|id| !universe.contains(*id)) {
                warn!(
                    path = %path.id,
                    exchange = %exchange,
                    "path references an exchange missing from the catalogue; it will stay hidden"
                );
            }
        }
    }

    /// Identifiers of every catalogued exchange.
    #[must_use]
    pub fn universe(&self) -> BTreeSet<ExchangeId> {
        self.exchanges.iter().map(|record| record.id.clone()).collect()
    }

    /// Rows for the filter controller, parallel to [`Self::paths`].
    #[must_use]
    pub fn filter_rows(&self) -> Vec<ResultRow> {
        self.paths.iter().map(PathResult::filter_row).collect()
    }

    /// Builds a controller over this dataset with everything selected.
    #[must_use]
    pub fn controller(&self) -> ResultFilterController {
        ResultFilterController::new(self.universe(), self.filter_rows())
    }

    /// Catalogued exchanges in file order.
    #[must_use]
    pub fn exchanges(&self) -> &[ExchangeRecord] {
        &self.exchanges
    }

    /// Looks up an exchange by identifier.
    #[must_use]
    pub fn exchange(&self, id: &ExchangeId) -> Option<&ExchangeRecord> {
        self.exchanges.iter().find(|record| &record.id == id)
    }

    /// Display name for `id`, falling back to the identifier itself.
    #[must_use]
    pub fn exchange_name<'a>(&'a self, id: &'a ExchangeId) -> &'a str {
        self.exchange(id)
            .map_or_else(|| id.as_str(), |record| record.name.as_str())
    }

    /// Origin and destination coins of the cheapest path.
    ///
    /// All paths in one file share their endpoints.
    #[must_use]
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        self.paths
            .first()
            .map(|path| (path.origin.coin.as_str(), path.destination.coin.as_str()))
    }

    /// Exchange names a path trades on, joined with arrows.
    #[must_use]
    pub fn route(&self, path: &PathResult) -> String {
        path.exchanges()
            .map(|id| self.exchange_name(id))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Catalogued coins in file order.
    #[must_use]
    pub fn coins(&self) -> &[CoinRecord] {
        &self.coins
    }

    /// Paths ordered by total fees, capped.
    #[must_use]
    pub fn paths(&self) -> &[PathResult] {
        &self.paths
    }

    /// Currency fees are expressed in.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Number of paths before capping.
    #[must_use]
    pub const fn path_results(&self) -> usize {
        self.path_results
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::filter::{ConnectionTier, FilterView};

    fn exchange(id: &str) -> ExchangeRecord {
        ExchangeRecord {
            id: id.into(),
            name: id.to_uppercase(),
            kind: ExchangeKind::Exchange,
        }
    }

    fn hop(exchange: &str) -> Hop {
        Hop {
            exchange: exchange.into(),
            sell_coin: "EUR".to_owned(),
            buy_coin: "BTC".to_owned(),
            trade_fee: None,
            withdraw_fee: None,
        }
    }

    fn path(id: &str, hops: (&str, Option<&str>), fees: f64) -> PathResult {
        let location = Location {
            exchange: "bank".into(),
            coin: "EUR".to_owned(),
            amount: 1_000.0,
        };
        PathResult {
            id: id.to_owned(),
            tier: ConnectionTier::new(u8::from(hops.1.is_some())),
            origin: location.clone(),
            hop_1: hop(hops.0),
            hop_2: hops.1.map(hop),
            destination: location,
            total_fees: fees,
        }
    }

    #[fixture]
    fn path_file() -> PathFile {
        PathFile {
            currency: "eur".to_owned(),
            paths: vec![
                path("pricey", ("kraken", Some("binance")), 30.0),
                path("cheap", ("binance", None), 5.0),
                path("middle", ("kraken", None), 12.0),
            ],
        }
    }

    fn ids(dataset: &Dataset) -> Vec<&str> {
        dataset.paths().iter().map(|p| p.id.as_str()).collect()
    }

    #[rstest]
    fn paths_are_sorted_by_fees_and_capped(path_file: PathFile) {
        let dataset = Dataset::from_parts(
            vec![exchange("binance"), exchange("kraken")],
            Vec::new(),
            path_file,
            LoadOptions { max_paths: 2 },
        );

        assert_eq!(ids(&dataset), vec!["cheap", "middle"]);
        assert_eq!(dataset.path_results(), 3);
        assert_eq!(dataset.currency(), &Currency::Eur);
    }

    #[rstest]
    fn controller_rows_follow_path_order(path_file: PathFile) {
        let dataset = Dataset::from_parts(
            vec![exchange("binance"), exchange("kraken")],
            Vec::new(),
            path_file,
            LoadOptions::default(),
        );
        let controller = dataset.controller();

        let firsts: Vec<&str> = controller
            .rows()
            .iter()
            .map(|row| row.exchange_a().as_str())
            .collect();
        assert_eq!(firsts, vec!["binance", "kraken", "kraken"]);
        assert_eq!(controller.summary().visible_count, 3);
    }

    #[rstest]
    fn uncatalogued_exchanges_are_hidden(path_file: PathFile) {
        let dataset = Dataset::from_parts(
            vec![exchange("kraken")],
            Vec::new(),
            path_file,
            LoadOptions::default(),
        );
        let controller = dataset.controller();

        assert_eq!(controller.visible_indices(), vec![1]);
    }

    #[test]
    fn exchange_name_falls_back_to_identifier() {
        let dataset = Dataset::from_parts(
            vec![exchange("kraken")],
            Vec::new(),
            PathFile {
                currency: "USD".to_owned(),
                paths: Vec::new(),
            },
            LoadOptions::default(),
        );
        let kraken = ExchangeId::from("kraken");
        let unknown = ExchangeId::from("unknown");

        assert_eq!(dataset.exchange_name(&kraken), "KRAKEN");
        assert_eq!(dataset.exchange_name(&unknown), "unknown");
    }

    #[rstest]
    fn route_joins_exchange_names(path_file: PathFile) {
        let dataset = Dataset::from_parts(
            vec![exchange("binance"), exchange("kraken")],
            Vec::new(),
            path_file,
            LoadOptions::default(),
        );
        let routes: Vec<String> = dataset.paths().iter().map(|p| dataset.route(p)).collect();

        assert_eq!(routes, vec!["BINANCE", "KRAKEN", "KRAKEN -> BINANCE"]);
    }

    #[rstest]
    fn load_reads_sources_in_order(path_file: PathFile) {
        let mut source = MockDatasetSource::new();
        let mut sequence = Sequence::new();
        source
            .expect_load_exchanges()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|| Ok(vec![exchange("binance"), exchange("kraken")]));
        source
            .expect_load_coins()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|| Ok(Vec::new()));
        source
            .expect_load_paths()
            .times(1)
            .in_sequence(&mut sequence)
            .return_once(move || Ok(path_file));

        let dataset = Dataset::load(&source, LoadOptions::default()).expect("dataset loads");

        assert_eq!(ids(&dataset), vec!["cheap", "middle", "pricey"]);
    }

    #[test]
    fn load_stops_at_first_error() {
        let mut source = MockDatasetSource::new();
        source.expect_load_exchanges().returning(|| {
            Err(CoinpathError::Io {
                message: "boom".to_owned(),
            })
        });
        source.expect_load_coins().never();
        source.expect_load_paths().never();

        let error = Dataset::load(&source, LoadOptions::default()).expect_err("load fails");

        assert_eq!(
            error,
            CoinpathError::Io {
                message: "boom".to_owned()
            }
        );
    }
}
