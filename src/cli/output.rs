//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use coinpath::dataset::{CoinRecord, format_fee};
use coinpath::{AssetQuery, CoinpathError, Dataset, FilterView};

/// Writes the visible paths followed by a count line.
///
/// `view` must have been built over `dataset` so its rows line up with
/// `dataset.paths()`.
///
/// # Errors
///
/// Returns [`CoinpathError::Io`] when writing fails.
pub fn write_summary_to<W: Write>(
    writer: &mut W,
    dataset: &Dataset,
    view: &dyn FilterView,
) -> Result<(), CoinpathError> {
    let Some((origin, destination)) = dataset.endpoints() else {
        return writeln!(writer, "No paths found.").map_err(|e| io_error(&e));
    };

    writeln!(writer, "Paths from {origin} to {destination}:").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    for (index, path) in dataset.paths().iter().enumerate() {
        if !view.is_visible(index) {
            continue;
        }
        writeln!(
            writer,
            "  #{} [{}] {}  {}",
            index.saturating_add(1),
            path.tier.label(),
            dataset.route(path),
            format_fee(path.total_fees, dataset.currency())
        )
        .map_err(|e| io_error(&e))?;
    }

    let summary = view.summary();
    writeln!(writer).map_err(|e| io_error(&e))?;
    write!(
        writer,
        "Showing {} of {} paths",
        summary.visible_count, summary.total_count
    )
    .map_err(|e| io_error(&e))?;
    if summary.is_filtered() {
        write!(writer, " (filtered)").map_err(|e| io_error(&e))?;
    }
    if dataset.path_results() > summary.total_count {
        write!(
            writer,
            "; cheapest {} of {} computed",
            summary.total_count,
            dataset.path_results()
        )
        .map_err(|e| io_error(&e))?;
    }
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Writes the coins matching `query`, best ranked first.
///
/// # Errors
///
/// Returns [`CoinpathError::Io`] when writing fails.
pub fn write_asset_results_to<W: Write>(
    writer: &mut W,
    query: &AssetQuery,
    coins: &[CoinRecord],
) -> Result<(), CoinpathError> {
    let matches = query.filter(coins);
    if matches.is_empty() {
        return writeln!(writer, "No coins match the query.").map_err(|e| io_error(&e));
    }

    for coin in matches {
        writeln!(writer, "  {:<8} {}", coin.id, coin.long_name).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Converts an I/O error into a [`CoinpathError`].
pub(crate) fn io_error(error: &io::Error) -> CoinpathError {
    CoinpathError::io("failed to write output", error)
}

#[cfg(test)]
mod tests {
    use coinpath::dataset::{LoadOptions, PathFile};
    use coinpath::test_support::{coin, path, sample_dataset};
    use coinpath::{ConnectionTier, ExchangeId};
    use rstest::{fixture, rstest};

    use super::*;

    fn render_summary(dataset: &Dataset, view: &dyn FilterView) -> String {
        let mut buffer = Vec::new();
        write_summary_to(&mut buffer, dataset, view).expect("write to buffer");
        String::from_utf8(buffer).expect("output is UTF-8")
    }

    #[fixture]
    fn dataset() -> Dataset {
        sample_dataset()
    }

    #[rstest]
    fn unfiltered_summary_lists_every_path(dataset: Dataset) {
        let controller = dataset.controller();

        assert_eq!(
            render_summary(&dataset, &controller),
            concat!(
                "Paths from EUR to BTC:\n",
                "\n",
                "  #1 [1 hop] Binance  $4.20\n",
                "  #2 [2 hops] Kraken -> Coinbase  $9.90\n",
                "  #3 [Direct] Bitstamp  $15.00\n",
                "\n",
                "Showing 3 of 3 paths\n",
            )
        );
    }

    #[rstest]
    fn filtered_summary_is_marked(dataset: Dataset) {
        let mut controller = dataset.controller();
        controller.set_exchange_selection(["binance", "bitstamp"].into_iter().collect());
        controller.set_connection_filter(Some(ConnectionTier::new(0)));

        let output = render_summary(&dataset, &controller);

        assert!(output.contains("  #3 [Direct] Bitstamp  $15.00\n"));
        assert!(!output.contains("Binance"));
        assert!(output.ends_with("Showing 1 of 3 paths (filtered)\n"));
    }

    #[rstest]
    fn deselecting_a_traded_exchange_is_filtered(dataset: Dataset) {
        let mut controller = dataset.controller();
        controller.toggle_exchange(&ExchangeId::from("coinbase"));

        let output = render_summary(&dataset, &controller);

        assert!(!output.contains("Kraken -> Coinbase"));
        assert!(output.ends_with("Showing 2 of 3 paths (filtered)\n"));
    }

    #[rstest]
    fn deselecting_an_unused_exchange_is_not_filtered(dataset: Dataset) {
        let mut controller = dataset.controller();
        controller.toggle_exchange(&ExchangeId::from("wallet"));

        let output = render_summary(&dataset, &controller);

        // The wallet is only ever a destination, never a hop.
        assert!(output.ends_with("Showing 3 of 3 paths\n"));
    }

    #[test]
    fn capped_summary_mentions_computed_total() {
        let dataset = Dataset::from_parts(
            sample_dataset().exchanges().to_vec(),
            Vec::new(),
            PathFile {
                currency: "USD".to_owned(),
                paths: vec![
                    path("a", "binance", None, 0, 1.0),
                    path("b", "kraken", None, 0, 2.0),
                ],
            },
            LoadOptions { max_paths: 1 },
        );
        let controller = dataset.controller();

        let output = render_summary(&dataset, &controller);

        assert!(output.ends_with("Showing 1 of 1 paths; cheapest 1 of 2 computed\n"));
    }

    #[test]
    fn empty_dataset_reports_no_paths() {
        let dataset = Dataset::from_parts(
            Vec::new(),
            Vec::new(),
            PathFile::default(),
            LoadOptions::default(),
        );
        let controller = dataset.controller();

        assert_eq!(render_summary(&dataset, &controller), "No paths found.\n");
    }

    #[rstest]
    #[case::ticker("btc", "  BTC      Bitcoin\n")]
    #[case::long_name("ether", "  ETH      Ethereum\n")]
    #[case::no_match("doge", "No coins match the query.\n")]
    fn asset_results(#[case] text: &str, #[case] expected: &str) {
        let coins = vec![coin("ETH", "Ethereum", 2), coin("BTC", "Bitcoin", 1)];
        let mut buffer = Vec::new();

        write_asset_results_to(&mut buffer, &AssetQuery::new(text), &coins)
            .expect("write to buffer");

        assert_eq!(String::from_utf8(buffer).expect("UTF-8"), expected);
    }

    #[test]
    fn empty_query_lists_every_coin_by_ranking() {
        let coins = vec![coin("ETH", "Ethereum", 2), coin("BTC", "Bitcoin", 1)];
        let mut buffer = Vec::new();

        write_asset_results_to(&mut buffer, &AssetQuery::new(""), &coins)
            .expect("write to buffer");

        assert_eq!(
            String::from_utf8(buffer).expect("UTF-8"),
            "  BTC      Bitcoin\n  ETH      Ethereum\n"
        );
    }
}
