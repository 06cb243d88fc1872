//! Tests for operation mode determination.

use rstest::rstest;

use crate::CoinpathConfig;
use crate::config::OperationMode;

#[rstest]
fn operation_mode_summary_when_no_fields_set() {
    let config = CoinpathConfig::default();

    assert_eq!(
        config.operation_mode(),
        OperationMode::Summary,
        "should be Summary when no fields are set"
    );
}

#[rstest]
fn operation_mode_explorer_when_tui_enabled() {
    let config = CoinpathConfig {
        tui: true,
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::Explorer);
}

#[rstest]
fn asset_query_takes_precedence_over_tui() {
    let config = CoinpathConfig {
        asset: Some("btc".to_owned()),
        tui: true,
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::AssetSearch,
        "asset search should take precedence over the TUI"
    );
}

#[rstest]
fn filter_fields_do_not_affect_operation_mode() {
    let config = CoinpathConfig {
        exchanges: Some("kraken".to_owned()),
        max_tier: Some(1),
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::Summary);
}
