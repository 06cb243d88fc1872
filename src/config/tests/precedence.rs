//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"data_dir": "default-dir"})), ("file", json!({"data_dir": "file-dir"}))],
    "data_dir",
    "file-dir",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"exchanges": "kraken"})), ("environment", json!({"exchanges": "binance"}))],
    "exchanges",
    "binance",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"asset": "eth"})), ("cli", json!({"asset": "btc"}))],
    "asset",
    "btc",
    "CLI should override environment"
)]
#[case::log_level_defaults_file_env_cli(
    vec![
        ("defaults", json!({"log_level": "error"})),
        ("file", json!({"log_level": "warn"})),
        ("environment", json!({"log_level": "info"})),
        ("cli", json!({"log_level": "debug"}))
    ],
    "log_level",
    "debug",
    "CLI should win for log_level"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    let actual = match field {
        "data_dir" => config.data_dir.as_deref(),
        "exchanges" => config.exchanges.as_deref(),
        "asset" => config.asset.as_deref(),
        "log_level" => config.log_level.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn numeric_fields_merge_from_file_and_cli() {
    let config = build_config_from_layers(&[
        ("file", json!({"max_tier": 2, "max_paths": 5})),
        ("cli", json!({"max_tier": 1})),
    ]);

    assert_eq!(config.max_tier, Some(1));
    assert_eq!(config.max_paths, 5);
}
