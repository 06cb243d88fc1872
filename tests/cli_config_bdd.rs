//! Behavioural tests for CLI configuration loading.

use coinpath::{CoinpathConfig, CoinpathError, OperationMode};
use ortho_config::MergeComposer;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};

/// State for CLI configuration scenarios.
///
/// Uses JSON values to represent configuration layers since `MergeComposer`
/// doesn't implement Clone. The composer is built fresh in `build_config`.
#[derive(ScenarioState, Default)]
struct ConfigState {
    file_layer: Slot<Value>,
    env_layer: Slot<Value>,
    cli_layer: Slot<Value>,
    config: Slot<CoinpathConfig>,
}

#[fixture]
fn config_state() -> ConfigState {
    ConfigState::default()
}

/// Builds and stores the configuration from the accumulated layers.
fn build_config(state: &ConfigState) {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({}));

    if let Some(file) = state.file_layer.get() {
        composer.push_file(file, None);
    }

    if let Some(env) = state.env_layer.get() {
        composer.push_environment(env);
    }

    if let Some(cli) = state.cli_layer.get() {
        composer.push_cli(cli);
    }

    match CoinpathConfig::merge_from_layers(composer.layers()) {
        Ok(config) => state.config.set(config),
        Err(error) => panic!("failed to merge configuration: {error}"),
    }
}

fn built_config(state: &ConfigState) -> CoinpathConfig {
    state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration not built"))
}

// --- Given steps ---

#[given("default configuration values")]
fn default_values(config_state: &ConfigState) {
    let _ = config_state;
}

#[given("an environment max_tier of {tier:u32}")]
fn env_max_tier(config_state: &ConfigState, tier: u32) {
    config_state.env_layer.set(json!({"max_tier": tier}));
}

#[given("a configuration file enabling the TUI")]
fn file_enables_tui(config_state: &ConfigState) {
    config_state.file_layer.set(json!({"tui": true}));
}

// --- When steps ---

#[when("the CLI receives no arguments")]
fn cli_receives_nothing(config_state: &ConfigState) {
    build_config(config_state);
}

#[when("the CLI receives exchanges {list}")]
fn cli_receives_exchanges(config_state: &ConfigState, list: String) {
    let list_clean = list.trim_matches('"');
    config_state.cli_layer.set(json!({"exchanges": list_clean}));
    build_config(config_state);
}

#[when("the CLI receives max_tier {tier:u32}")]
fn cli_receives_max_tier(config_state: &ConfigState, tier: u32) {
    config_state.cli_layer.set(json!({"max_tier": tier}));
    build_config(config_state);
}

#[when("the CLI receives asset {query}")]
fn cli_receives_asset(config_state: &ConfigState, query: String) {
    let query_clean = query.trim_matches('"');
    config_state.cli_layer.set(json!({"asset": query_clean}));
    build_config(config_state);
}

// --- Then steps ---

#[then("the data directory is {expected}")]
fn assert_data_dir(config_state: &ConfigState, expected: String) {
    let expected_clean = expected.trim_matches('"');
    assert_eq!(built_config(config_state).data_dir().as_str(), expected_clean);
}

#[then("the path cap is {expected:usize}")]
fn assert_path_cap(config_state: &ConfigState, expected: usize) {
    assert_eq!(built_config(config_state).load_options().max_paths, expected);
}

#[then("the operation mode is {mode}")]
fn assert_operation_mode(config_state: &ConfigState, mode: String) {
    let expected = match mode.as_str() {
        "summary" => OperationMode::Summary,
        "explorer" => OperationMode::Explorer,
        "asset search" => OperationMode::AssetSearch,
        other => panic!("unknown operation mode: {other}"),
    };
    assert_eq!(built_config(config_state).operation_mode(), expected);
}

#[then("every exchange is selected")]
fn assert_no_exchange_list(config_state: &ConfigState) {
    let selection = built_config(config_state)
        .exchange_selection()
        .unwrap_or_else(|error| panic!("exchange list should parse: {error}"));
    assert!(selection.is_none(), "expected no explicit selection");
}

#[then("the exchange selection contains {count:usize} exchanges")]
fn assert_selection_size(config_state: &ConfigState, count: usize) {
    let selection = built_config(config_state)
        .exchange_selection()
        .unwrap_or_else(|error| panic!("exchange list should parse: {error}"))
        .unwrap_or_else(|| panic!("expected an explicit selection"));
    assert_eq!(selection.len(), count);
}

#[then("the tier bound is {expected:u8}")]
fn assert_tier_bound(config_state: &ConfigState, expected: u8) {
    let tier = built_config(config_state)
        .connection_tier()
        .unwrap_or_else(|error| panic!("tier should convert: {error}"));
    assert_eq!(tier.map(coinpath::ConnectionTier::value), Some(expected));
}

#[then("converting the tier bound fails")]
fn assert_tier_error(config_state: &ConfigState) {
    let result = built_config(config_state).connection_tier();
    assert!(
        matches!(result, Err(CoinpathError::InvalidTier { .. })),
        "expected an invalid tier error, got {result:?}"
    );
}

#[then("parsing the exchange list fails")]
fn assert_exchange_list_error(config_state: &ConfigState) {
    let result = built_config(config_state).exchange_selection();
    assert!(
        matches!(result, Err(CoinpathError::InvalidExchangeList { .. })),
        "expected an invalid exchange list error, got {result:?}"
    );
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/cli_config.feature", index = 0)]
fn defaults_apply(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 1)]
fn exchange_list_from_cli(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 2)]
fn cli_tier_overrides_env(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 3)]
fn env_tier_used_when_cli_silent(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 4)]
fn out_of_range_tier_rejected(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 5)]
fn empty_exchange_entry_rejected(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 6)]
fn asset_query_wins_over_tui(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 7)]
fn tui_flag_selects_explorer(config_state: ConfigState) {
    let _ = config_state;
}
