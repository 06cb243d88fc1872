//! Logging setup for the CLI.
//!
//! Events go to stderr through `tracing-subscriber`'s formatter. The filter
//! comes from `COINPATH_LOG` when set, otherwise from the configured
//! `log_level`. The explorer owns the terminal, so it logs nothing unless
//! `COINPATH_LOG` asks for it.

use coinpath::{CoinpathConfig, CoinpathError, OperationMode};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a full `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "COINPATH_LOG";

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`CoinpathError::Configuration`] when the filter directives are
/// invalid or a subscriber is already installed.
pub fn init(config: &CoinpathConfig) -> Result<(), CoinpathError> {
    let from_env = std::env::var(LOG_ENV_VAR).ok();
    let filter = log_filter(from_env.as_deref(), config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| CoinpathError::Configuration {
            message: format!("failed to initialise logging: {error}"),
        })
}

/// Builds the event filter from the environment override or the
/// configuration.
///
/// # Errors
///
/// Returns [`CoinpathError::Configuration`] when the directives do not
/// parse.
pub fn log_filter(
    from_env: Option<&str>,
    config: &CoinpathConfig,
) -> Result<EnvFilter, CoinpathError> {
    let directives = from_env
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default_directives(config));

    EnvFilter::try_new(directives).map_err(|error| CoinpathError::Configuration {
        message: format!("invalid log filter '{directives}': {error}"),
    })
}

fn default_directives(config: &CoinpathConfig) -> &str {
    if config.operation_mode() == OperationMode::Explorer {
        "off"
    } else {
        config.log_level()
    }
}
