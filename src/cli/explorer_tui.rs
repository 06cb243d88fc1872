//! TUI mode for exploring exchange paths.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that lets users toggle exchanges and bound the connection tier
//! while the path list updates.

use std::io::{self, Write};

use bubbletea_rs::Program;
use coinpath::tui::{ExplorerApp, ExplorerSession, set_initial_session};
use coinpath::{CoinpathConfig, CoinpathError};
use tracing::warn;

use super::load_dataset;

/// Runs the TUI mode for exploring exchange paths.
///
/// # Errors
///
/// Returns an error if:
/// - The exchange list or tier bound is invalid
/// - The data files cannot be loaded
/// - The TUI fails to initialise
pub async fn run(config: &CoinpathConfig) -> Result<(), CoinpathError> {
    let selection = config.exchange_selection()?;
    let max_tier = config.connection_tier()?;
    let dataset = load_dataset(config)?;

    let session = ExplorerSession::new(dataset)
        .with_selection(selection)
        .with_max_tier(max_tier);

    // Store the session for Model::init() to retrieve. If one is already set,
    // the existing session is kept.
    if !set_initial_session(session) {
        warn!("explorer session already set; keeping the existing one");
    }

    run_tui().await.map_err(|error| CoinpathError::Tui {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `ExplorerApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // ExplorerApp::init() retrieves the session from module-level storage.
    let program = Program::<ExplorerApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
