//! Terminal user interface for exploring exchange paths.
//!
//! This module provides an interactive TUI built on bubbletea-rs. The user
//! ticks exchanges on and off in one pane, bounds the connection tier from
//! the keyboard, and watches the path list in the other pane update
//! immediately.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ExplorerApp`], which owns the
//!   [`ResultFilterController`](crate::filter::ResultFilterController)
//! - **View**: Rendering in each component's `view()` method, reading filter
//!   state through [`FilterView`](crate::filter::FilterView)
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Cursor and focus state
//! - [`components`]: Exchange checklist and path list components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the loaded dataset is handed over through module-level storage.
//! Call [`set_initial_session`] before starting the program, and
//! `ExplorerApp::init()` will pick it up.

use std::sync::OnceLock;

use crate::dataset::Dataset;
use crate::filter::{ConnectionTier, ExchangeSelection};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::ExplorerApp;

/// Global storage for the session the explorer starts with.
///
/// This is set before the TUI program starts and read by `ExplorerApp::init()`.
static INITIAL_SESSION: OnceLock<ExplorerSession> = OnceLock::new();

/// Dataset and initial filter choices for one explorer run.
#[derive(Debug, Clone)]
pub struct ExplorerSession {
    /// Loaded exchanges, coins, and paths.
    pub dataset: Dataset,
    /// Exchanges to select at startup; `None` selects all of them.
    pub selection: Option<ExchangeSelection>,
    /// Connection tier bound to apply at startup.
    pub max_tier: Option<ConnectionTier>,
}

impl ExplorerSession {
    /// Creates a session that starts with every exchange selected.
    #[must_use]
    pub const fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            selection: None,
            max_tier: None,
        }
    }

    /// Sets the exchanges selected at startup.
    #[must_use]
    pub fn with_selection(mut self, selection: Option<ExchangeSelection>) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the connection tier bound applied at startup.
    #[must_use]
    pub const fn with_max_tier(mut self, max_tier: Option<ConnectionTier>) -> Self {
        self.max_tier = max_tier;
        self
    }
}

/// Sets the session for the TUI application.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the session was set, `false` if it was already set.
pub fn set_initial_session(session: ExplorerSession) -> bool {
    INITIAL_SESSION.set(session).is_ok()
}

/// Gets a clone of the stored session.
///
/// `OnceLock` does not support taking the value, so the session is cloned.
pub(crate) fn get_initial_session() -> Option<ExplorerSession> {
    INITIAL_SESSION.get().cloned()
}
