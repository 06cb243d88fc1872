//! Explorer application state and message handling.
//!
//! [`ExplorerApp`] owns the loaded dataset and the
//! [`ResultFilterController`]. Filter messages are the only place the
//! controller is mutated; afterwards the cached visible indices are rebuilt
//! and the path cursor is clamped to the new result set. Components read
//! filter state through [`FilterView`] only.
//!
//! # Module Structure
//!
//! - `filter_handlers`: Exchange toggling and tier bound changes
//! - `layout`: Pane height calculations
//! - `model_impl`: `bubbletea_rs::Model` implementation
//! - `navigation`: Cursor movement within the focused pane
//! - `rendering`: Header, filter bar, status bar, and help overlay

use bubbletea_rs::Cmd;
use tracing::debug;

use super::ExplorerSession;
use super::messages::AppMsg;
use super::state::{Focus, ListCursor};
use crate::dataset::{Dataset, ExchangeRecord, LoadOptions, PathFile, PathResult};
use crate::filter::{FilterView, ResultFilterController};

mod filter_handlers;
mod layout;
mod model_impl;
mod navigation;
mod rendering;

/// Rows used by the header, filter bar, spacer, and status bar.
const CHROME_HEIGHT: usize = 4;
/// Rows used by the two pane titles.
const PANE_TITLE_HEIGHT: usize = 2;
/// Upper bound on exchange checklist rows.
const MAX_EXCHANGE_ROWS: usize = 8;
/// Rows reserved for paths before the checklist may grow.
const MIN_PATH_ROWS: usize = 3;

/// Main application model for the path explorer TUI.
#[derive(Debug)]
pub struct ExplorerApp {
    /// Exchanges, coins, and paths being explored.
    dataset: Dataset,
    /// Visibility state for every path, parallel to `dataset.paths()`.
    controller: ResultFilterController,
    /// Cached indices of visible paths.
    /// Invalidated whenever the controller changes.
    visible_indices: Vec<usize>,
    /// Pane receiving navigation keys.
    focus: Focus,
    /// Cursor within the exchange checklist.
    exchange_cursor: ListCursor,
    /// Cursor within the visible paths.
    path_cursor: ListCursor,
    /// Terminal width in columns.
    width: u16,
    /// Terminal height in rows.
    height: u16,
    /// Whether the key reference replaces the panes.
    pub(crate) show_help: bool,
}

impl ExplorerApp {
    /// Creates an application with every exchange selected and no tier
    /// bound.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        let controller = dataset.controller();
        let visible_indices = controller.visible_indices();
        Self {
            dataset,
            controller,
            visible_indices,
            focus: Focus::default(),
            exchange_cursor: ListCursor::new(),
            path_cursor: ListCursor::new(),
            width: 80,
            height: 24,
            show_help: false,
        }
    }

    /// Creates an application from a session, applying its initial
    /// exchange selection and tier bound.
    #[must_use]
    pub fn from_session(session: ExplorerSession) -> Self {
        let ExplorerSession {
            dataset,
            selection,
            max_tier,
        } = session;
        let mut app = Self::new(dataset);
        if let Some(initial) = selection {
            app.controller.set_exchange_selection(initial);
        }
        app.controller.set_connection_filter(max_tier);
        app.refresh_visible();
        app
    }

    /// Creates an application with no data.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Dataset::from_parts(
            Vec::new(),
            Vec::new(),
            PathFile::default(),
            LoadOptions::default(),
        ))
    }

    /// Read-only view of the filter state.
    #[must_use]
    pub fn filter(&self) -> &dyn FilterView {
        &self.controller
    }

    /// The dataset being explored.
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the number of visible paths.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// Returns the currently visible paths in fee order.
    #[must_use]
    pub fn visible_paths(&self) -> Vec<&PathResult> {
        self.visible_indices
            .iter()
            .filter_map(|&index| self.dataset.paths().get(index))
            .collect()
    }

    /// Returns the pane receiving navigation keys.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the cursor position within the visible paths.
    #[must_use]
    pub const fn path_cursor_position(&self) -> usize {
        self.path_cursor.position
    }

    /// Returns the cursor position within the exchange checklist.
    #[must_use]
    pub const fn exchange_cursor_position(&self) -> usize {
        self.exchange_cursor.position
    }

    /// Returns the path under the path cursor, if any.
    #[must_use]
    pub fn selected_path(&self) -> Option<&PathResult> {
        self.visible_indices
            .get(self.path_cursor.position)
            .and_then(|&index| self.dataset.paths().get(index))
    }

    /// Returns the exchange under the exchange cursor, if any.
    #[must_use]
    pub fn exchange_under_cursor(&self) -> Option<&ExchangeRecord> {
        self.dataset.exchanges().get(self.exchange_cursor.position)
    }

    /// Rebuilds the visible index cache and clamps the path cursor.
    ///
    /// Call this after every controller mutation.
    fn refresh_visible(&mut self) {
        self.visible_indices = self.controller.visible_indices();
        self.path_cursor.clamp(self.visible_indices.len());
        self.path_cursor.ensure_visible(self.path_list_height());
    }

    /// Applies `msg` to the application state.
    ///
    /// Returns a command only when the runtime must act, which is on quit.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => return Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => self.show_help = !self.show_help,
            AppMsg::FocusNext => self.focus = self.focus.next(),
            AppMsg::WindowResized { width, height } => self.resize(*width, *height),
            filter_msg if filter_msg.is_filter() => {
                self.apply_filter(filter_msg);
                self.refresh_visible();
                let summary = self.controller.summary();
                debug!(
                    visible = summary.visible_count,
                    total = summary.total_count,
                    "filter changed"
                );
            }
            navigation_msg => self.navigate(navigation_msg),
        }
        None
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let exchange_height = self.exchange_list_height();
        self.exchange_cursor.ensure_visible(exchange_height);
        let path_height = self.path_list_height();
        self.path_cursor.ensure_visible(path_height);
    }
}
