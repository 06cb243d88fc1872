//! State management for the path explorer TUI.
//!
//! This module provides the cursor type shared by both panes and the focus
//! marker deciding which pane receives navigation keys.

mod list_cursor;

pub use list_cursor::ListCursor;

/// Pane that currently receives navigation and toggle keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The exchange checklist.
    #[default]
    Exchanges,
    /// The path result list.
    Paths,
}

impl Focus {
    /// Returns the other pane.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Exchanges => Self::Paths,
            Self::Paths => Self::Exchanges,
        }
    }
}
