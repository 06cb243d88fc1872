//! Message types for the TUI update loop.
//!
//! Key presses and terminal events are translated into [`AppMsg`] before
//! they reach the application state.

use crate::filter::ConnectionTier;

/// Messages for the path explorer TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one item in the focused pane.
    CursorUp,
    /// Move cursor down one item in the focused pane.
    CursorDown,
    /// Move cursor up one page in the focused pane.
    PageUp,
    /// Move cursor down one page in the focused pane.
    PageDown,
    /// Move cursor to the first item in the focused pane.
    Home,
    /// Move cursor to the last item in the focused pane.
    End,
    /// Switch focus between the exchange pane and the path pane.
    FocusNext,

    // Filter changes
    /// Toggle the exchange under the exchange cursor.
    ToggleExchange,
    /// Select every catalogued exchange.
    SelectAllExchanges,
    /// Deselect every exchange.
    DeselectAllExchanges,
    /// Show only paths up to and including the given tier.
    SetMaxTier(ConnectionTier),
    /// Show paths of every tier.
    ClearMaxTier,

    // Lifecycle
    /// Leave the explorer.
    Quit,
    /// Show or hide the key reference.
    ToggleHelp,
    /// The terminal changed size.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true if this message changes filter criteria.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::ToggleExchange
                | Self::SelectAllExchanges
                | Self::DeselectAllExchanges
                | Self::SetMaxTier(_)
                | Self::ClearMaxTier
        )
    }
}
