//! UI components for the path explorer TUI.
//!
//! Components are stateless renderers: each `view()` takes a context
//! borrowing whatever it needs and returns the rendered lines.

mod exchange_panel;
mod path_list;

pub use exchange_panel::{ExchangePanelComponent, ExchangePanelViewContext};
pub use path_list::{PathListComponent, PathListViewContext};
