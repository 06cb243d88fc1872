//! Rendering logic for the explorer TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::ExplorerApp;
use crate::filter::FilterView;
use crate::tui::components::{
    ExchangePanelComponent, ExchangePanelViewContext, PathListComponent, PathListViewContext,
};
use crate::tui::state::Focus;

impl ExplorerApp {
    /// Renders the header bar with the coins being converted.
    pub(super) fn render_header(&self) -> String {
        let title = "Coinpath - Exchange Paths";
        self.dataset.endpoints().map_or_else(
            || format!("{title}\n"),
            |(origin, destination)| format!("{title} ({origin} -> {destination})\n"),
        )
    }

    /// Renders the filter bar showing the active criteria and counts.
    pub(super) fn render_filter_bar(&self) -> String {
        let summary = self.controller.summary();
        let tier = self.controller.connection_filter().label();
        let selected = self.controller.selection().len();
        let universe = self.controller.universe().len();
        let indicator = if summary.is_filtered() {
            " [filtered]"
        } else {
            ""
        };
        format!(
            "Tier: {tier}  Exchanges: {selected}/{universe}  Paths: {}/{}{indicator}\n",
            summary.visible_count, summary.total_count
        )
    }

    /// Renders the exchange checklist pane.
    pub(super) fn render_exchange_panel(&self) -> String {
        let ctx = ExchangePanelViewContext {
            exchanges: self.dataset.exchanges(),
            filter: &self.controller,
            cursor: self.exchange_cursor,
            visible_height: self.exchange_list_height(),
            focused: self.focus == Focus::Exchanges,
        };
        ExchangePanelComponent::view(&ctx)
    }

    /// Renders the path list pane.
    pub(super) fn render_path_list(&self) -> String {
        let ctx = PathListViewContext {
            dataset: &self.dataset,
            visible_indices: &self.visible_indices,
            cursor: self.path_cursor,
            visible_height: self.path_list_height(),
            focused: self.focus == Focus::Paths,
        };
        PathListComponent::view(&ctx)
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = if self.width <= 80 {
            "q:quit  ?:help  Tab:pane  Space:toggle  0-9:tier"
        } else {
            "j/k:move  Tab:pane  Space:toggle  a/n:all/none  0-9:max tier  x:any tier  ?:help  q:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down       Move cursor down
  k, Up         Move cursor up
  PgDn          Page down
  PgUp          Page up
  Home, g       Go to first item
  End, G        Go to last item
  Tab           Switch between exchanges and paths

Exchanges:
  Space, Enter  Toggle exchange under cursor
  a             Select all exchanges
  n             Deselect all exchanges

Connection tier:
  0-9           Show paths up to this many hops
  x             Show paths of any tier

Other:
  ?             Toggle this help
  q             Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
