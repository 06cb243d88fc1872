//! Filter changes requested from the explorer TUI.
//!
//! The user's choice is forwarded to the controller; the caller rebuilds
//! the visible index cache afterwards so the path cursor stays in range.

use super::ExplorerApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::Focus;

impl ExplorerApp {
    /// Forwards a filter message to the controller.
    pub(super) fn apply_filter(&mut self, msg: &AppMsg) {
        match msg {
            AppMsg::ToggleExchange => self.toggle_exchange_under_cursor(),
            AppMsg::SelectAllExchanges => self.controller.select_all_exchanges(),
            AppMsg::DeselectAllExchanges => self.controller.deselect_all_exchanges(),
            AppMsg::SetMaxTier(tier) => self.controller.set_connection_filter(Some(*tier)),
            AppMsg::ClearMaxTier => self.controller.clear_connection_filter(),
            _ => {}
        }
    }

    /// Toggles the exchange under the exchange cursor.
    ///
    /// Ignored while the path list has focus.
    fn toggle_exchange_under_cursor(&mut self) {
        if self.focus != Focus::Exchanges {
            return;
        }
        if let Some(id) = self.exchange_under_cursor().map(|record| record.id.clone()) {
            self.controller.toggle_exchange(&id);
        }
    }
}
