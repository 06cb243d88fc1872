//! Layout helpers for the explorer TUI model.
//!
//! The exchange checklist sits above the path list. The checklist takes as
//! many rows as it has exchanges, up to a cap, and the path list takes the
//! rest of the body.

use super::{CHROME_HEIGHT, ExplorerApp, MAX_EXCHANGE_ROWS, MIN_PATH_ROWS, PANE_TITLE_HEIGHT};

impl ExplorerApp {
    /// Body rows available to the two lists, excluding their titles.
    fn visible_body_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CHROME_HEIGHT)
            .saturating_sub(PANE_TITLE_HEIGHT)
    }

    /// Calculates the number of rows available for the exchange checklist.
    pub(super) fn exchange_list_height(&self) -> usize {
        let room = self.visible_body_height().saturating_sub(MIN_PATH_ROWS);
        self.dataset
            .exchanges()
            .len()
            .min(MAX_EXCHANGE_ROWS)
            .min(room)
            .max(1)
    }

    /// Calculates the number of rows available for the path list.
    pub(super) fn path_list_height(&self) -> usize {
        self.visible_body_height()
            .saturating_sub(self.exchange_list_height())
            .max(1)
    }
}
