//! Cursor movement within the focused pane.
//!
//! Navigation messages move the cursor of whichever pane has focus. After
//! each move the scroll offset is adjusted so the cursor remains in the
//! visible window.

use super::ExplorerApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::{Focus, ListCursor};

impl ExplorerApp {
    /// Moves the focused cursor as `msg` asks.
    ///
    /// Messages that do not move a cursor are ignored.
    pub(super) fn navigate(&mut self, msg: &AppMsg) {
        match msg {
            AppMsg::CursorUp => self.move_focused_cursor(|cursor, _, _| cursor.up(1)),
            AppMsg::CursorDown => {
                self.move_focused_cursor(|cursor, count, _| cursor.down(1, count));
            }
            AppMsg::PageUp => self.move_focused_cursor(|cursor, _, page| cursor.up(page)),
            AppMsg::PageDown => {
                self.move_focused_cursor(|cursor, count, page| cursor.down(page, count));
            }
            AppMsg::Home => self.move_focused_cursor(|cursor, _, _| cursor.home()),
            AppMsg::End => self.move_focused_cursor(|cursor, count, _| cursor.end(count)),
            _ => {}
        }
    }

    /// Applies `movement` to the focused cursor and keeps it on screen.
    ///
    /// `movement` receives the cursor, the item count, and the page size.
    fn move_focused_cursor<F>(&mut self, movement: F)
    where
        F: FnOnce(&mut ListCursor, usize, usize),
    {
        let (cursor, count, page_size) = match self.focus {
            Focus::Exchanges => {
                let page_size = self.exchange_list_height();
                (
                    &mut self.exchange_cursor,
                    self.dataset.exchanges().len(),
                    page_size,
                )
            }
            Focus::Paths => {
                let page_size = self.path_list_height();
                (
                    &mut self.path_cursor,
                    self.visible_indices.len(),
                    page_size,
                )
            }
        };
        movement(cursor, count, page_size);
        cursor.ensure_visible(page_size);
    }
}
