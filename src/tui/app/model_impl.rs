//! Wiring of [`ExplorerApp`] into the `bubbletea_rs` runtime.
//!
//! Runtime events are translated into [`AppMsg`] values before reaching
//! the handlers, and every frame is fitted to the terminal so stale cells
//! from the previous frame are overwritten.

use std::any::Any;
use std::iter;

use bubbletea_rs::event::{KeyMsg, WindowSizeMsg};
use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::ExplorerApp;
use crate::tui::get_initial_session;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for ExplorerApp {
    fn init() -> (Self, Option<Cmd>) {
        let app = get_initial_session().map_or_else(Self::empty, Self::from_session);
        (app, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        self.translate(msg.as_ref())
            .and_then(|app_msg| self.handle_message(&app_msg))
    }

    fn view(&self) -> String {
        let frame = if self.show_help {
            self.render_help_overlay()
        } else {
            [
                self.render_header(),
                self.render_filter_bar(),
                "\n".to_owned(),
                self.render_exchange_panel(),
                self.render_path_list(),
                self.render_status_bar(),
            ]
            .concat()
        };
        self.fit_to_terminal(&frame)
    }
}

impl ExplorerApp {
    fn translate(&self, msg: &(dyn Any + Send)) -> Option<AppMsg> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return Some(app_msg.clone());
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            // While help is open a key press only dismisses it.
            if self.show_help {
                return Some(AppMsg::ToggleHelp);
            }
            return map_key_to_message(key);
        }
        msg.downcast_ref::<WindowSizeMsg>()
            .map(|size| AppMsg::WindowResized {
                width: size.width,
                height: size.height,
            })
    }

    /// Fits `frame` to exactly `height` rows of `width - 1` columns.
    ///
    /// The last column is left unused so the terminal never autowraps.
    fn fit_to_terminal(&self, frame: &str) -> String {
        let columns = usize::from(self.width).saturating_sub(1).max(1);
        let rows = usize::from(self.height).max(1);
        let blank = " ".repeat(columns);

        let mut fitted = frame
            .lines()
            .map(|line| fit_line(line, columns))
            .chain(iter::repeat(blank))
            .take(rows)
            .collect::<Vec<_>>()
            .join("\n");
        fitted.push('\n');
        fitted
    }
}

/// Clips `line` to `columns` display cells and pads the remainder.
fn fit_line(line: &str, columns: usize) -> String {
    let mut used = 0_usize;
    let mut fitted: String = line
        .chars()
        .take_while(|ch| {
            let cells = ch.width().unwrap_or(0);
            let fits = used.saturating_add(cells) <= columns;
            if fits {
                used = used.saturating_add(cells);
            }
            fits
        })
        .collect();
    fitted.extend(iter::repeat_n(' ', columns.saturating_sub(used)));
    fitted
}
