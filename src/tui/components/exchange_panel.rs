//! Exchange checklist component.
//!
//! Checkbox marks are derived from the controller's selection on every
//! render and are never stored separately.

use crate::dataset::{ExchangeKind, ExchangeRecord};
use crate::filter::FilterView;
use crate::tui::state::ListCursor;

/// Context for rendering the exchange checklist.
#[derive(Clone, Copy)]
pub struct ExchangePanelViewContext<'a> {
    /// Catalogued exchanges in display order.
    pub exchanges: &'a [ExchangeRecord],
    /// Read-only filter state supplying the selection.
    pub filter: &'a dyn FilterView,
    /// Cursor within `exchanges`.
    pub cursor: ListCursor,
    /// Maximum number of exchange rows to render.
    pub visible_height: usize,
    /// Whether the checklist has keyboard focus.
    pub focused: bool,
}

/// Component rendering the exchange checklist.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangePanelComponent;

impl ExchangePanelComponent {
    /// Renders the title line followed by the visible window of exchanges.
    #[must_use]
    pub fn view(ctx: &ExchangePanelViewContext<'_>) -> String {
        let selected = ctx.filter.selection().len();
        let total = ctx.filter.universe().len();
        let focus_marker = if ctx.focused { "*" } else { " " };
        let mut output = format!("{focus_marker}Exchanges ({selected}/{total} selected)\n");

        if ctx.exchanges.is_empty() {
            output.push_str("  No exchanges catalogued.\n");
            return output;
        }

        for (index, record) in ctx
            .exchanges
            .iter()
            .enumerate()
            .skip(ctx.cursor.scroll_offset)
            .take(ctx.visible_height)
        {
            let is_cursor = ctx.focused && index == ctx.cursor.position;
            output.push_str(&Self::format_line(
                record,
                ctx.filter.selection().contains(&record.id),
                is_cursor,
            ));
            output.push('\n');
        }

        output
    }

    fn format_line(record: &ExchangeRecord, checked: bool, is_cursor: bool) -> String {
        let prefix = if is_cursor { ">" } else { " " };
        let mark = if checked { "x" } else { " " };
        let kind = match record.kind {
            ExchangeKind::Exchange => "",
            ExchangeKind::Bank => " (bank)",
            ExchangeKind::Wallet => " (wallet)",
        };
        format!("{prefix} [{mark}] {}{kind}", record.name)
    }
}
