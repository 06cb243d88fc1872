//! Path list component for displaying the visible exchange paths.
//!
//! This component renders a scrollable list of paths with cursor
//! highlighting. Each line shows the fee rank, the connection tier, the
//! exchanges traded on, and the formatted total fees.

use crate::dataset::{Dataset, PathResult, format_fee};
use crate::tui::state::ListCursor;

/// Context for rendering the path list view.
///
/// Bundles the data needed to render the visible paths without requiring
/// per-frame allocations.
#[derive(Debug, Clone, Copy)]
pub struct PathListViewContext<'a> {
    /// Dataset holding every path.
    pub dataset: &'a Dataset,
    /// Indices of visible paths in display order.
    pub visible_indices: &'a [usize],
    /// Cursor within `visible_indices`.
    pub cursor: ListCursor,
    /// Maximum number of path rows to render.
    pub visible_height: usize,
    /// Whether the list has keyboard focus.
    pub focused: bool,
}

/// Component rendering the path list.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathListComponent;

impl PathListComponent {
    /// Renders the title line followed by the visible window of paths.
    ///
    /// Only paths within the scrolled window are formatted.
    #[must_use]
    pub fn view(ctx: &PathListViewContext<'_>) -> String {
        let focus_marker = if ctx.focused { "*" } else { " " };
        let mut output = format!("{focus_marker}Paths\n");

        if ctx.visible_indices.is_empty() {
            output.push_str("  No paths match the current filter.\n");
            return output;
        }

        for (display_index, &path_index) in ctx
            .visible_indices
            .iter()
            .enumerate()
            .skip(ctx.cursor.scroll_offset)
            .take(ctx.visible_height)
        {
            let Some(path) = ctx.dataset.paths().get(path_index) else {
                continue;
            };
            let is_cursor = ctx.focused && display_index == ctx.cursor.position;
            output.push_str(&Self::format_line(
                ctx.dataset,
                path,
                path_index.saturating_add(1),
                is_cursor,
            ));
            output.push('\n');
        }

        output
    }

    fn format_line(dataset: &Dataset, path: &PathResult, rank: usize, is_cursor: bool) -> String {
        let prefix = if is_cursor { ">" } else { " " };
        let tier = path.tier.label();
        let route = dataset.route(path);
        let fees = format_fee(path.total_fees, dataset.currency());
        format!("{prefix} #{rank:<3}[{tier}] {route}  {fees}")
    }
}
