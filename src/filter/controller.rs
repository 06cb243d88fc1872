//! Result filtering and selection-state synchronisation.
//!
//! [`ResultFilterController`] owns the fixed list of [`ResultRow`]s
//! together with the active criteria. Each setter rewrites one visibility
//! flag on every row and then refreshes the cached [`FilterSummary`], so a
//! reader never observes flags and counts out of step with each other.
//!
//! Presentation code reads the controller through [`FilterView`] and never
//! mutates it directly.

use std::collections::BTreeSet;

use tracing::debug;

use super::model::{ConnectionTier, ExchangeId, FilterSummary, ResultRow};
use super::selection::{ConnectionFilter, ExchangeSelection};

/// Read-only access to filter state for presentation layers.
pub trait FilterView {
    /// All rows in their original order.
    fn rows(&self) -> &[ResultRow];

    /// Aggregate counts from the last recompute.
    fn summary(&self) -> FilterSummary;

    /// Currently selected exchanges.
    fn selection(&self) -> &ExchangeSelection;

    /// Currently active connection filter.
    fn connection_filter(&self) -> ConnectionFilter;

    /// Every exchange that may be selected.
    fn universe(&self) -> &BTreeSet<ExchangeId>;

    /// Returns `true` when the row at `index` exists and is visible.
    fn is_visible(&self, index: usize) -> bool {
        self.rows().get(index).is_some_and(ResultRow::is_visible)
    }

    /// Indices of visible rows in display order.
    fn visible_indices(&self) -> Vec<usize> {
        self.rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_visible())
            .map(|(index, _)| index)
            .collect()
    }
}

/// Owns filter criteria and per-row visibility.
#[derive(Debug, Clone)]
pub struct ResultFilterController {
    universe: BTreeSet<ExchangeId>,
    rows: Vec<ResultRow>,
    selection: ExchangeSelection,
    connection: ConnectionFilter,
    summary: FilterSummary,
}

impl ResultFilterController {
    /// Creates a controller with every exchange selected and no tier bound.
    #[must_use]
    pub fn new(universe: BTreeSet<ExchangeId>, rows: Vec<ResultRow>) -> Self {
        let mut selection = ExchangeSelection::new();
        selection.select_all(&universe);
        let mut controller = Self {
            universe,
            rows,
            selection: ExchangeSelection::new(),
            connection: ConnectionFilter::UNFILTERED,
            summary: FilterSummary::default(),
        };
        controller.set_exchange_selection(selection);
        controller.set_connection_filter(None);
        controller
    }

    /// Replaces the exchange selection and refreshes `hidden_by_exchange`.
    ///
    /// Identifiers outside the universe are discarded, so a row naming an
    /// unknown exchange stays hidden whatever the caller selects.
    pub fn set_exchange_selection(&mut self, mut selected: ExchangeSelection) {
        let dropped = selected.retain_known(&self.universe);
        if !dropped.is_empty() {
            debug!(
                count = dropped.len(),
                "ignoring selected exchanges outside the catalogue"
            );
        }
        self.selection = selected;
        self.apply_exchange_criterion();
    }

    /// Replaces the connection tier bound and refreshes
    /// `hidden_by_connection`.
    pub fn set_connection_filter(&mut self, tier: Option<ConnectionTier>) {
        self.connection = ConnectionFilter::from_option(tier);
        let connection = self.connection;
        for row in &mut self.rows {
            row.set_hidden_by_connection(!connection.admits(row.connection_type()));
        }
        self.refresh_summary();
    }

    /// Removes the connection tier bound.
    pub fn clear_connection_filter(&mut self) {
        self.set_connection_filter(None);
    }

    /// Flips one exchange and returns whether it is now selected.
    ///
    /// Exchanges outside the universe are left untouched and reported as
    /// unselected.
    pub fn toggle_exchange(&mut self, id: &ExchangeId) -> bool {
        if !self.universe.contains(id) {
            return false;
        }
        let mut selection = self.selection.clone();
        let selected = selection.toggle(id);
        self.set_exchange_selection(selection);
        selected
    }

    /// Selects the whole universe.
    pub fn select_all_exchanges(&mut self) {
        let mut selection = ExchangeSelection::new();
        selection.select_all(&self.universe);
        self.set_exchange_selection(selection);
    }

    /// Clears the selection, hiding every row.
    pub fn deselect_all_exchanges(&mut self) {
        self.set_exchange_selection(ExchangeSelection::new());
    }

    /// Computes the summary from the current flags.
    #[must_use]
    pub fn recompute(&self) -> FilterSummary {
        self.rows.iter().fold(
            FilterSummary {
                total_count: self.rows.len(),
                ..FilterSummary::default()
            },
            |mut summary, row| {
                if row.is_visible() {
                    summary.visible_count += 1;
                }
                summary.any_exchange_filtered |= row.hidden_by_exchange();
                summary.any_connection_filtered |= row.hidden_by_connection();
                summary
            },
        )
    }

    fn apply_exchange_criterion(&mut self) {
        let selection = &self.selection;
        for row in &mut self.rows {
            let a_selected = selection.contains(row.exchange_a());
            let b_selected = row.exchange_b().is_none_or(|id| selection.contains(id));
            row.set_hidden_by_exchange(!(a_selected && b_selected));
        }
        self.refresh_summary();
    }

    fn refresh_summary(&mut self) {
        self.summary = self.recompute();
        debug!(
            visible = self.summary.visible_count,
            total = self.summary.total_count,
            selected_exchanges = self.selection.len(),
            max_tier = ?self.connection.max_tier(),
            "recomputed result visibility"
        );
    }
}

impl FilterView for ResultFilterController {
    fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    fn summary(&self) -> FilterSummary {
        self.summary
    }

    fn selection(&self) -> &ExchangeSelection {
        &self.selection
    }

    fn connection_filter(&self) -> ConnectionFilter {
        self.connection
    }

    fn universe(&self) -> &BTreeSet<ExchangeId> {
        &self.universe
    }
}
