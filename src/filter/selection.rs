//! Filter criteria: the selected exchanges and the connection tier bound.
//!
//! [`ExchangeSelection`] is the single source of truth for which exchanges
//! are checked. Every presentation of it (checkbox marks, option lists)
//! is derived from this set and never written back.

use std::collections::BTreeSet;

use super::model::{ConnectionTier, ExchangeId};

/// Set of exchanges currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExchangeSelection {
    selected: BTreeSet<ExchangeId>,
}

impl ExchangeSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }

    /// Returns `true` when `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &ExchangeId) -> bool {
        self.selected.contains(id)
    }

    /// Adds `id` to the selection.
    pub fn select(&mut self, id: ExchangeId) {
        self.selected.insert(id);
    }

    /// Removes `id` from the selection.
    pub fn deselect(&mut self, id: &ExchangeId) {
        self.selected.remove(id);
    }

    /// Flips the selection state of `id` and returns the new state.
    pub fn toggle(&mut self, id: &ExchangeId) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        }
    }

    /// Replaces the selection with every identifier in `universe`.
    pub fn select_all<'a, I>(&mut self, universe: I)
    where
        I: IntoIterator<Item = &'a ExchangeId>,
    {
        self.selected = universe.into_iter().cloned().collect();
    }

    /// Removes every identifier.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Keeps only identifiers present in `universe`, returning those dropped.
    pub(crate) fn retain_known(&mut self, universe: &BTreeSet<ExchangeId>) -> Vec<ExchangeId> {
        let (known, unknown): (BTreeSet<_>, BTreeSet<_>) = std::mem::take(&mut self.selected)
            .into_iter()
            .partition(|id| universe.contains(id));
        self.selected = known;
        unknown.into_iter().collect()
    }

    /// Number of selected identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterates the selected identifiers in order.
    pub fn iter(&self) -> impl Iterator<Item = &ExchangeId> {
        self.selected.iter()
    }
}

impl FromIterator<ExchangeId> for ExchangeSelection {
    fn from_iter<T: IntoIterator<Item = ExchangeId>>(iter: T) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for ExchangeSelection {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(ExchangeId::from).collect()
    }
}

/// Upper bound on the connection tier of visible rows.
///
/// At most one tier is active. `None` leaves rows of every tier visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionFilter {
    max_tier: Option<ConnectionTier>,
}

impl ConnectionFilter {
    /// A filter that admits every tier.
    pub const UNFILTERED: Self = Self { max_tier: None };

    /// Creates a filter admitting tiers up to and including `tier`.
    #[must_use]
    pub const fn up_to(tier: ConnectionTier) -> Self {
        Self {
            max_tier: Some(tier),
        }
    }

    /// Creates a filter from an optional bound.
    #[must_use]
    pub const fn from_option(tier: Option<ConnectionTier>) -> Self {
        Self { max_tier: tier }
    }

    /// The active bound, if any.
    #[must_use]
    pub const fn max_tier(self) -> Option<ConnectionTier> {
        self.max_tier
    }

    /// Returns `true` when a row of `tier` passes this filter.
    ///
    /// The bound is inclusive.
    #[must_use]
    pub fn admits(self, tier: ConnectionTier) -> bool {
        self.max_tier.is_none_or(|max| tier <= max)
    }

    /// Returns a human-readable label for the filter bar.
    #[must_use]
    pub fn label(self) -> String {
        self.max_tier
            .map_or_else(|| "any".to_owned(), |tier| format!("<= {}", tier.label()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut selection = ExchangeSelection::new();
        let kraken = ExchangeId::from("kraken");

        assert!(selection.toggle(&kraken));
        assert!(selection.contains(&kraken));
        assert!(!selection.toggle(&kraken));
        assert!(selection.is_empty());
    }

    #[test]
    fn select_and_deselect_change_membership() {
        let mut selection = ExchangeSelection::new();
        let kraken = ExchangeId::from("kraken");

        selection.select(kraken.clone());
        selection.select(kraken.clone());
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(&kraken));

        selection.deselect(&kraken);
        assert!(!selection.contains(&kraken));
        assert!(selection.is_empty());
    }

    #[test]
    fn deselecting_an_absent_identifier_is_a_no_op() {
        let mut selection: ExchangeSelection = ["binance"].into_iter().collect();

        selection.deselect(&ExchangeId::from("kraken"));

        assert_eq!(selection.len(), 1);
        assert!(selection.contains(&ExchangeId::from("binance")));
    }

    #[test]
    fn clear_removes_every_identifier() {
        let mut selection: ExchangeSelection = ["binance", "kraken"].into_iter().collect();

        selection.clear();

        assert!(selection.is_empty());
        assert_eq!(selection.iter().count(), 0);
    }

    #[test]
    fn select_all_replaces_previous_contents() {
        let universe: BTreeSet<ExchangeId> = ["binance", "kraken"]
            .into_iter()
            .map(ExchangeId::from)
            .collect();
        let mut selection: ExchangeSelection = ["bitstamp"].into_iter().collect();

        selection.select_all(&universe);

        assert_eq!(selection.len(), 2);
        assert!(!selection.contains(&ExchangeId::from("bitstamp")));
    }

    #[test]
    fn retain_known_reports_unknown_identifiers() {
        let universe: BTreeSet<ExchangeId> = std::iter::once(ExchangeId::from("kraken")).collect();
        let mut selection: ExchangeSelection = ["kraken", "mystery"].into_iter().collect();

        let dropped = selection.retain_known(&universe);

        assert_eq!(dropped, vec![ExchangeId::from("mystery")]);
        assert_eq!(selection.len(), 1);
    }

    #[rstest]
    #[case(None, 5, true)]
    #[case(Some(1), 0, true)]
    #[case(Some(1), 1, true)]
    #[case(Some(1), 2, false)]
    fn connection_filter_bound_is_inclusive(
        #[case] bound: Option<u8>,
        #[case] tier: u8,
        #[case] admitted: bool,
    ) {
        let filter = ConnectionFilter::from_option(bound.map(ConnectionTier::new));
        assert_eq!(filter.admits(ConnectionTier::new(tier)), admitted);
    }

    #[test]
    fn connection_filter_label_describes_bound() {
        assert_eq!(ConnectionFilter::UNFILTERED.label(), "any");
        assert_eq!(
            ConnectionFilter::up_to(ConnectionTier::new(1)).label(),
            "<= 1 hop"
        );
    }
}
