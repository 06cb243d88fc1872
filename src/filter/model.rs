//! Value types shared by the filter controller and its collaborators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for an exchange, bank, or wallet endpoint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ExchangeId(String);

impl ExchangeId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExchangeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Number of intermediate steps a conversion path needs.
///
/// Tiers are totally ordered and lower is more direct: `0` is a single
/// trade, `1` adds one connecting trade, and so on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize,
)]
#[serde(transparent)]
pub struct ConnectionTier(u8);

impl ConnectionTier {
    /// The most direct tier.
    pub const DIRECT: Self = Self(0);

    /// Creates a tier from its raw value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw tier value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns a short label for display.
    #[must_use]
    pub fn label(self) -> String {
        match self.0 {
            0 => "Direct".to_owned(),
            1 => "1 hop".to_owned(),
            hops => format!("{hops} hops"),
        }
    }
}

impl fmt::Display for ConnectionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One candidate conversion path as seen by the filter.
///
/// The exchange and tier attributes are fixed at construction. Only the
/// owning controller may change the two visibility flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    exchange_a: ExchangeId,
    exchange_b: Option<ExchangeId>,
    connection_type: ConnectionTier,
    hidden_by_exchange: bool,
    hidden_by_connection: bool,
}

impl ResultRow {
    /// Creates a visible row.
    #[must_use]
    pub const fn new(
        exchange_a: ExchangeId,
        exchange_b: Option<ExchangeId>,
        connection_type: ConnectionTier,
    ) -> Self {
        Self {
            exchange_a,
            exchange_b,
            connection_type,
            hidden_by_exchange: false,
            hidden_by_connection: false,
        }
    }

    /// Exchange performing the first trade.
    #[must_use]
    pub const fn exchange_a(&self) -> &ExchangeId {
        &self.exchange_a
    }

    /// Exchange performing the second trade, absent for single-sided paths.
    #[must_use]
    pub const fn exchange_b(&self) -> Option<&ExchangeId> {
        self.exchange_b.as_ref()
    }

    /// Connection tier of the path.
    #[must_use]
    pub const fn connection_type(&self) -> ConnectionTier {
        self.connection_type
    }

    /// Whether the exchange criterion hides this row.
    #[must_use]
    pub const fn hidden_by_exchange(&self) -> bool {
        self.hidden_by_exchange
    }

    /// Whether the connection criterion hides this row.
    #[must_use]
    pub const fn hidden_by_connection(&self) -> bool {
        self.hidden_by_connection
    }

    /// A row is visible iff neither criterion hides it.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.hidden_by_exchange && !self.hidden_by_connection
    }

    pub(super) const fn set_hidden_by_exchange(&mut self, hidden: bool) {
        self.hidden_by_exchange = hidden;
    }

    pub(super) const fn set_hidden_by_connection(&mut self, hidden: bool) {
        self.hidden_by_connection = hidden;
    }
}

/// Aggregate counts derived from the current visibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    /// Rows with both flags cleared.
    pub visible_count: usize,
    /// All rows, visible or not.
    pub total_count: usize,
    /// At least one row is hidden by the exchange criterion.
    pub any_exchange_filtered: bool,
    /// At least one row is hidden by the connection criterion.
    pub any_connection_filtered: bool,
}

impl FilterSummary {
    /// Whether a "filtered" indicator should be shown.
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.any_exchange_filtered || self.any_connection_filtered
    }
}
