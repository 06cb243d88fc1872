//! Free-text asset search over the coin catalogue.

use crate::dataset::CoinRecord;

/// Case-insensitive substring query against coin identifiers and names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetQuery {
    needle: String,
}

impl AssetQuery {
    /// Creates a query; surrounding whitespace is ignored.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_uppercase(),
        }
    }

    /// Returns `true` when the query has no text and matches everything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns `true` when `coin` matches the query.
    #[must_use]
    pub fn matches(&self, coin: &CoinRecord) -> bool {
        if self.is_empty() {
            return true;
        }
        coin.id.to_uppercase().contains(&self.needle)
            || coin.long_name.to_uppercase().contains(&self.needle)
    }

    /// Returns matching coins ordered by ranking.
    #[must_use]
    pub fn filter<'a>(&self, coins: &'a [CoinRecord]) -> Vec<&'a CoinRecord> {
        let mut matches: Vec<_> = coins.iter().filter(|coin| self.matches(coin)).collect();
        matches.sort_by_key(|coin| coin.ranking);
        matches
    }
}
