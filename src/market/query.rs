//! Coin list filtering and sorting
//!
//! A [`CoinQuery`] combines a free-text search with a sort key and direction.
//! It is re-applied from scratch on every change; lists are a few dozen
//! entries at most, so there is no incremental update.

use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

use super::types::Coin;

/// Field to sort the coin table by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Price,
    Change,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Change => "change",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Apply this direction to an ascending ordering
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A combined sort choice, as offered by the dashboard's sort selector
///
/// Keys look like `"price-desc"` and round-trip through [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOption {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOption {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Every option in selector order
    pub fn all() -> [SortOption; 6] {
        use SortDirection::*;
        use SortField::*;
        [
            Self::new(Name, Ascending),
            Self::new(Name, Descending),
            Self::new(Price, Ascending),
            Self::new(Price, Descending),
            Self::new(Change, Ascending),
            Self::new(Change, Descending),
        ]
    }

    /// Selector key, e.g. `"name-asc"`
    pub fn key(&self) -> String {
        format!("{}-{}", self.field.as_str(), self.direction.as_str())
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        use SortDirection::*;
        use SortField::*;
        match (self.field, self.direction) {
            (Name, Ascending) => "Name (A-Z)",
            (Name, Descending) => "Name (Z-A)",
            (Price, Ascending) => "Price (Low to High)",
            (Price, Descending) => "Price (High to Low)",
            (Change, Ascending) => "Change (Low to High)",
            (Change, Descending) => "Change (High to Low)",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Error parsing a sort key
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid sort option: {0}. Use one of: name-asc, name-desc, price-asc, price-desc, change-asc, change-desc")]
pub struct ParseSortError(pub String);

impl FromStr for SortOption {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let (field, direction) = lowered
            .split_once('-')
            .ok_or_else(|| ParseSortError(s.to_string()))?;

        let field = match field {
            "name" => SortField::Name,
            "price" => SortField::Price,
            "change" => SortField::Change,
            _ => return Err(ParseSortError(s.to_string())),
        };
        let direction = match direction {
            "asc" | "ascending" => SortDirection::Ascending,
            "desc" | "descending" => SortDirection::Descending,
            _ => return Err(ParseSortError(s.to_string())),
        };

        Ok(Self::new(field, direction))
    }
}

/// Search text plus sort choice for the coin table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinQuery {
    /// Case-insensitive substring matched against name or symbol
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: SortOption,
}

impl CoinQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Builder method: set sort field and direction
    pub fn sort_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort = SortOption::new(field, direction);
        self
    }

    /// Builder method: set a combined sort option
    pub fn sort(mut self, option: SortOption) -> Self {
        self.sort = option;
        self
    }

    /// Whether the search text filters anything at all
    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Filter and sort `coins`, returning a new list
    pub fn apply(&self, coins: &[Coin]) -> Vec<Coin> {
        let needle = self.search.trim().to_lowercase();

        let mut result: Vec<Coin> = if needle.is_empty() {
            coins.to_vec()
        } else {
            coins.iter().filter(|c| c.matches(&needle)).cloned().collect()
        };

        let mut collator = Collator::default();
        result.sort_by(|a, b| self.compare(&mut collator, a, b));
        result
    }

    fn compare(&self, collator: &mut Collator, a: &Coin, b: &Coin) -> Ordering {
        let primary = match self.sort.field {
            SortField::Name => collator.collate(a.name.as_str(), b.name.as_str()),
            SortField::Price => a.current_price.total_cmp(&b.current_price),
            SortField::Change => a
                .price_change_percentage_24h
                .total_cmp(&b.price_change_percentage_24h),
        };

        // Equal keys fall back to the id so the output never depends on input order
        self.sort.direction.apply(primary).then_with(|| a.id.cmp(&b.id))
    }
}

/// Locale-aware name ordering using the Unicode Collation Algorithm (CLDR root).
///
/// Case and accents only matter when the base letters are equal, and then
/// lowercase sorts first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}
