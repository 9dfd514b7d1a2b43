// SPDX-License-Identifier: MPL-2.0
//! Category filter for the gallery grid.

use super::item::{Category, Item};
use std::fmt;

/// Token that selects every item (as carried by the "All" filter button).
pub const ALL_TOKEN: &str = "all";

/// The active gallery filter. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every item.
    #[default]
    All,
    /// Show only items of one category.
    Only(Category),
}

impl CategoryFilter {
    /// Parses a filter token; `all` (any case) maps to [`CategoryFilter::All`].
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case(ALL_TOKEN) {
            Self::All
        } else {
            Self::Only(Category::new(token))
        }
    }

    /// Returns `true` if the item passes this filter.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category() == category,
        }
    }

    /// Returns `true` if this filter narrows the gallery.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Only(_))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_TOKEN),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ItemIndex;

    fn item(category: &str) -> Item {
        Item::new(ItemIndex::new(0), category.into(), "x".into())
    }

    #[test]
    fn all_token_is_case_insensitive() {
        assert_eq!(CategoryFilter::from_token("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_token("ALL"), CategoryFilter::All);
    }

    #[test]
    fn other_tokens_select_a_category() {
        assert_eq!(
            CategoryFilter::from_token("nature"),
            CategoryFilter::Only(Category::new("nature"))
        );
    }

    #[test]
    fn all_matches_everything() {
        assert!(CategoryFilter::All.matches(&item("a")));
        assert!(!CategoryFilter::All.is_active());
    }

    #[test]
    fn category_match_is_exact() {
        let filter = CategoryFilter::from_token("Nature");
        assert!(filter.matches(&item("Nature")));
        assert!(!filter.matches(&item("nature")));
        assert!(filter.is_active());
    }

    #[test]
    fn display_round_trips_through_token() {
        for filter in [CategoryFilter::All, CategoryFilter::from_token("city")] {
            assert_eq!(CategoryFilter::from_token(&filter.to_string()), filter);
        }
    }
}
