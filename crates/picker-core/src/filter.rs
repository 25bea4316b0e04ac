//! Filter Engine
//!
//! Category + search filtering over a catalog. Pure and cheap enough to
//! run on every keystroke.

use crate::catalog::ItemCatalog;
use crate::item::Item;

/// User-controlled filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    /// `None` means "All"
    pub selected_category: Option<String>,
}

impl FilterState {
    /// True when the search box is empty and the "All" tab is active.
    /// Recents are only shown in this view.
    pub fn is_default_view(&self) -> bool {
        self.selected_category.is_none() && self.search_query.is_empty()
    }

    pub fn apply<'a>(&self, catalog: &'a ItemCatalog) -> Vec<&'a Item> {
        filter_items(catalog, self.selected_category.as_deref(), &self.search_query)
    }
}

/// Items matching `category` (exact) and `query` (case-insensitive
/// substring of name or text), in catalog order.
///
/// Spaces in the query are significant: many kaomoji contain them.
pub fn filter_items<'a>(catalog: &'a ItemCatalog, category: Option<&str>, query: &str) -> Vec<&'a Item> {
    let needle = query.to_lowercase();

    catalog
        .items()
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .filter(|item| needle.is_empty() || item.matches_lowercase(&needle))
        .collect()
}
