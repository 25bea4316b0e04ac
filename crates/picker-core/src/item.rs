//! Item Entity
//!
//! A single selectable entry: one kaomoji or one symbol.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Which picker a catalog feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogKind {
    #[default]
    Kaomoji,
    Symbol,
}

impl CatalogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Kaomoji => "kaomoji",
            CatalogKind::Symbol => "symbol",
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within its catalog
    pub id: String,
    /// Text that gets pasted
    pub text: String,
    /// Category used by the tab bar
    pub category: String,
    /// Optional human label, also searched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Item {
    pub fn new(id: impl Into<String>, text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: category.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Label shown in tooltips and the hover preview
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.text)
    }

    /// Case-insensitive substring match against name or text.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        if self.text.to_lowercase().contains(needle) {
            return true;
        }
        self.name
            .as_ref()
            .map(|name| name.to_lowercase().contains(needle))
            .unwrap_or(false)
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("1", "(^_^)", "Happy");
        assert_eq!(item.id(), "1");
        assert_eq!(item.label(), "(^_^)");
        assert!(item.name.is_none());
    }

    #[test]
    fn test_label_prefers_name() {
        let item = Item::new("2", "→", "Arrows").with_name("Right arrow");
        assert_eq!(item.label(), "Right arrow");
    }

    #[test]
    fn test_matches_name_or_text() {
        let item = Item::new("3", "¯\\_(ツ)_/¯", "Other").with_name("Shrug");
        assert!(item.matches_lowercase("shrug"));
        assert!(item.matches_lowercase("(ツ)"));
        assert!(!item.matches_lowercase("table"));
    }

    #[test]
    fn test_catalog_kind_names() {
        assert_eq!(CatalogKind::Symbol.as_str(), "symbol");
        assert_eq!(CatalogKind::default().as_str(), "kaomoji");
    }

    #[test]
    fn test_name_is_optional_in_json() {
        let item: Item = serde_json::from_str(r#"{"id":"9","text":"★","category":"Stars"}"#).unwrap();
        assert_eq!(item.name, None);
        assert_eq!(item.category, "Stars");
    }
}
