//! Item Catalog
//!
//! Ordered, read-only list of items for one picker.

use std::collections::HashSet;

use crate::builtin::{KAOMOJI, SYMBOLS};
use crate::entity::{PickerError, PickerResult};
use crate::item::{CatalogKind, Item};

/// Read-only item list, loaded once
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemCatalog {
    kind: CatalogKind,
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Build a catalog, rejecting empty or duplicate ids
    pub fn new(kind: CatalogKind, items: Vec<Item>) -> PickerResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.is_empty() {
                return Err(PickerError::InvalidCatalog(format!(
                    "item {:?} has an empty id",
                    item.text
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(PickerError::InvalidCatalog(format!("duplicate id {}", item.id)));
            }
        }
        log::debug!("{} catalog: {} items", kind.as_str(), items.len());
        Ok(Self { kind, items })
    }

    /// Load a catalog from a JSON array of items
    pub fn from_json(kind: CatalogKind, json: &str) -> PickerResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)
            .map_err(|e| PickerError::InvalidCatalog(e.to_string()))?;
        Self::new(kind, items)
    }

    /// Built-in kaomoji set
    pub fn kaomoji() -> Self {
        Self::from_table(CatalogKind::Kaomoji, "k", KAOMOJI)
    }

    /// Built-in symbol set
    pub fn symbols() -> Self {
        Self::from_table(CatalogKind::Symbol, "s", SYMBOLS)
    }

    fn from_table(kind: CatalogKind, prefix: &str, table: &[(&str, &str, &str)]) -> Self {
        let items = table
            .iter()
            .enumerate()
            .map(|(i, (category, text, name))| {
                Item::new(format!("{}{}", prefix, i), *text, *category).with_name(*name)
            })
            .collect();
        Self { kind, items }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = ItemCatalog::new(
            CatalogKind::Kaomoji,
            vec![
                Item::new("1", "(^_^)", "Happy"),
                Item::new("2", "(T_T)", "Sad"),
                Item::new("3", "(^o^)", "Happy"),
            ],
        )
        .unwrap();

        assert_eq!(catalog.categories(), vec!["Happy", "Sad"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = ItemCatalog::new(
            CatalogKind::Symbol,
            vec![Item::new("a", "→", "Arrows"), Item::new("a", "←", "Arrows")],
        );
        assert_eq!(result, Err(PickerError::InvalidCatalog("duplicate id a".to_string())));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = ItemCatalog::new(CatalogKind::Symbol, vec![Item::new("", "→", "Arrows")]);
        assert!(matches!(result, Err(PickerError::InvalidCatalog(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "1", "text": "(^_^)", "category": "Happy", "name": "Smile"},
            {"id": "2", "text": "(T_T)", "category": "Sad"}
        ]"#;
        let catalog = ItemCatalog::from_json(CatalogKind::Kaomoji, json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("1").unwrap().label(), "Smile");
        assert_eq!(catalog.get("2").unwrap().label(), "(T_T)");
    }

    #[test]
    fn test_from_json_malformed() {
        let result = ItemCatalog::from_json(CatalogKind::Kaomoji, "{not json");
        assert!(matches!(result, Err(PickerError::InvalidCatalog(_))));
    }

    #[test]
    fn test_builtin_catalogs_have_unique_ids() {
        for catalog in [ItemCatalog::kaomoji(), ItemCatalog::symbols()] {
            assert!(!catalog.is_empty());
            let rebuilt = ItemCatalog::new(catalog.kind(), catalog.items().to_vec());
            assert!(rebuilt.is_ok());
        }
        assert_eq!(ItemCatalog::symbols().kind(), CatalogKind::Symbol);
    }
}
