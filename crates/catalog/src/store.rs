use std::collections::HashSet;

use crate::error::CatalogError;
use crate::food::FoodItem;

/// Read-only view over the food item set.
///
/// The planner only ever lists items; mutation is not part of the contract.
pub trait FoodCatalog {
    fn list_all(&self) -> &[FoodItem];
}

/// Owned, validated snapshot of the catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<FoodItem>,
}

impl InMemoryCatalog {
    /// Validate every record and build a snapshot. Precaution tags are
    /// normalized to lowercase so condition matching is a set operation.
    pub fn new(mut items: Vec<FoodItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &mut items {
            item.validate()?;
            if !seen.insert(item.id.clone()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            for tag in &mut item.precaution_tags {
                *tag = tag.trim().to_lowercase();
            }
        }
        Ok(InMemoryCatalog { items })
    }

    /// Load a catalog from a JSON array of food records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<FoodItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FoodCatalog for InMemoryCatalog {
    fn list_all(&self) -> &[FoodItem] {
        &self.items
    }
}
