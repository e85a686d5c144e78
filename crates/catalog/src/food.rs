use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::CatalogError;
use crate::types::{DietType, FoodCategory, NutrientProfile, Trimester};

/// One food item from the reference catalog. Immutable once loaded.
///
/// `benefits` and `preparation_tips` are display text carried through
/// untouched; selection logic never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FoodItem {
    pub id: String,
    pub name_english: String,
    #[serde(default)]
    pub name_hindi: Option<String>,
    pub category: FoodCategory,
    #[serde(default)]
    pub nutrients: NutrientProfile,
    pub trimesters: BTreeSet<Trimester>,
    pub diet: DietType,
    #[serde(default)]
    pub region: Option<String>,
    /// Health conditions under which this item must be excluded, lowercase.
    #[serde(default)]
    pub precaution_tags: Vec<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub preparation_tips: Option<String>,
}

impl FoodItem {
    /// Reject malformed records before they reach scoring or selection.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if self.name_english.trim().is_empty() {
            return Err(CatalogError::EmptyName(self.id.clone()));
        }
        if self.trimesters.is_empty() {
            return Err(CatalogError::NoTrimesters(self.id.clone()));
        }
        for (nutrient, amount) in self.nutrients.iter() {
            if amount < 0.0 {
                return Err(CatalogError::NegativeAmount {
                    id: self.id.clone(),
                    nutrient,
                });
            }
        }
        Ok(())
    }

    /// True when this item must be excluded for any of `conditions`.
    pub fn flagged_for<'a, I>(&self, conditions: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        conditions.into_iter().any(|condition| {
            self.precaution_tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(condition))
        })
    }

    /// Case-insensitive region comparison.
    pub fn region_matches(&self, region: &str) -> bool {
        self.region
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case(region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Nutrient;

    fn spinach() -> FoodItem {
        FoodItem {
            id: "spinach".to_string(),
            name_english: "Spinach".to_string(),
            name_hindi: Some("Palak".to_string()),
            category: FoodCategory::Vegetables,
            nutrients: [(Nutrient::Iron, 2.7), (Nutrient::FolicAcid, 194.0)]
                .into_iter()
                .collect(),
            trimesters: [Trimester::First, Trimester::Second, Trimester::Third]
                .into_iter()
                .collect(),
            diet: DietType::Vegan,
            region: Some("All India".to_string()),
            precaution_tags: vec!["kidney-stones".to_string()],
            benefits: None,
            preparation_tips: None,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_item() {
        assert!(spinach().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let mut item = spinach();
        item.id = "  ".to_string();
        assert!(matches!(item.validate(), Err(CatalogError::EmptyId)));
    }

    #[test]
    fn test_validate_rejects_empty_trimesters() {
        let mut item = spinach();
        item.trimesters.clear();
        assert!(matches!(item.validate(), Err(CatalogError::NoTrimesters(_))));
    }

    #[test]
    fn test_validate_rejects_negative_nutrient() {
        let mut item = spinach();
        item.nutrients.set(Nutrient::Iron, -1.0);
        assert!(matches!(
            item.validate(),
            Err(CatalogError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_flagged_for_matches_case_insensitively() {
        let item = spinach();
        assert!(item.flagged_for(["Kidney-Stones"]));
        assert!(!item.flagged_for(["diabetes"]));
        assert!(!item.flagged_for([]));
    }

    #[test]
    fn test_region_matches() {
        let item = spinach();
        assert!(item.region_matches("all india"));
        assert!(!item.region_matches("South India"));
    }

    #[test]
    fn test_record_rejects_unknown_nutrient_key() {
        let json = r#"{
            "id": "mystery",
            "name_english": "Mystery",
            "category": "fruits",
            "nutrients": {"probiotics": 1.0},
            "trimesters": [1],
            "diet": "vegan"
        }"#;
        assert!(serde_json::from_str::<FoodItem>(json).is_err());
    }

    #[test]
    fn test_record_rejects_unknown_category() {
        let json = r#"{
            "id": "mystery",
            "name_english": "Mystery",
            "category": "beverages",
            "trimesters": [1],
            "diet": "vegan"
        }"#;
        assert!(serde_json::from_str::<FoodItem>(json).is_err());
    }

    #[test]
    fn test_record_rejects_out_of_range_trimester() {
        let json = r#"{
            "id": "mystery",
            "name_english": "Mystery",
            "category": "fruits",
            "trimesters": [4],
            "diet": "vegan"
        }"#;
        assert!(serde_json::from_str::<FoodItem>(json).is_err());
    }
}
