use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::error::CatalogError;

/// Closed nutrient vocabulary for catalog records.
///
/// Catalog records may only use these keys; anything else is rejected at load
/// time so scoring never has to guess what a stray key means.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbohydrates,
    Fat,
    Fiber,
    Sugar,
    Sodium,
    Iron,
    Calcium,
    FolicAcid,
    Omega3,
    Zinc,
    Potassium,
    Magnesium,
    Choline,
    VitaminA,
    VitaminB6,
    VitaminB12,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
}

/// Per-serving nutrient quantities. Absent nutrients read as zero.
///
/// Backed by a `BTreeMap` so iteration order and serialized form are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientProfile(BTreeMap<Nutrient, f64>);

impl NutrientProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount of `nutrient` per serving; 0.0 when the record does not list it.
    pub fn amount(&self, nutrient: Nutrient) -> f64 {
        self.0.get(&nutrient).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, nutrient: Nutrient, amount: f64) {
        self.0.insert(nutrient, amount);
    }

    /// Element-wise accumulation. Exact sums, no rounding.
    pub fn add_profile(&mut self, other: &NutrientProfile) {
        for (nutrient, amount) in &other.0 {
            *self.0.entry(*nutrient).or_insert(0.0) += amount;
        }
    }

    /// Element-wise multiplication by `factor` (used for per-day averages).
    pub fn scaled(&self, factor: f64) -> NutrientProfile {
        NutrientProfile(
            self.0
                .iter()
                .map(|(nutrient, amount)| (*nutrient, amount * factor))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(n, a)| (*n, *a))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Nutrient, f64)> for NutrientProfile {
    fn from_iter<I: IntoIterator<Item = (Nutrient, f64)>>(iter: I) -> Self {
        NutrientProfile(iter.into_iter().collect())
    }
}

/// Closed food category set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Vegetables,
    Dairy,
    Grains,
    Fruits,
    Proteins,
    Lentils,
    DryFruits,
}

/// Diet tag carried by a food item, also used as a query filter.
///
/// The tags form a strict hierarchy: every vegan item is vegetarian, and a
/// non-vegetarian eater accepts everything.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum DietType {
    #[strum(serialize = "vegetarian")]
    #[serde(rename = "vegetarian")]
    Vegetarian,
    #[strum(serialize = "non-vegetarian")]
    #[serde(rename = "non-vegetarian")]
    NonVegetarian,
    #[strum(serialize = "vegan")]
    #[serde(rename = "vegan")]
    Vegan,
}

impl DietType {
    /// Whether a query for `self` admits an item tagged `item`.
    ///
    /// A vegan item satisfies a vegetarian query; the converse is false.
    pub fn admits(self, item: DietType) -> bool {
        match self {
            DietType::NonVegetarian => true,
            DietType::Vegetarian => matches!(item, DietType::Vegetarian | DietType::Vegan),
            DietType::Vegan => item == DietType::Vegan,
        }
    }
}

/// Pregnancy trimester, 1 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub fn number(self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }

    /// Trimester for a given week of pregnancy.
    ///
    /// Weeks 1-12 are the first trimester, 13-27 the second, 28 onward the
    /// third (40-week term).
    pub fn from_week(week: u32) -> Trimester {
        if week <= 12 {
            Trimester::First
        } else if week <= 27 {
            Trimester::Second
        } else {
            Trimester::Third
        }
    }
}

impl TryFrom<u8> for Trimester {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Trimester::First),
            2 => Ok(Trimester::Second),
            3 => Ok(Trimester::Third),
            other => Err(CatalogError::InvalidTrimester(other)),
        }
    }
}

impl From<Trimester> for u8 {
    fn from(value: Trimester) -> Self {
        value.number()
    }
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_nutrient_profile_defaults_to_zero() {
        let profile = NutrientProfile::new();
        assert_eq!(profile.amount(Nutrient::Iron), 0.0);
        assert!(profile.is_empty());
    }

    #[test]
    fn test_nutrient_profile_add() {
        let mut total = NutrientProfile::new();
        let a: NutrientProfile = [(Nutrient::Iron, 2.7), (Nutrient::Calories, 23.0)]
            .into_iter()
            .collect();
        let b: NutrientProfile = [(Nutrient::Iron, 3.3), (Nutrient::Protein, 9.0)]
            .into_iter()
            .collect();

        total.add_profile(&a);
        total.add_profile(&b);

        assert_eq!(total.amount(Nutrient::Iron), 6.0);
        assert_eq!(total.amount(Nutrient::Calories), 23.0);
        assert_eq!(total.amount(Nutrient::Protein), 9.0);
        assert_eq!(total.amount(Nutrient::Calcium), 0.0);
    }

    #[test]
    fn test_nutrient_profile_scaled() {
        let totals: NutrientProfile = [(Nutrient::Calories, 700.0), (Nutrient::Iron, 14.0)]
            .into_iter()
            .collect();
        let average = totals.scaled(1.0 / 7.0);
        assert_eq!(average.amount(Nutrient::Calories), 100.0);
        assert_eq!(average.amount(Nutrient::Iron), 2.0);
    }

    #[test]
    fn test_nutrient_vocabulary_round_trip() {
        assert_eq!(Nutrient::from_str("folic_acid").unwrap(), Nutrient::FolicAcid);
        assert_eq!(Nutrient::from_str("vitamin_b6").unwrap(), Nutrient::VitaminB6);
        assert_eq!(Nutrient::FolicAcid.as_ref(), "folic_acid");
        assert!(Nutrient::from_str("probiotics").is_err());
    }

    #[test]
    fn test_diet_admits_hierarchy() {
        assert!(DietType::NonVegetarian.admits(DietType::NonVegetarian));
        assert!(DietType::NonVegetarian.admits(DietType::Vegetarian));
        assert!(DietType::NonVegetarian.admits(DietType::Vegan));

        assert!(DietType::Vegetarian.admits(DietType::Vegetarian));
        assert!(DietType::Vegetarian.admits(DietType::Vegan));
        assert!(!DietType::Vegetarian.admits(DietType::NonVegetarian));

        assert!(DietType::Vegan.admits(DietType::Vegan));
        assert!(!DietType::Vegan.admits(DietType::Vegetarian));
        assert!(!DietType::Vegan.admits(DietType::NonVegetarian));
    }

    #[test]
    fn test_diet_parse_tags() {
        assert_eq!(
            DietType::from_str("non-vegetarian").unwrap(),
            DietType::NonVegetarian
        );
        assert_eq!(DietType::from_str("vegan").unwrap(), DietType::Vegan);
        assert!(DietType::from_str("pescatarian").is_err());
    }

    #[test]
    fn test_trimester_bounds() {
        assert_eq!(Trimester::try_from(1).unwrap(), Trimester::First);
        assert_eq!(Trimester::try_from(3).unwrap(), Trimester::Third);
        assert!(Trimester::try_from(0).is_err());
        assert!(Trimester::try_from(4).is_err());
    }

    #[test]
    fn test_trimester_from_week() {
        assert_eq!(Trimester::from_week(1), Trimester::First);
        assert_eq!(Trimester::from_week(12), Trimester::First);
        assert_eq!(Trimester::from_week(13), Trimester::Second);
        assert_eq!(Trimester::from_week(27), Trimester::Second);
        assert_eq!(Trimester::from_week(28), Trimester::Third);
        assert_eq!(Trimester::from_week(40), Trimester::Third);
    }
}
