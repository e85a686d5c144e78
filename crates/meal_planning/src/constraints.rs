use catalog::{FoodCategory, FoodItem};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::query::PlanQuery;

/// The five fixed meal positions of a day, in serving order.
///
/// The kind is part of a slot's identity, not a free label.
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
pub enum SlotKind {
    Breakfast,
    MidMorning,
    Lunch,
    Evening,
    Dinner,
}

impl SlotKind {
    /// Generation order: every day walks the slots in this order.
    pub const ALL: [SlotKind; 5] = [
        SlotKind::Breakfast,
        SlotKind::MidMorning,
        SlotKind::Lunch,
        SlotKind::Evening,
        SlotKind::Dinner,
    ];

    /// Default category rotation per meal position. Lighter categories for
    /// breakfast and the snack slots, denser ones for lunch and dinner. A
    /// scoring preference, never a hard filter.
    pub fn default_preferred_categories(self) -> &'static [FoodCategory] {
        use FoodCategory::*;
        match self {
            SlotKind::Breakfast => &[Grains, Dairy, Fruits, Proteins],
            SlotKind::MidMorning => &[Fruits, DryFruits, Dairy],
            SlotKind::Lunch => &[Grains, Vegetables, Proteins, Lentils, Dairy],
            SlotKind::Evening => &[Fruits, DryFruits, Dairy, Vegetables],
            SlotKind::Dinner => &[Grains, Vegetables, Lentils, Dairy],
        }
    }
}

/// A specific meal position on a specific plan day (zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MealSlot {
    pub day: u32,
    pub kind: SlotKind,
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} {}", self.day + 1, self.kind)
    }
}

/// A named hard admission rule. Items failing any hard rule are dropped
/// outright; there is no fallback past this pipeline.
pub trait HardRule {
    fn name(&self) -> &'static str;
    fn admits(&self, item: &FoodItem, query: &PlanQuery) -> bool;
}

/// Item must be suitable for the queried trimester.
pub struct TrimesterRule;

impl HardRule for TrimesterRule {
    fn name(&self) -> &'static str {
        "trimester"
    }

    fn admits(&self, item: &FoodItem, query: &PlanQuery) -> bool {
        item.trimesters.contains(&query.trimester)
    }
}

/// Item diet tag must be admitted by the queried diet, if one is set.
pub struct DietRule;

impl HardRule for DietRule {
    fn name(&self) -> &'static str {
        "diet"
    }

    fn admits(&self, item: &FoodItem, query: &PlanQuery) -> bool {
        query.diet.is_none_or(|diet| diet.admits(item.diet))
    }
}

/// Fixed pipeline order; new rules are added here as data, not as branches
/// inside the filter.
pub static HARD_RULES: [&(dyn HardRule + Sync); 2] = [&TrimesterRule, &DietRule];
