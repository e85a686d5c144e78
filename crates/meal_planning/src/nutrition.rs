use catalog::{FoodItem, NutrientProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::plan::MealAssignment;

/// Nutrient totals for one plan day: the exact sum of the day's assigned
/// items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrition {
    pub day: u32,
    pub totals: NutrientProfile,
}

/// Plan-level totals plus the per-day average. No rounding here; display
/// rounding belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanNutrition {
    pub totals: NutrientProfile,
    pub daily_average: NutrientProfile,
}

/// Sum assigned items into per-day and plan-wide totals.
///
/// `items_by_id` must cover every assigned id; the planner builds it from the
/// same pools the assignments were drawn from.
pub fn aggregate(
    assignments: &[MealAssignment],
    items_by_id: &HashMap<&str, &FoodItem>,
    days: u32,
) -> (Vec<DailyNutrition>, PlanNutrition) {
    let mut daily: Vec<DailyNutrition> = (0..days)
        .map(|day| DailyNutrition {
            day,
            totals: NutrientProfile::new(),
        })
        .collect();

    for assignment in assignments {
        debug_assert!(items_by_id.contains_key(assignment.food_id.as_str()));
        if let Some(item) = items_by_id.get(assignment.food_id.as_str()) {
            daily[assignment.slot.day as usize]
                .totals
                .add_profile(&item.nutrients);
        }
    }

    let mut totals = NutrientProfile::new();
    for day in &daily {
        totals.add_profile(&day.totals);
    }
    let daily_average = totals.scaled(1.0 / days as f64);

    (daily, PlanNutrition {
        totals,
        daily_average,
    })
}
