use serde::{Deserialize, Serialize};

use crate::constraints::MealSlot;
use crate::nutrition::{DailyNutrition, PlanNutrition};

/// One chosen food for one meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAssignment {
    pub slot: MealSlot,
    pub food_id: String,
    /// True when the slot was only fillable by relaxing a soft constraint.
    #[serde(default)]
    pub relaxed: bool,
}

/// Non-fatal constraint relaxation recorded during generation. Warnings ride
/// along in the successful result; they never abort a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// No eligible item matched the requested region, so the region filter
    /// was dropped for the whole plan.
    RegionRelaxed { region: String },
    /// The cooldown window left no candidate; repeats were allowed for this
    /// slot.
    CooldownRelaxed { slot: MealSlot },
    /// The slot was filled from the health-flagged fallback pool.
    HealthFallback { slot: MealSlot, food_id: String },
}

impl PlanWarning {
    /// Slot the relaxation applied to, when it was slot-local.
    pub fn slot(&self) -> Option<MealSlot> {
        match self {
            PlanWarning::RegionRelaxed { .. } => None,
            PlanWarning::CooldownRelaxed { slot } | PlanWarning::HealthFallback { slot, .. } => {
                Some(*slot)
            }
        }
    }

    pub fn reason(&self) -> String {
        match self {
            PlanWarning::RegionRelaxed { region } => {
                format!("no eligible food matches region {region}; region preference dropped")
            }
            PlanWarning::CooldownRelaxed { slot } => {
                format!("variety window exhausted the eligible pool at {slot}; repeats allowed")
            }
            PlanWarning::HealthFallback { slot, food_id } => {
                format!("{slot} filled with health-flagged item {food_id}; review precautions")
            }
        }
    }
}

/// One ranked recommendation. The reason names the scoring term that
/// contributed most, so identical inputs explain themselves identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub food_id: String,
    pub score: f32,
    pub reason: String,
}

/// A fully generated plan: days x 5 assignments in generation order, exact
/// nutrition sums, and any relaxations that were needed along the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub assignments: Vec<MealAssignment>,
    pub daily_nutrition: Vec<DailyNutrition>,
    pub nutrition: PlanNutrition,
    pub warnings: Vec<PlanWarning>,
}

impl MealPlan {
    pub fn days(&self) -> u32 {
        self.daily_nutrition.len() as u32
    }

    pub fn assignment(&self, slot: MealSlot) -> Option<&MealAssignment> {
        self.assignments.iter().find(|a| a.slot == slot)
    }
}
