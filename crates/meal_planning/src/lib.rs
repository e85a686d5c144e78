//! Selection-and-scheduling engine for maternal nutrition.
//!
//! The pipeline runs in a fixed order for every request: safety filtering
//! (hard trimester/diet rules, soft health and region narrowing), suitability
//! scoring, windowed slot-by-slot selection with seeded tie-breaking, and
//! exact nutrition aggregation. Each call is a pure function of the catalog
//! snapshot, the query, and the seed.

pub mod algorithm;
pub mod constraints;
pub mod error;
pub mod nutrition;
pub mod plan;
pub mod query;
pub mod rotation;
pub mod safety;
pub mod scoring;

pub use algorithm::{available_preferences, AvailablePreferences, MealPlanner, PlannerConfig};
pub use constraints::{MealSlot, SlotKind};
pub use error::MealPlanningError;
pub use nutrition::{DailyNutrition, PlanNutrition};
pub use plan::{MealAssignment, MealPlan, PlanWarning, RecommendationEntry};
pub use query::{PlanQuery, DEFAULT_SEED, MAX_PLAN_DAYS, MIN_PLAN_DAYS};
pub use rotation::RotationState;
pub use safety::{FilteredCatalog, SafetyFilter};
