use catalog::{DietType, FoodCategory, FoodItem, Nutrient, Trimester};
use std::collections::BTreeSet;

/// Per-serving targets for the nutrients that matter most in each trimester.
/// Folic acid dominates early pregnancy; iron, calcium and fiber take over in
/// the later trimesters.
pub fn priority_nutrients(trimester: Trimester) -> &'static [(Nutrient, f64)] {
    match trimester {
        Trimester::First => &[
            (Nutrient::FolicAcid, 600.0),
            (Nutrient::VitaminB6, 1.9),
            (Nutrient::Iron, 27.0),
            (Nutrient::Calcium, 1000.0),
            (Nutrient::Protein, 60.0),
            (Nutrient::Calories, 1800.0),
        ],
        Trimester::Second => &[
            (Nutrient::Calcium, 1000.0),
            (Nutrient::VitaminD, 600.0),
            (Nutrient::Omega3, 200.0),
            (Nutrient::Protein, 70.0),
            (Nutrient::Iron, 27.0),
            (Nutrient::Calories, 2200.0),
        ],
        Trimester::Third => &[
            (Nutrient::Iron, 27.0),
            (Nutrient::Protein, 75.0),
            (Nutrient::VitaminK, 90.0),
            (Nutrient::Fiber, 28.0),
            (Nutrient::Calcium, 1000.0),
            (Nutrient::Calories, 2400.0),
        ],
    }
}

/// Cap on each nutrient's contribution so a single dense item cannot dominate
/// unbounded.
pub const NUTRIENT_CAP: f64 = 1.0;

pub const DIET_MATCH_BONUS: f32 = 0.1;
pub const REGION_MATCH_BONUS: f32 = 0.1;
pub const SLOT_CATEGORY_BONUS: f32 = 0.15;
pub const CATEGORY_COVERAGE_BONUS: f32 = 0.1;

/// Independently documented scoring terms, kept separate so ties and reasons
/// are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    /// Mean capped ratio of item nutrients to trimester targets, 0..1.
    pub nutrient_density: f32,
    /// Exact diet match and/or region match bonuses.
    pub preference_bonus: f32,
    /// Item category sits in the slot kind's preferred rotation.
    pub slot_bonus: f32,
    /// Item category not yet served on the current day.
    pub coverage_bonus: f32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f32 {
        self.nutrient_density + self.preference_bonus + self.slot_bonus + self.coverage_bonus
    }

    /// Human-readable name of the term that contributed most.
    pub fn reason(&self) -> &'static str {
        let slot_fit = self.slot_bonus + self.coverage_bonus;
        if self.nutrient_density >= self.preference_bonus && self.nutrient_density >= slot_fit {
            "rich in priority nutrients for this trimester"
        } else if self.preference_bonus >= slot_fit {
            "matches diet and region preferences"
        } else {
            "balances the day's food groups"
        }
    }
}

/// Mean capped nutrient-to-target ratio over the trimester's priority table.
pub fn nutrient_density(item: &FoodItem, trimester: Trimester) -> f32 {
    let table = priority_nutrients(trimester);
    let sum: f64 = table
        .iter()
        .map(|(nutrient, target)| (item.nutrients.amount(*nutrient) / target).min(NUTRIENT_CAP))
        .sum();
    (sum / table.len() as f64) as f32
}

/// Context-free suitability score, used directly by the recommendation path.
/// Deterministic for a given (item, trimester, diet, region).
pub fn score(
    item: &FoodItem,
    trimester: Trimester,
    diet: Option<DietType>,
    region: Option<&str>,
) -> ScoreBreakdown {
    let mut preference_bonus = 0.0;
    // Exact tag match, not mere compatibility: a vegan item under a
    // vegetarian query passes the filter but earns no bonus.
    if diet == Some(item.diet) {
        preference_bonus += DIET_MATCH_BONUS;
    }
    if let Some(region) = region {
        if item.region_matches(region) {
            preference_bonus += REGION_MATCH_BONUS;
        }
    }

    ScoreBreakdown {
        nutrient_density: nutrient_density(item, trimester),
        preference_bonus,
        slot_bonus: 0.0,
        coverage_bonus: 0.0,
    }
}

/// Slot-contextual score: the context-free score plus the slot rotation bonus
/// and the day's category-coverage bonus.
pub fn score_for_slot(
    item: &FoodItem,
    trimester: Trimester,
    diet: Option<DietType>,
    region: Option<&str>,
    preferred: &[FoodCategory],
    categories_today: &BTreeSet<FoodCategory>,
) -> ScoreBreakdown {
    let mut breakdown = score(item, trimester, diet, region);
    if preferred.contains(&item.category) {
        breakdown.slot_bonus = SLOT_CATEGORY_BONUS;
    }
    if !categories_today.contains(&item.category) {
        breakdown.coverage_bonus = CATEGORY_COVERAGE_BONUS;
    }
    breakdown
}
