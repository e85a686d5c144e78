use catalog::{DietType, FoodCatalog, FoodCategory, FoodItem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use strum::VariantArray;
use tracing::{info, trace, warn};

use crate::constraints::{MealSlot, SlotKind};
use crate::error::MealPlanningError;
use crate::nutrition;
use crate::plan::{MealAssignment, MealPlan, PlanWarning, RecommendationEntry};
use crate::query::{PlanQuery, MAX_PLAN_DAYS, MIN_PLAN_DAYS};
use crate::rotation::RotationState;
use crate::safety::{FilteredCatalog, SafetyFilter};
use crate::scoring;

/// Tunable generation parameters. The defaults come from the product rule
/// set; both the window and the slot table are configuration, not law.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of most recent slots within which an item may not repeat.
    pub cooldown_window: usize,
    /// Preferred food categories per meal position (a scoring bonus, never a
    /// hard filter).
    pub slot_preferences: BTreeMap<SlotKind, Vec<FoodCategory>>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            cooldown_window: 7,
            slot_preferences: SlotKind::ALL
                .iter()
                .map(|kind| (*kind, kind.default_preferred_categories().to_vec()))
                .collect(),
        }
    }
}

/// Distinct filter values a catalog snapshot supports, for external UIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailablePreferences {
    pub regions: Vec<String>,
    pub diet_types: Vec<String>,
    pub min_days: u32,
    pub max_days: u32,
}

/// Distinct regions, the diet vocabulary, and the supported day range for a
/// catalog snapshot.
pub fn available_preferences<C: FoodCatalog>(catalog: &C) -> AvailablePreferences {
    let mut regions: Vec<String> = catalog
        .list_all()
        .iter()
        .filter_map(|item| item.region.clone())
        .collect();
    regions.sort();
    regions.dedup();

    AvailablePreferences {
        regions,
        diet_types: DietType::VARIANTS
            .iter()
            .map(|diet| diet.as_ref().to_string())
            .collect(),
        min_days: MIN_PLAN_DAYS,
        max_days: MAX_PLAN_DAYS,
    }
}

struct SlotPick {
    food_id: String,
    category: FoodCategory,
    relaxed: bool,
}

/// Greedy, windowed meal plan generation over a day x slot grid.
///
/// Each call is a pure function of (catalog snapshot, query, seed): no I/O,
/// no shared state, bounded by days x 5 x catalog size. Deliberately not a
/// global optimizer, so every assignment stays explainable.
pub struct MealPlanner {
    config: PlannerConfig,
}

impl MealPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        MealPlanner { config }
    }

    /// Generate a full plan: safety filter, slot-by-slot selection, nutrition
    /// aggregation. All-or-nothing; a fatal error returns no partial plan.
    pub fn generate<C: FoodCatalog>(
        &self,
        catalog: &C,
        query: &PlanQuery,
    ) -> Result<MealPlan, MealPlanningError> {
        query.validate()?;

        let FilteredCatalog {
            eligible,
            fallback,
            mut warnings,
        } = SafetyFilter::apply(catalog.list_all(), query)?;

        let mut rng = StdRng::seed_from_u64(query.effective_seed());
        let mut rotation = RotationState::new(self.config.cooldown_window);
        let mut assignments =
            Vec::with_capacity(query.days as usize * SlotKind::ALL.len());
        let mut slot_index = 0usize;

        for day in 0..query.days {
            let mut categories_today = BTreeSet::new();
            for kind in SlotKind::ALL {
                let slot = MealSlot { day, kind };
                rotation.evict_stale(slot_index);

                let pick = self.fill_slot(
                    slot,
                    &eligible,
                    &fallback,
                    query,
                    &rotation,
                    &categories_today,
                    &mut rng,
                    &mut warnings,
                )?;

                trace!(%slot, food_id = %pick.food_id, relaxed = pick.relaxed, "slot assigned");
                categories_today.insert(pick.category);
                rotation.record(slot_index, pick.category, &pick.food_id);
                assignments.push(MealAssignment {
                    slot,
                    food_id: pick.food_id,
                    relaxed: pick.relaxed,
                });
                slot_index += 1;
            }
        }

        let items_by_id: HashMap<&str, &FoodItem> = eligible
            .iter()
            .chain(fallback.iter())
            .map(|item| (item.id.as_str(), item))
            .collect();
        let (daily_nutrition, plan_nutrition) =
            nutrition::aggregate(&assignments, &items_by_id, query.days);

        info!(
            days = query.days,
            assignments = assignments.len(),
            warnings = warnings.len(),
            "meal plan generated"
        );

        Ok(MealPlan {
            assignments,
            daily_nutrition,
            nutrition: plan_nutrition,
            warnings,
        })
    }

    /// Rank the eligible set by context-free score. Never pads with
    /// ineligible items: fewer than `n` eligible foods means a shorter list.
    pub fn recommend<C: FoodCatalog>(
        &self,
        catalog: &C,
        query: &PlanQuery,
        n: usize,
    ) -> Result<Vec<RecommendationEntry>, MealPlanningError> {
        query.validate()?;

        let FilteredCatalog { eligible, .. } = SafetyFilter::apply(catalog.list_all(), query)?;

        let mut scored: Vec<(scoring::ScoreBreakdown, &FoodItem)> = eligible
            .iter()
            .map(|item| {
                (
                    scoring::score(item, query.trimester, query.diet, query.region.as_deref()),
                    item,
                )
            })
            .collect();

        // Score descending, id ascending: a total, reproducible order.
        scored.sort_by(|a, b| {
            b.0.total()
                .total_cmp(&a.0.total())
                .then_with(|| a.1.id.cmp(&b.1.id))
        });

        Ok(scored
            .into_iter()
            .take(n)
            .map(|(breakdown, item)| RecommendationEntry {
                food_id: item.id.clone(),
                score: breakdown.total(),
                reason: breakdown.reason().to_string(),
            })
            .collect())
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_slot(
        &self,
        slot: MealSlot,
        eligible: &[FoodItem],
        fallback: &[FoodItem],
        query: &PlanQuery,
        rotation: &RotationState,
        categories_today: &BTreeSet<FoodCategory>,
        rng: &mut StdRng,
        warnings: &mut Vec<PlanWarning>,
    ) -> Result<SlotPick, MealPlanningError> {
        let preferred = self
            .config
            .slot_preferences
            .get(&slot.kind)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        // Preferred path: eligible pool with the cooldown window respected.
        let fresh: Vec<&FoodItem> = eligible
            .iter()
            .filter(|item| !rotation.in_cooldown(item.category, &item.id))
            .collect();
        if let Some(item) = pick_best(&fresh, query, preferred, categories_today, rotation, rng) {
            return Ok(SlotPick {
                food_id: item.id.clone(),
                category: item.category,
                relaxed: false,
            });
        }

        // Cooldown exhausted the pool: allow repeats before touching the
        // flagged reserve.
        let all_eligible: Vec<&FoodItem> = eligible.iter().collect();
        if let Some(item) =
            pick_best(&all_eligible, query, preferred, categories_today, rotation, rng)
        {
            warn!(%slot, "cooldown relaxed to fill slot");
            warnings.push(PlanWarning::CooldownRelaxed { slot });
            return Ok(SlotPick {
                food_id: item.id.clone(),
                category: item.category,
                relaxed: true,
            });
        }

        // Eligible pool is empty outright: draw from the health-flagged
        // reserve, still preferring items outside the window.
        let reserve_fresh: Vec<&FoodItem> = fallback
            .iter()
            .filter(|item| !rotation.in_cooldown(item.category, &item.id))
            .collect();
        let all_reserve: Vec<&FoodItem> = fallback.iter().collect();
        let picked = pick_best(&reserve_fresh, query, preferred, categories_today, rotation, rng)
            .or_else(|| pick_best(&all_reserve, query, preferred, categories_today, rotation, rng));

        if let Some(item) = picked {
            warn!(%slot, food_id = %item.id, "slot filled from health-flagged fallback pool");
            warnings.push(PlanWarning::HealthFallback {
                slot,
                food_id: item.id.clone(),
            });
            return Ok(SlotPick {
                food_id: item.id.clone(),
                category: item.category,
                relaxed: true,
            });
        }

        Err(MealPlanningError::InsufficientCatalog { slot })
    }
}

impl Default for MealPlanner {
    fn default() -> Self {
        MealPlanner::new(PlannerConfig::default())
    }
}

/// Highest score wins; ties go to the less-used item, then the lower id. A
/// residual tie (only possible with duplicate ids) falls to the seeded
/// generator, so a given seed always reproduces the same plan.
fn pick_best<'a>(
    candidates: &[&'a FoodItem],
    query: &PlanQuery,
    preferred: &[FoodCategory],
    categories_today: &BTreeSet<FoodCategory>,
    rotation: &RotationState,
    rng: &mut StdRng,
) -> Option<&'a FoodItem> {
    if candidates.is_empty() {
        return None;
    }

    let mut scored: Vec<(f32, u32, &'a FoodItem)> = candidates
        .iter()
        .map(|item| {
            let breakdown = scoring::score_for_slot(
                item,
                query.trimester,
                query.diet,
                query.region.as_deref(),
                preferred,
                categories_today,
            );
            (breakdown.total(), rotation.used_count(&item.id), *item)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.0.total_cmp(&a.0)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.id.cmp(&b.2.id))
    });

    let (best_score, best_used, best_item) = (scored[0].0, scored[0].1, scored[0].2);
    let tied = scored
        .iter()
        .take_while(|(score, used, item)| {
            score.total_cmp(&best_score).is_eq() && *used == best_used && item.id == best_item.id
        })
        .count();

    let index = if tied > 1 { rng.random_range(0..tied) } else { 0 };
    Some(scored[index].2)
}
