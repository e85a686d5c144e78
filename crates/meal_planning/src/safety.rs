use catalog::FoodItem;
use tracing::debug;

use crate::constraints::HARD_RULES;
use crate::error::MealPlanningError;
use crate::plan::PlanWarning;
use crate::query::PlanQuery;

/// Result of the safety pipeline: the preferred pool, the health-flagged
/// reserve, and any soft-constraint relaxation applied while narrowing.
#[derive(Debug, Clone)]
pub struct FilteredCatalog {
    /// Items passing every hard rule with no health-condition overlap.
    pub eligible: Vec<FoodItem>,
    /// Health-flagged items, held back for slot-filling only when the
    /// eligible pool runs dry.
    pub fallback: Vec<FoodItem>,
    pub warnings: Vec<PlanWarning>,
}

/// Narrows the catalog for one query. Hard rules first (trimester, diet),
/// then the soft health partition, then soft region narrowing.
pub struct SafetyFilter;

impl SafetyFilter {
    pub fn apply(
        items: &[FoodItem],
        query: &PlanQuery,
    ) -> Result<FilteredCatalog, MealPlanningError> {
        let admissible: Vec<FoodItem> = items
            .iter()
            .filter(|item| HARD_RULES.iter().all(|rule| rule.admits(item, query)))
            .cloned()
            .collect();

        // Hard rules have no fallback: nothing left means the whole call fails.
        if admissible.is_empty() {
            return Err(MealPlanningError::EmptyCatalog {
                trimester: query.trimester,
                diet: query.diet,
            });
        }

        let (eligible, fallback): (Vec<FoodItem>, Vec<FoodItem>) = admissible
            .into_iter()
            .partition(|item| !Self::health_flagged(item, query));

        let mut warnings = Vec::new();
        let eligible = match query.region.as_deref() {
            Some(region) => {
                let matching: Vec<FoodItem> = eligible
                    .iter()
                    .filter(|item| item.region_matches(region))
                    .cloned()
                    .collect();
                if matching.is_empty() {
                    // Region preference degrades gracefully; it never empties
                    // the pool on its own.
                    warnings.push(PlanWarning::RegionRelaxed {
                        region: region.to_string(),
                    });
                    eligible
                } else {
                    matching
                }
            }
            None => eligible,
        };

        debug!(
            eligible = eligible.len(),
            fallback = fallback.len(),
            "safety filter narrowed catalog"
        );

        Ok(FilteredCatalog {
            eligible,
            fallback,
            warnings,
        })
    }

    fn health_flagged(item: &FoodItem, query: &PlanQuery) -> bool {
        item.flagged_for(query.health_conditions.iter().map(String::as_str))
    }
}
