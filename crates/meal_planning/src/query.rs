use catalog::{DietType, Trimester};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::MealPlanningError;

/// Seed used when a query carries none, so unseeded generation is still
/// reproducible run to run.
pub const DEFAULT_SEED: u64 = 0;

pub const MIN_PLAN_DAYS: u32 = 1;
pub const MAX_PLAN_DAYS: u32 = 30;

/// One plan or recommendation request. Created per call, discarded after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanQuery {
    pub days: u32,
    pub trimester: Trimester,
    /// None means any diet is acceptable.
    #[serde(default)]
    pub diet: Option<DietType>,
    /// None means no regional preference.
    #[serde(default)]
    pub region: Option<String>,
    /// Lowercase condition tags matched against item precaution tags.
    #[serde(default)]
    pub health_conditions: BTreeSet<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PlanQuery {
    pub fn new(days: u32, trimester: Trimester) -> Self {
        PlanQuery {
            days,
            trimester,
            diet: None,
            region: None,
            health_conditions: BTreeSet::new(),
            seed: None,
        }
    }

    /// Parse a trimester number from an external caller, rejecting anything
    /// outside 1-3.
    pub fn parse_trimester(value: u8) -> Result<Trimester, MealPlanningError> {
        Trimester::try_from(value).map_err(|_| MealPlanningError::InvalidTrimester(value))
    }

    /// Parse a diet tag from an external caller. "any" (or empty) means no
    /// filter; anything else must be a known tag.
    pub fn parse_diet(value: &str) -> Result<Option<DietType>, MealPlanningError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            return Ok(None);
        }
        DietType::from_str(trimmed)
            .map(Some)
            .map_err(|_| MealPlanningError::UnknownDietType(trimmed.to_string()))
    }

    pub fn with_diet(mut self, diet: DietType) -> Self {
        self.diet = Some(diet);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_health_condition(mut self, condition: impl AsRef<str>) -> Self {
        self.health_conditions
            .insert(condition.as_ref().trim().to_lowercase());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), MealPlanningError> {
        if !(MIN_PLAN_DAYS..=MAX_PLAN_DAYS).contains(&self.days) {
            return Err(MealPlanningError::InvalidDayCount(self.days));
        }
        Ok(())
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}
