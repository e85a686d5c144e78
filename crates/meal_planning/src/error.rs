use catalog::{CatalogError, DietType, Trimester};
use thiserror::Error;

use crate::constraints::MealSlot;
use crate::query::{MAX_PLAN_DAYS, MIN_PLAN_DAYS};

#[derive(Error, Debug)]
pub enum MealPlanningError {
    #[error("day count {0} outside allowed range {MIN_PLAN_DAYS}-{MAX_PLAN_DAYS}")]
    InvalidDayCount(u32),

    #[error("trimester {0} outside allowed range 1-3")]
    InvalidTrimester(u8),

    #[error("unknown diet type: {0}")]
    UnknownDietType(String),

    #[error(
        "no food satisfies trimester {trimester} with diet {}",
        .diet.as_ref().map_or("any", |d| d.as_ref())
    )]
    EmptyCatalog {
        trimester: Trimester,
        diet: Option<DietType>,
    },

    #[error("no food available for {slot} even after relaxing constraints")]
    InsufficientCatalog { slot: MealSlot },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
