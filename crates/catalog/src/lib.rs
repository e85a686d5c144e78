//! Read-only food reference data for maternal nutrition planning.
//!
//! The catalog is loaded once, validated field-by-field against closed
//! vocabularies, and handed to the planning engine as an immutable snapshot.

pub mod error;
pub mod food;
pub mod store;
pub mod types;

pub use error::CatalogError;
pub use food::FoodItem;
pub use store::{FoodCatalog, InMemoryCatalog};
pub use types::{DietType, FoodCategory, Nutrient, NutrientProfile, Trimester};
