use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("food record has an empty id")]
    EmptyId,

    #[error("food item {0} has an empty English name")]
    EmptyName(String),

    #[error("duplicate food id: {0}")]
    DuplicateId(String),

    #[error("food item {id}: negative amount for {nutrient}")]
    NegativeAmount {
        id: String,
        nutrient: crate::types::Nutrient,
    },

    #[error("food item {0} lists no suitable trimester")]
    NoTrimesters(String),

    #[error("trimester {0} outside allowed range 1-3")]
    InvalidTrimester(u8),
}
