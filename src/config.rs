use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub planner: PlannerSettings,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path to the JSON food catalog.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "data/catalog.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerSettings {
    /// Number of most recent slots within which a food may not repeat.
    #[serde(default = "default_cooldown_window")]
    pub cooldown_window: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            cooldown_window: default_cooldown_window(),
        }
    }
}

fn default_cooldown_window() -> usize {
    7
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from an optional TOML file plus `POSHAN_`
    /// environment overrides (e.g. `POSHAN_PLANNER__COOLDOWN_WINDOW=10`).
    pub fn load(path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(File::with_name(&path));
            }
            None => {
                builder = builder.add_source(File::with_name("poshan").required(false));
            }
        }

        builder = builder.add_source(Environment::with_prefix("POSHAN").separator("__"));

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.path.trim().is_empty() {
            return Err("catalog.path must not be empty".to_string());
        }
        Ok(())
    }
}
