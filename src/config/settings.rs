//! User settings for the budget planner
//!
//! Manages preferences that live outside the budget itself: the currency of a
//! fresh budget, log verbosity, and whether the CLI asks before resetting.

use serde::{Deserialize, Serialize};

use super::paths::PlannerPaths;
use crate::error::BudgetError;
use crate::models::Currency;

/// User settings for the budget planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency given to a new or reset budget
    #[serde(default, deserialize_with = "crate::models::currency::lenient::deserialize")]
    pub default_currency: Currency,

    /// Default log filter (e.g. "warn", "info", "budget_planner=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether `budget reset` prompts before discarding data
    #[serde(default = "default_confirm_reset")]
    pub confirm_reset: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_confirm_reset() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: Currency::default(),
            log_level: default_log_level(),
            confirm_reset: default_confirm_reset(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Nothing is written; the file is the user's to create
            Ok(Settings::default())
        }
    }
}
