//! User settings for the expense tracker
//!
//! Stored as `config.json` in the data directory. Every field has a default
//! so a partial or missing file still yields usable settings.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in console output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Fraction of a monthly budget at which the near-budget warning fires
    #[serde(default = "default_near_budget_threshold")]
    pub near_budget_threshold: f64,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_near_budget_threshold() -> f64 {
    0.9
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            near_budget_threshold: default_near_budget_threshold(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), ExpenseError> {
        if !(self.near_budget_threshold > 0.0 && self.near_budget_threshold <= 1.0) {
            return Err(ExpenseError::Config(format!(
                "near_budget_threshold must be in (0, 1], got {}",
                self.near_budget_threshold
            )));
        }
        Ok(())
    }
}
