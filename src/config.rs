// ⚙️ Configuration - Defaults as Data
// Salary and birth-year defaults for Person, optionally loaded from JSON

use crate::entities::person::BIRTH_YEAR_FLOOR;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// PERSON CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonConfig {
    /// Salary before bonus
    #[serde(default = "default_base_salary")]
    pub base_salary: f64,

    /// Bonus as a percentage of base salary
    #[serde(default = "default_bonus_percent")]
    pub bonus_percent: f64,

    /// Birth years must be strictly greater than this; values below
    /// `BIRTH_YEAR_FLOOR` are raised to it
    #[serde(default = "default_min_birth_year")]
    pub min_birth_year_exclusive: i32,
}

fn default_base_salary() -> f64 {
    50_000.0
}

fn default_bonus_percent() -> f64 {
    10.0
}

fn default_min_birth_year() -> i32 {
    BIRTH_YEAR_FLOOR
}

impl PersonConfig {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        Self::from_json_str(&content)
    }

    /// Parse config from a JSON string; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PersonConfig =
            serde_json::from_str(json).context("Failed to parse person config JSON")?;

        tracing::debug!(?config, "loaded person config");
        Ok(config)
    }
}

impl Default for PersonConfig {
    fn default() -> Self {
        PersonConfig {
            base_salary: default_base_salary(),
            bonus_percent: default_bonus_percent(),
            min_birth_year_exclusive: default_min_birth_year(),
        }
    }
}
