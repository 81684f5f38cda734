//! Application configuration
//!
//! Loaded from TOML with per-field defaults, so an empty file (or no file at
//! all) is a valid configuration. Resolution order:
//!
//! 1. An explicit path (`--config`)
//! 2. `<config dir>/rebalance/config.toml` (e.g. `~/.config/rebalance/config.toml`)
//! 3. Built-in defaults
//!
//! A few values can then be overridden from the environment:
//!
//! - `REBALANCE_FOOD_BASE_URL`: food database base URL
//! - `REBALANCE_CACHE_CAPACITY`: search cache size
//! - `REBALANCE_AI_MODEL`: food-recognition model name
//! - `REBALANCE_AI_API_KEY`: API key for the model (environment only)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::DailyGoals;
use crate::streak::DEFAULT_LOOKBACK_DAYS;

pub const ENV_FOOD_BASE_URL: &str = "REBALANCE_FOOD_BASE_URL";
pub const ENV_CACHE_CAPACITY: &str = "REBALANCE_CACHE_CAPACITY";
pub const ENV_AI_MODEL: &str = "REBALANCE_AI_MODEL";
pub const ENV_AI_API_KEY: &str = "REBALANCE_AI_API_KEY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub food: FoodConfig,
    pub ai: AiConfig,
    pub insights: InsightConfig,
    pub streak: StreakConfig,
    pub goals: DailyGoals,
}

/// Food database settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodConfig {
    pub base_url: String,
    pub user_agent: String,
    pub search_page_size: u32,
    /// Number of distinct queries kept in the search cache
    pub cache_capacity: usize,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            base_url: "https://world.openfoodfacts.org".to_string(),
            user_agent: "Rebalance - Nutrition Tracker - 1.0".to_string(),
            search_page_size: 15,
            cache_capacity: 50,
        }
    }
}

/// Food-recognition model settings
///
/// The model client lives outside this crate; these are the values it is
/// configured with, resolved the same way as everything else here.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub model: String,
    pub timeout_secs: u64,
    /// Only ever set from the environment
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-flash-latest".to_string(),
            timeout_secs: 15,
            api_key: None,
        }
    }
}

impl AiConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }

    /// The API key, or an error naming the variable to set
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::NotFound(format!("{} is not set", ENV_AI_API_KEY)))
    }
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub memo_capacity: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self { memo_capacity: 32 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakConfig {
    pub lookback_days: u32,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

/// Default user config location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rebalance").join("config.toml"))
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a file that must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Resolve the configuration and apply environment overrides
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let mut config = match override_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    tracing::debug!("No config file, using defaults");
                    Self::default()
                }
            },
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process env)
    ///
    /// Empty values are ignored. An unparseable cache capacity is logged and
    /// skipped.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_FOOD_BASE_URL) {
            self.food.base_url = url;
        }
        if let Some(raw) = get(ENV_CACHE_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => self.food.cache_capacity = capacity,
                _ => tracing::warn!(value = %raw, "Ignoring invalid {}", ENV_CACHE_CAPACITY),
            }
        }
        if let Some(model) = get(ENV_AI_MODEL) {
            self.ai.model = model;
        }
        if let Some(key) = get(ENV_AI_API_KEY) {
            self.ai.api_key = Some(key);
        }
    }
}
