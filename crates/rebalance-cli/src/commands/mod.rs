//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `targets` - Target calculation from biometrics
//! - `insight` - Daily insight classification
//! - `progress` - Streak and level commands
//! - `day` - Day log summary (totals, insight, streak, week)
//! - `food` - Food search over a saved catalog
//! - `parse_ai` - Model reply parsing

pub mod day;
pub mod food;
pub mod insight;
pub mod parse_ai;
pub mod progress;
pub mod targets;

// Re-export command functions for main.rs
pub use day::*;
pub use food::*;
pub use insight::*;
pub use parse_ai::*;
pub use progress::*;
pub use targets::*;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rebalance_core::Config;

/// Load config from an explicit path or the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = Config::load(path).with_context(|| match path {
        Some(p) => format!("Failed to load config from {}", p.display()),
        None => "Failed to load config".to_string(),
    })?;
    tracing::debug!(?config, "Config loaded");
    Ok(config)
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (expected YYYY-MM-DD)", s))
}

/// Parse an optional date argument, defaulting to today's local date
pub fn date_or_today(s: Option<&str>) -> Result<NaiveDate> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Render a fraction as a percentage
pub fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}
