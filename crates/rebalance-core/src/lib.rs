//! Rebalance Core Library
//!
//! Shared functionality for the Rebalance nutrition tracker:
//! - Daily calorie and macro targets from a biometric profile
//! - Rule-based daily insights with a next-meal suggestion
//! - Logging streaks, daily totals and weekly summaries
//! - Points and levels
//! - Food database lookups with a bounded search cache
//! - Parsing of food-recognition model replies

pub mod ai;
pub mod config;
pub mod error;
pub mod food;
pub mod gamification;
pub mod insights;
pub mod models;
pub mod streak;
pub mod targets;
pub mod totals;

/// Test utilities including an in-memory food source
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use ai::{Confidence, FoodEstimate, LogRecord, LoggedInput};
pub use config::Config;
pub use error::{Error, Result};
pub use food::{CachedFoodSearch, FoodItem, FoodSource, SearchCache};
pub use gamification::{AwardType, LevelInfo};
pub use insights::{
    classify_daily_insight, Insight, InsightIcon, InsightMemo, InsightRule, Severity,
    SuggestedMeal,
};
pub use models::{
    ActivityLevel, BiometricProfile, DailyGoals, Gender, Goal, MealEntry, NutritionTotals,
    Targets, WaterLog,
};
pub use streak::compute_streak;
pub use targets::{compute_targets, resolve_targets, TargetBreakdown, TargetSource};
pub use totals::{DaySummary, MealPeriod, MealSlot, Remaining};
