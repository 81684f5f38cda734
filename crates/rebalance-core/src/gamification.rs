//! Points and levels
//!
//! Point rules:
//! - Food log: 10
//! - Water log: 5
//! - Daily calorie goal hit (within 100 kcal): 50
//! - Water goal hit: 30
//!
//! Every 100 points is a level.

use serde::{Deserialize, Serialize};

use crate::models::{DailyGoals, NutritionTotals, Targets};

/// Points needed per level
pub const POINTS_PER_LEVEL: u64 = 100;
/// Calorie goal counts as hit within this many kcal of target
pub const CALORIE_GOAL_TOLERANCE: f64 = 100.0;

/// Actions that earn points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AwardType {
    FoodLog,
    WaterLog,
    GoalReached,
    WaterGoal,
}

impl AwardType {
    pub fn points(&self) -> u64 {
        match self {
            Self::FoodLog => 10,
            Self::WaterLog => 5,
            Self::GoalReached => 50,
            Self::WaterGoal => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodLog => "Food log",
            Self::WaterLog => "Water intake",
            Self::GoalReached => "Daily goal match",
            Self::WaterGoal => "Water goal",
        }
    }
}

impl std::str::FromStr for AwardType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "FOOD_LOG" => Ok(Self::FoodLog),
            "WATER_LOG" => Ok(Self::WaterLog),
            "GOAL_REACHED" => Ok(Self::GoalReached),
            "WATER_GOAL" => Ok(Self::WaterGoal),
            _ => Err(format!("Unknown award type: {}", s)),
        }
    }
}

/// Add an award to a running point total
pub fn award(points: u64, award: AwardType) -> u64 {
    let total = points.saturating_add(award.points());
    tracing::debug!(
        award = award.label(),
        gained = award.points(),
        total,
        "Points awarded"
    );
    total
}

/// True when the day's calories land within 100 kcal of target
pub fn calorie_goal_reached(totals: &NutritionTotals, targets: &Targets) -> bool {
    (totals.calories - targets.target_calories as f64).abs() <= CALORIE_GOAL_TOLERANCE
}

pub fn water_goal_reached(water_ml: u32, goals: &DailyGoals) -> bool {
    water_ml >= goals.target_water_ml
}

/// Awards earned by the day as a whole (not per log action)
pub fn daily_awards(totals: &NutritionTotals, water_ml: u32, goals: &DailyGoals) -> Vec<AwardType> {
    let mut awards = Vec::new();
    if calorie_goal_reached(totals, &goals.targets) {
        awards.push(AwardType::GoalReached);
    }
    if water_goal_reached(water_ml, goals) {
        awards.push(AwardType::WaterGoal);
    }
    awards
}

/// Level progress for a point total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    /// Starts at 1
    pub level: u64,
    /// Fraction of the current level completed, in `[0, 1)`
    pub progress: f64,
    pub next_level_points: u64,
}

pub fn level_info(points: u64) -> LevelInfo {
    let in_level = points % POINTS_PER_LEVEL;
    LevelInfo {
        level: points / POINTS_PER_LEVEL + 1,
        progress: in_level as f64 / POINTS_PER_LEVEL as f64,
        next_level_points: POINTS_PER_LEVEL - in_level,
    }
}
