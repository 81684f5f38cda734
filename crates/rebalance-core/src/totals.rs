//! Daily aggregation of logged meals and water
//!
//! Everything here is derived on each load from the raw entries the data
//! store returns; nothing is persisted.

use chrono::{Days, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{MealEntry, NutritionTotals, Targets, WaterLog};

/// Number of days in the weekly summary
pub const WEEK_DAYS: u64 = 7;

impl NutritionTotals {
    /// Sum a set of meals, treating missing nutrient values as zero
    pub fn from_meals<'a, I>(meals: I) -> Self
    where
        I: IntoIterator<Item = &'a MealEntry>,
    {
        meals.into_iter().fold(Self::default(), |acc, meal| Self {
            calories: acc.calories + meal.calories.unwrap_or(0.0),
            protein: acc.protein + meal.protein.unwrap_or(0.0),
            carbs: acc.carbs + meal.carbs.unwrap_or(0.0),
            fat: acc.fat + meal.fat.unwrap_or(0.0),
        })
    }
}

/// Total water in millilitres
pub fn total_water_ml<'a, I>(logs: I) -> u32
where
    I: IntoIterator<Item = &'a WaterLog>,
{
    logs.into_iter()
        .fold(0u32, |acc, log| acc.saturating_add(log.amount_ml))
}

/// What is left of today's budget, never below zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Remaining {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Remaining calories and macros, each clamped at zero
pub fn remaining(totals: &NutritionTotals, targets: &Targets) -> Remaining {
    let left = |target: i64, consumed: f64| (target as f64 - consumed).max(0.0);
    Remaining {
        calories: left(targets.target_calories, totals.calories),
        protein: left(targets.target_protein, totals.protein),
        carbs: left(targets.target_carbs, totals.carbs),
        fat: left(targets.target_fat, totals.fat),
    }
}

/// Share of the calorie target eaten, clamped to `[0, 1]` for progress bars
pub fn calorie_progress(totals: &NutritionTotals, targets: &Targets) -> f64 {
    if targets.target_calories <= 0 {
        return 0.0;
    }
    (totals.calories / targets.target_calories as f64).clamp(0.0, 1.0)
}

/// Coarse time-of-day bucket for circadian grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    /// 05:00 - 11:00
    Morning,
    /// 11:00 - 17:00
    Afternoon,
    /// 17:00 - 21:00
    Evening,
    /// 21:00 - 05:00
    Night,
}

impl MealPeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=10 => Self::Morning,
            11..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl std::fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Meals grouped by period, input order preserved within each bucket
#[derive(Debug, Clone, Default, Serialize)]
pub struct MealsByPeriod<'a> {
    pub morning: Vec<&'a MealEntry>,
    pub afternoon: Vec<&'a MealEntry>,
    pub evening: Vec<&'a MealEntry>,
    pub night: Vec<&'a MealEntry>,
}

impl<'a> MealsByPeriod<'a> {
    pub fn get(&self, period: MealPeriod) -> &[&'a MealEntry] {
        match period {
            MealPeriod::Morning => &self.morning,
            MealPeriod::Afternoon => &self.afternoon,
            MealPeriod::Evening => &self.evening,
            MealPeriod::Night => &self.night,
        }
    }
}

/// Group meals by the local hour they were logged at
pub fn group_by_period(meals: &[MealEntry]) -> MealsByPeriod<'_> {
    let mut groups = MealsByPeriod::default();
    for meal in meals {
        match MealPeriod::from_hour(meal.logged_at.hour()) {
            MealPeriod::Morning => groups.morning.push(meal),
            MealPeriod::Afternoon => groups.afternoon.push(meal),
            MealPeriod::Evening => groups.evening.push(meal),
            MealPeriod::Night => groups.night.push(meal),
        }
    }
    groups
}

/// Which meal comes next at a given hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
    LateNight,
}

impl MealSlot {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=10 => Self::Breakfast,
            11..=13 => Self::Lunch,
            14..=16 => Self::Snack,
            17..=20 => Self::Dinner,
            _ => Self::LateNight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
            Self::LateNight => "late-night",
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One day of the weekly chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Short weekday name ("Mon")
    pub label: String,
    pub calories: f64,
    pub water_ml: u32,
}

/// Calories and water for the seven days ending `today`, oldest first
pub fn weekly_summary(meals: &[MealEntry], water: &[WaterLog], today: NaiveDate) -> Vec<DaySummary> {
    (0..WEEK_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| {
            let calories = meals
                .iter()
                .filter(|m| m.date() == date)
                .map(|m| m.calories.unwrap_or(0.0))
                .sum();
            let water_ml = total_water_ml(water.iter().filter(|w| w.logged_at.date_naive() == date));
            DaySummary {
                date,
                label: date.format("%a").to_string(),
                calories,
                water_ml,
            }
        })
        .collect()
}
