//! Domain models for Rebalance

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Biological sex used by the BMR equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Self-reported activity level, scales BMR into TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days a week
    Light,
    /// Moderate exercise 3-5 days a week
    Moderate,
    /// Hard exercise 6-7 days a week
    Active,
    /// Athlete-level training
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// TDEE multiplier for this level
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }

    /// Parse a stored profile value, falling back to sedentary for anything unknown
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::debug!(value = s, "Unknown activity level, using sedentary");
            Self::Sedentary
        })
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" | "very-active" => Ok(Self::VeryActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weight goal, shifts the calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }

    /// Daily calorie adjustment applied to TDEE
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Self::Lose => -500.0,
            Self::Maintain => 0.0,
            Self::Gain => 500.0,
        }
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Biometrics from the user's profile record
///
/// Weight, height and age are optional because profiles are often incomplete;
/// target calculation refuses to run without all three.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiometricProfile {
    #[serde(alias = "weight")]
    pub weight_kg: Option<f64>,
    #[serde(alias = "height")]
    pub height_cm: Option<f64>,
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, deserialize_with = "lenient_activity_level")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default, deserialize_with = "lenient_goal")]
    pub goal: Option<Goal>,
}

/// Profile records are written by older app versions too; an activity level
/// we don't know counts as sedentary instead of rejecting the profile.
fn lenient_activity_level<'de, D>(deserializer: D) -> std::result::Result<Option<ActivityLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.map(|s| ActivityLevel::parse_lenient(&s)))
}

/// Unknown goals are dropped, which targets treat as maintain
fn lenient_goal<'de, D>(deserializer: D) -> std::result::Result<Option<Goal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.parse() {
        Ok(goal) => Some(goal),
        Err(_) => {
            tracing::debug!(value = %s, "Unknown goal, using maintain");
            None
        }
    }))
}

/// Daily calorie and macro targets
///
/// Carbs are signed: the calculator can produce a negative carb target when
/// protein and fat alone exceed the calorie budget. All four fields are
/// required when deserializing; see [`deserialize_stored_targets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targets {
    pub target_calories: i64,
    pub target_protein: i64,
    pub target_carbs: i64,
    pub target_fat: i64,
}

impl Default for Targets {
    /// Fallback used when the profile has neither stored nor computable targets
    fn default() -> Self {
        Self {
            target_calories: 2000,
            target_protein: 150,
            target_carbs: 200,
            target_fat: 65,
        }
    }
}

/// Read an optional stored targets record
///
/// A record missing any field is treated as absent, so callers recompute
/// targets from the profile instead of mixing stored and fallback values.
pub fn deserialize_stored_targets<'de, D>(deserializer: D) -> std::result::Result<Option<Targets>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match Targets::deserialize(value) {
        Ok(targets) => Some(targets),
        Err(e) => {
            tracing::warn!("Ignoring incomplete stored targets: {}", e);
            None
        }
    }))
}

/// Targets plus the daily water goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyGoals {
    pub targets: Targets,
    pub target_water_ml: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            targets: Targets::default(),
            target_water_ml: 2000,
        }
    }
}

/// Consumption summed over a period (usually one day)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// A logged meal as returned by the data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    #[serde(default)]
    pub name: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    #[serde(alias = "created_at")]
    pub logged_at: DateTime<FixedOffset>,
}

impl MealEntry {
    /// Calendar day of the entry in its own offset
    pub fn date(&self) -> NaiveDate {
        self.logged_at.date_naive()
    }
}

/// A logged glass/bottle of water
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLog {
    pub amount_ml: u32,
    #[serde(alias = "created_at")]
    pub logged_at: DateTime<FixedOffset>,
}
