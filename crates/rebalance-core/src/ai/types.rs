//! Structured replies expected from the food-recognition model

use chrono::{DateTime, FixedOffset};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{MealEntry, WaterLog};

/// Default amount for a water log when the model gives none (one glass)
pub const DEFAULT_WATER_ML: u32 = 250;

/// How sure the model is about an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown confidence: {}", s)),
        }
    }
}

/// Models sometimes echo the prompt template ("high/medium/low"); treat
/// anything unrecognized as absent rather than failing the whole reply.
fn lenient_confidence<'de, D>(deserializer: D) -> std::result::Result<Option<Confidence>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Nutrition estimate for a photographed or described meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEstimate {
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default, deserialize_with = "lenient_confidence")]
    pub confidence: Option<Confidence>,
    /// What portion the model assumed
    #[serde(default)]
    pub portion_desc: Option<String>,
}

impl FoodEstimate {
    pub fn into_meal_entry(self, logged_at: DateTime<FixedOffset>) -> MealEntry {
        MealEntry {
            name: self.name,
            calories: Some(self.calories),
            protein: Some(self.protein),
            carbs: Some(self.carbs),
            fat: Some(self.fat),
            logged_at,
        }
    }
}

/// A free-text log classified by the model as food or water
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LoggedInput {
    Water {
        #[serde(default = "default_water_ml", deserialize_with = "water_amount")]
        amount: u32,
    },
    Food {
        data: FoodEstimate,
    },
}

fn default_water_ml() -> u32 {
    DEFAULT_WATER_ML
}

/// Amounts may come back as floats ("500.0"); round to whole millilitres.
/// A null amount means one glass.
fn water_amount<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(DEFAULT_WATER_ML),
        Some(ml) if ml.is_finite() && ml >= 0.0 && ml <= u32::MAX as f64 => Ok(ml.round() as u32),
        Some(ml) => Err(D::Error::custom(format!("invalid water amount: {}", ml))),
    }
}

impl LoggedInput {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Water { .. } => "water",
            Self::Food { .. } => "food",
        }
    }
}

/// What a logged input becomes once timestamped
#[derive(Debug, Clone, PartialEq)]
pub enum LogRecord {
    Meal(MealEntry),
    Water(WaterLog),
}

impl LoggedInput {
    pub fn into_record(self, logged_at: DateTime<FixedOffset>) -> LogRecord {
        match self {
            Self::Water { amount } => LogRecord::Water(WaterLog {
                amount_ml: amount,
                logged_at,
            }),
            Self::Food { data } => LogRecord::Meal(data.into_meal_entry(logged_at)),
        }
    }
}
