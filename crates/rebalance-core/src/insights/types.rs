//! Core types for the daily insight classifier

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of an insight, serialized as the insight's `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Neutral nudge
    Info,
    /// A macro is running ahead of the calorie budget
    Warning,
    /// On track or done for the day
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
        }
    }

    /// Numeric priority for sorting (higher = needs attention sooner)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Success => 1,
            Severity::Info => 2,
            Severity::Warning => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "success" => Ok(Severity::Success),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// Icon tag matched on by the notification and UI layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightIcon {
    Sunny,
    Scale,
    Leaf,
    Fitness,
    Moon,
    CheckmarkCircle,
    Trophy,
}

impl InsightIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightIcon::Sunny => "sunny",
            InsightIcon::Scale => "scale",
            InsightIcon::Leaf => "leaf",
            InsightIcon::Fitness => "fitness",
            InsightIcon::Moon => "moon",
            InsightIcon::CheckmarkCircle => "checkmark-circle",
            InsightIcon::Trophy => "trophy",
        }
    }
}

impl fmt::Display for InsightIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strategy tag for the next meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestedMeal {
    Balanced,
    HighProteinLowCarb,
    LowFatHighFiber,
    HighProtein,
    LightProtein,
    Fasting,
}

impl SuggestedMeal {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestedMeal::Balanced => "balanced",
            SuggestedMeal::HighProteinLowCarb => "high-protein-low-carb",
            SuggestedMeal::LowFatHighFiber => "low-fat-high-fiber",
            SuggestedMeal::HighProtein => "high-protein",
            SuggestedMeal::LightProtein => "light-protein",
            SuggestedMeal::Fasting => "fasting",
        }
    }
}

impl fmt::Display for SuggestedMeal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SuggestedMeal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balanced" => Ok(SuggestedMeal::Balanced),
            "high-protein-low-carb" => Ok(SuggestedMeal::HighProteinLowCarb),
            "low-fat-high-fiber" => Ok(SuggestedMeal::LowFatHighFiber),
            "high-protein" => Ok(SuggestedMeal::HighProtein),
            "light-protein" => Ok(SuggestedMeal::LightProtein),
            "fasting" => Ok(SuggestedMeal::Fasting),
            _ => Err(format!("Unknown meal suggestion: {}", s)),
        }
    }
}

/// Which classifier rule produced an insight, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightRule {
    ZeroIntake,
    CarbExcess,
    FatExcess,
    ProteinDeficit,
    LateDay,
    OnTrack,
    TargetMet,
}

impl InsightRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightRule::ZeroIntake => "zero_intake",
            InsightRule::CarbExcess => "carb_excess",
            InsightRule::FatExcess => "fat_excess",
            InsightRule::ProteinDeficit => "protein_deficit",
            InsightRule::LateDay => "late_day",
            InsightRule::OnTrack => "on_track",
            InsightRule::TargetMet => "target_met",
        }
    }

    /// All rules in evaluation order
    pub fn all() -> &'static [InsightRule] {
        &[
            InsightRule::ZeroIntake,
            InsightRule::CarbExcess,
            InsightRule::FatExcess,
            InsightRule::ProteinDeficit,
            InsightRule::LateDay,
            InsightRule::OnTrack,
            InsightRule::TargetMet,
        ]
    }
}

impl fmt::Display for InsightRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single categorized recommendation for the rest of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub icon: InsightIcon,
    pub suggested_next_meal: SuggestedMeal,
    /// Rule that fired
    pub rule: InsightRule,
}

impl Insight {
    pub fn new(
        rule: InsightRule,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        icon: InsightIcon,
        suggested_next_meal: SuggestedMeal,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
            icon,
            suggested_next_meal,
            rule,
        }
    }
}
