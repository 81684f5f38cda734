//! Daily target calculator
//!
//! Derives calorie and macro goals from biometrics using the revised
//! Harris-Benedict BMR equation, an activity multiplier and a goal offset.
//!
//! Macro split:
//! - Protein: 2 g per kg of body weight
//! - Fat: 25% of calories at 9 kcal/g
//! - Carbs: whatever calories remain, at 4 kcal/g (may be negative)

use serde::{Deserialize, Serialize};

use crate::models::{BiometricProfile, Gender, Targets};

/// Protein grams per kilogram of body weight
pub const PROTEIN_G_PER_KG: f64 = 2.0;
/// Share of calories allotted to fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Intermediate values behind a target calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBreakdown {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure after the goal offset (kcal/day)
    pub tdee: f64,
    pub targets: Targets,
}

/// Where resolved targets came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetSource {
    Stored,
    Computed,
    Fallback,
}

impl TargetSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::Computed => "computed",
            Self::Fallback => "fallback",
        }
    }
}

/// Round to the nearest integer, halves toward positive infinity
///
/// Differs from `f64::round` only for negative halves (-8.5 becomes -8).
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Revised Harris-Benedict basal metabolic rate
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let age = f64::from(age);
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Compute targets with the BMR/TDEE values that produced them
///
/// Returns `None` when weight, height or age is missing or not positive.
pub fn compute_breakdown(profile: &BiometricProfile) -> Option<TargetBreakdown> {
    let weight = profile.weight_kg.filter(|w| *w > 0.0)?;
    let height = profile.height_cm.filter(|h| *h > 0.0)?;
    let age = profile.age.filter(|a| *a > 0)?;

    let bmr = basal_metabolic_rate(weight, height, age, profile.gender);
    let multiplier = profile.activity_level.unwrap_or_default().multiplier();
    let adjustment = profile.goal.unwrap_or_default().calorie_adjustment();
    let tdee = bmr * multiplier + adjustment;

    let target_calories = round_half_up(tdee);
    let target_protein = round_half_up(weight * PROTEIN_G_PER_KG);
    let target_fat = round_half_up(target_calories as f64 * FAT_CALORIE_SHARE / KCAL_PER_G_FAT);
    let remaining_kcal = target_calories as f64
        - target_protein as f64 * KCAL_PER_G_PROTEIN
        - target_fat as f64 * KCAL_PER_G_FAT;
    let target_carbs = round_half_up(remaining_kcal / KCAL_PER_G_CARBS);

    Some(TargetBreakdown {
        bmr,
        tdee,
        targets: Targets {
            target_calories,
            target_protein,
            target_carbs,
            target_fat,
        },
    })
}

/// Compute daily targets from biometrics, or `None` if the profile is incomplete
pub fn compute_targets(profile: &BiometricProfile) -> Option<Targets> {
    compute_breakdown(profile).map(|b| b.targets)
}

/// Pick the targets to evaluate against: stored, then computed, then defaults
pub fn resolve_targets(
    stored: Option<Targets>,
    profile: &BiometricProfile,
) -> (Targets, TargetSource) {
    if let Some(targets) = stored {
        tracing::debug!("Using stored targets");
        return (targets, TargetSource::Stored);
    }

    match compute_targets(profile) {
        Some(targets) => {
            tracing::debug!(
                calories = targets.target_calories,
                "Computed targets from profile"
            );
            (targets, TargetSource::Computed)
        }
        None => {
            tracing::debug!("Profile incomplete, using default targets");
            (Targets::default(), TargetSource::Fallback)
        }
    }
}
