//! Daily insight classifier
//!
//! Evaluates today's totals against targets and the hour of day as an ordered
//! decision list. The first matching rule wins; rules never combine.
//!
//! Order: zero intake, carb excess, fat excess, protein deficit, late day,
//! on track, target met. Reordering changes outcomes for overlapping
//! conditions, so the order is fixed.

use chrono::Timelike;

use crate::models::{NutritionTotals, Targets};

use super::types::{Insight, InsightIcon, InsightRule, Severity, SuggestedMeal};

/// Hour before which an empty day gets a breakfast prompt
pub const BREAKFAST_CUTOFF_HOUR: u32 = 11;
/// Hour from which the late-day rule applies
pub const LATE_DAY_HOUR: u32 = 20;

/// A macro leads the calorie ratio by more than this
const MACRO_EXCESS_MARGIN: f64 = 0.15;
/// A macro must also be past this share of its own target to count as excess
const MACRO_EXCESS_FLOOR: f64 = 0.5;
/// Protein trails the calorie ratio by more than this
const PROTEIN_DEFICIT_MARGIN: f64 = 0.2;
/// Protein deficit only matters once this much of the calorie budget is eaten
const PROTEIN_DEFICIT_MIN_CALORIES: f64 = 0.4;
/// Late-day rule fires below this calorie ratio
const LATE_DAY_MAX_CALORIES: f64 = 0.9;
/// On-track rule fires below this calorie ratio; at or above it the day is done
const TARGET_MET_CALORIES: f64 = 0.95;

/// Consumption as a fraction of each target
///
/// A ratio is `None` when its target is zero or negative. Negative carb
/// targets come out of the calculator for extreme profiles, and zero targets
/// can come from hand-edited profiles; neither yields a meaningful ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl Progress {
    pub fn new(totals: &NutritionTotals, targets: &Targets) -> Self {
        Self {
            calories: ratio(totals.calories, targets.target_calories),
            protein: ratio(totals.protein, targets.target_protein),
            carbs: ratio(totals.carbs, targets.target_carbs),
            fat: ratio(totals.fat, targets.target_fat),
        }
    }
}

fn ratio(consumed: f64, target: i64) -> Option<f64> {
    if target > 0 {
        Some(consumed / target as f64)
    } else {
        None
    }
}

/// Classify the day at the given local hour (0-23)
pub fn classify_daily_insight(totals: &NutritionTotals, targets: &Targets, hour: u32) -> Insight {
    // Totals are non-negative by contract
    if totals.calories <= 0.0 {
        return zero_intake(hour);
    }

    let progress = Progress::new(totals, targets);

    let Some(calories) = progress.calories else {
        tracing::debug!(
            target_calories = targets.target_calories,
            "Calorie target not positive, skipping ratio rules"
        );
        return on_track();
    };

    match progress.carbs {
        Some(carbs) if is_macro_excess(carbs, calories) => return carb_excess(),
        Some(_) => {}
        None => tracing::debug!(
            target_carbs = targets.target_carbs,
            "Carb target not positive, skipping carb rule"
        ),
    }

    match progress.fat {
        Some(fat) if is_macro_excess(fat, calories) => return fat_excess(),
        Some(_) => {}
        None => tracing::debug!(
            target_fat = targets.target_fat,
            "Fat target not positive, skipping fat rule"
        ),
    }

    match progress.protein {
        Some(protein)
            if protein < calories - PROTEIN_DEFICIT_MARGIN
                && calories > PROTEIN_DEFICIT_MIN_CALORIES =>
        {
            return protein_deficit()
        }
        Some(_) => {}
        None => tracing::debug!(
            target_protein = targets.target_protein,
            "Protein target not positive, skipping protein rule"
        ),
    }

    if hour >= LATE_DAY_HOUR && calories < LATE_DAY_MAX_CALORIES {
        return late_day();
    }

    if calories < TARGET_MET_CALORIES {
        return on_track();
    }

    target_met()
}

/// Classify using the current local hour
pub fn classify_now(totals: &NutritionTotals, targets: &Targets) -> Insight {
    let hour = chrono::Local::now().hour();
    classify_daily_insight(totals, targets, hour)
}

fn is_macro_excess(macro_progress: f64, calorie_progress: f64) -> bool {
    macro_progress > calorie_progress + MACRO_EXCESS_MARGIN && macro_progress > MACRO_EXCESS_FLOOR
}

fn zero_intake(hour: u32) -> Insight {
    let message = if hour < BREAKFAST_CUTOFF_HOUR {
        "How about starting the day balanced with a good breakfast?"
    } else {
        "Nothing logged yet. Let's start with a balanced meal!"
    };
    Insight::new(
        InsightRule::ZeroIntake,
        Severity::Info,
        "Day start",
        message,
        InsightIcon::Sunny,
        SuggestedMeal::Balanced,
    )
}

fn carb_excess() -> Insight {
    Insight::new(
        InsightRule::CarbExcess,
        Severity::Warning,
        "Carb balance",
        "Carbs are running a little ahead. Lean on protein and fiber at the next meal to even things out.",
        InsightIcon::Scale,
        SuggestedMeal::HighProteinLowCarb,
    )
}

fn fat_excess() -> Insight {
    Insight::new(
        InsightRule::FatExcess,
        Severity::Warning,
        "Fat balance",
        "Fat intake is above target today. Grilled or boiled dishes with plenty of vegetables would suit the next meal.",
        InsightIcon::Leaf,
        SuggestedMeal::LowFatHighFiber,
    )
}

fn protein_deficit() -> Insight {
    Insight::new(
        InsightRule::ProteinDeficit,
        Severity::Info,
        "Protein support",
        "Your energy is fine but your muscles are waiting on protein. Add a protein source to the next meal.",
        InsightIcon::Fitness,
        SuggestedMeal::HighProtein,
    )
}

fn late_day() -> Insight {
    Insight::new(
        InsightRule::LateDay,
        Severity::Info,
        "Light closing",
        "It's getting late. A light, protein-forward closing meal is easier on digestion before sleep.",
        InsightIcon::Moon,
        SuggestedMeal::LightProtein,
    )
}

fn on_track() -> Insight {
    Insight::new(
        InsightRule::OnTrack,
        Severity::Success,
        "Balanced",
        "Your calories and macros are in great shape so far. Keep it up!",
        InsightIcon::CheckmarkCircle,
        SuggestedMeal::Balanced,
    )
}

fn target_met() -> Insight {
    Insight::new(
        InsightRule::TargetMet,
        Severity::Success,
        "Day complete",
        "You reached today's targets. Time to rest and get ready for tomorrow.",
        InsightIcon::Trophy,
        SuggestedMeal::Fasting,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> Targets {
        Targets {
            target_calories: 2000,
            target_protein: 150,
            target_carbs: 200,
            target_fat: 65,
        }
    }

    fn totals(calories: f64, protein: f64, carbs: f64, fat: f64) -> NutritionTotals {
        NutritionTotals::new(calories, protein, carbs, fat)
    }

    #[test]
    fn test_zero_intake_morning() {
        let insight = classify_daily_insight(&NutritionTotals::default(), &targets(), 9);
        assert_eq!(insight.rule, InsightRule::ZeroIntake);
        assert_eq!(insight.severity, Severity::Info);
        assert_eq!(insight.suggested_next_meal, SuggestedMeal::Balanced);
        assert_eq!(insight.icon, InsightIcon::Sunny);
        assert!(insight.message.contains("breakfast"));
    }

    #[test]
    fn test_zero_intake_afternoon_message() {
        let morning = classify_daily_insight(&NutritionTotals::default(), &targets(), 10);
        let noon = classify_daily_insight(&NutritionTotals::default(), &targets(), 11);
        assert_ne!(morning.message, noon.message);
        assert_eq!(noon.suggested_next_meal, SuggestedMeal::Balanced);
    }

    #[test]
    fn test_zero_intake_ignores_macros() {
        // Calories drive the check even if macros were logged without them
        let insight = classify_daily_insight(&totals(0.0, 10.0, 150.0, 50.0), &targets(), 14);
        assert_eq!(insight.rule, InsightRule::ZeroIntake);
    }

    #[test]
    fn test_carb_excess() {
        let insight = classify_daily_insight(&totals(1000.0, 75.0, 160.0, 30.0), &targets(), 13);
        assert_eq!(insight.severity, Severity::Warning);
        assert_eq!(insight.suggested_next_meal, SuggestedMeal::HighProteinLowCarb);
        assert_eq!(insight.icon, InsightIcon::Scale);
    }

    #[test]
    fn test_carb_excess_needs_half_target() {
        // carbs 0.45 > 0.2 + 0.15 but below the 0.5 floor
        let insight = classify_daily_insight(&totals(400.0, 30.0, 90.0, 13.0), &targets(), 10);
        assert_ne!(insight.rule, InsightRule::CarbExcess);
    }

    #[test]
    fn test_fat_excess() {
        let insight = classify_daily_insight(&totals(1000.0, 75.0, 100.0, 50.0), &targets(), 13);
        assert_eq!(insight.severity, Severity::Warning);
        assert_eq!(insight.suggested_next_meal, SuggestedMeal::LowFatHighFiber);
        assert_eq!(insight.icon, InsightIcon::Leaf);
    }

    #[test]
    fn test_carb_wins_over_fat() {
        let insight = classify_daily_insight(&totals(1000.0, 75.0, 160.0, 50.0), &targets(), 13);
        assert_eq!(insight.rule, InsightRule::CarbExcess);
    }

    #[test]
    fn test_fat_wins_over_protein_deficit() {
        let insight = classify_daily_insight(&totals(1000.0, 20.0, 100.0, 50.0), &targets(), 13);
        assert_eq!(insight.rule, InsightRule::FatExcess);
    }

    #[test]
    fn test_protein_deficit() {
        // calories 0.6, protein 0.2
        let insight = classify_daily_insight(&totals(1200.0, 30.0, 120.0, 39.0), &targets(), 13);
        assert_eq!(insight.severity, Severity::Info);
        assert_eq!(insight.suggested_next_meal, SuggestedMeal::HighProtein);
    }

    #[test]
    fn test_protein_deficit_needs_calories() {
        // protein far behind but calories only 0.3
        let insight = classify_daily_insight(&totals(600.0, 0.0, 60.0, 19.5), &targets(), 13);
        assert_eq!(insight.rule, InsightRule::OnTrack);
    }

    #[test]
    fn test_protein_deficit_wins_over_late_day() {
        let insight = classify_daily_insight(&totals(1200.0, 30.0, 120.0, 39.0), &targets(), 21);
        assert_eq!(insight.rule, InsightRule::ProteinDeficit);
    }

    #[test]
    fn test_late_day_light_protein() {
        let insight = classify_daily_insight(&totals(1200.0, 90.0, 120.0, 39.0), &targets(), 21);
        assert_eq!(insight.severity, Severity::Info);
        assert_eq!(insight.suggested_next_meal, SuggestedMeal::LightProtein);
        assert_eq!(insight.icon, InsightIcon::Moon);
    }

    #[test]
    fn test_late_day_boundary_hour() {
        let totals = totals(1200.0, 90.0, 120.0, 39.0);
        assert_eq!(
            classify_daily_insight(&totals, &targets(), 19).rule,
            InsightRule::OnTrack
        );
        assert_eq!(
            classify_daily_insight(&totals, &targets(), 20).rule,
            InsightRule::LateDay
        );
    }

    #[test]
    fn test_on_track() {
        let insight = classify_daily_insight(&totals(1200.0, 90.0, 120.0, 39.0), &targets(), 14);
        assert_eq!(insight.severity, Severity::Success);
        assert_eq!(insight.suggested_next_meal, SuggestedMeal::Balanced);
        assert_eq!(insight.icon, InsightIcon::CheckmarkCircle);
    }

    #[test]
    fn test_target_met_fasting() {
        // calories 0.97, macros in line
        let insight = classify_daily_insight(&totals(1940.0, 150.0, 190.0, 63.0), &targets(), 18);
        assert_eq!(insight.severity, Severity::Success);
        assert_eq!(insight.suggested_next_meal, SuggestedMeal::Fasting);
        assert_eq!(insight.icon, InsightIcon::Trophy);
    }

    #[test]
    fn test_target_met_late_evening() {
        // Late hour does not matter once calories pass 0.9
        let insight = classify_daily_insight(&totals(1940.0, 150.0, 190.0, 63.0), &targets(), 22);
        assert_eq!(insight.rule, InsightRule::TargetMet);
    }

    #[test]
    fn test_late_day_between_90_and_95_is_on_track() {
        let insight = classify_daily_insight(&totals(1840.0, 140.0, 184.0, 60.0), &targets(), 21);
        assert_eq!(insight.rule, InsightRule::OnTrack);
    }

    #[test]
    fn test_zero_macro_target_skips_rule() {
        let mut t = targets();
        t.target_carbs = 0;
        // Would be carb excess with a real carb target
        let insight = classify_daily_insight(&totals(1000.0, 75.0, 160.0, 30.0), &t, 13);
        assert_eq!(insight.rule, InsightRule::OnTrack);
    }

    #[test]
    fn test_negative_carb_target_skips_rule() {
        let mut t = targets();
        t.target_carbs = -8;
        let insight = classify_daily_insight(&totals(1000.0, 75.0, 5.0, 50.0), &t, 13);
        assert_eq!(insight.rule, InsightRule::FatExcess);
    }

    #[test]
    fn test_zero_calorie_target_is_on_track() {
        let mut t = targets();
        t.target_calories = 0;
        let insight = classify_daily_insight(&totals(2500.0, 10.0, 400.0, 120.0), &t, 21);
        assert_eq!(insight.rule, InsightRule::OnTrack);

        // Empty day still gets the start prompt
        let insight = classify_daily_insight(&NutritionTotals::default(), &t, 8);
        assert_eq!(insight.rule, InsightRule::ZeroIntake);
    }

    #[test]
    fn test_progress_ratios() {
        let p = Progress::new(&totals(1000.0, 75.0, 100.0, 13.0), &targets());
        assert_eq!(p.calories, Some(0.5));
        assert_eq!(p.protein, Some(0.5));
        assert_eq!(p.carbs, Some(0.5));
        assert_eq!(p.fat, Some(0.2));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let t = totals(1000.0, 75.0, 160.0, 50.0);
        let first = classify_daily_insight(&t, &targets(), 13);
        for _ in 0..10 {
            assert_eq!(classify_daily_insight(&t, &targets(), 13), first);
        }
    }
}
