//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use chrono::NaiveDate;
use rebalance_core::gamification::AwardType;
use rebalance_core::insights::{InsightRule, SuggestedMeal};
use rebalance_core::models::{NutritionTotals, Targets};
use rebalance_core::targets::TargetSource;
use rebalance_core::totals::MealSlot;
use rebalance_core::Config;
use tempfile::NamedTempFile;

use crate::commands::{self, DayLog, TargetOverrides};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

const DAY_LOG: &str = r#"{
    "profile": {
        "weight": 80, "height": 180, "age": 30,
        "gender": "male", "activity_level": "moderate", "goal": "maintain"
    },
    "meals": [
        { "name": "Oats", "calories": 450, "protein": 5, "carbs": 70, "fat": 10,
          "created_at": "2026-10-16T08:15:00+03:00" },
        { "name": "Pasta", "calories": 900, "protein": 30, "carbs": 140, "fat": 20,
          "created_at": "2026-10-16T13:00:00+03:00" },
        { "name": "Soup", "calories": 300, "protein": null,
          "created_at": "2026-10-15T19:00:00+03:00" },
        { "name": "Toast", "calories": 250,
          "created_at": "2026-10-14T09:00:00+03:00" }
    ],
    "water": [
        { "amount_ml": 1500, "created_at": "2026-10-16T10:00:00+03:00" },
        { "amount_ml": 750, "created_at": "2026-10-16T15:00:00+03:00" }
    ]
}"#;

// ========== Targets Command Tests ==========

#[test]
fn test_profile_from_args() {
    let profile = commands::profile_from_args(60.0, 165.0, 25, "F", "light", "lose").unwrap();
    assert_eq!(profile.weight_kg, Some(60.0));
    assert_eq!(profile.gender.as_str(), "female");
    assert_eq!(profile.activity_level.unwrap().as_str(), "light");
}

#[test]
fn test_profile_from_args_rejects_unknown_values() {
    assert!(commands::profile_from_args(60.0, 165.0, 25, "other", "light", "lose").is_err());
    assert!(commands::profile_from_args(60.0, 165.0, 25, "f", "couch", "lose").is_err());
    assert!(commands::profile_from_args(60.0, 165.0, 25, "f", "light", "bulk").is_err());
}

#[test]
fn test_cmd_targets() {
    assert!(commands::cmd_targets(80.0, 180.0, 30, "male", "moderate", "maintain", false).is_ok());
    assert!(commands::cmd_targets(80.0, 180.0, 30, "male", "moderate", "maintain", true).is_ok());
}

#[test]
fn test_cmd_targets_zero_weight_fails() {
    assert!(commands::cmd_targets(0.0, 180.0, 30, "male", "moderate", "maintain", false).is_err());
}

// ========== Insight Command Tests ==========

#[test]
fn test_target_overrides() {
    let overrides = TargetOverrides {
        calories: Some(1800),
        fat: Some(60),
        ..Default::default()
    };
    let targets = overrides.apply(Targets::default());
    assert_eq!(targets.target_calories, 1800);
    assert_eq!(targets.target_protein, 150);
    assert_eq!(targets.target_carbs, 200);
    assert_eq!(targets.target_fat, 60);
}

#[test]
fn test_cmd_insight() {
    let config = Config::default();
    let totals = NutritionTotals::new(900.0, 40.0, 160.0, 20.0);
    let result = commands::cmd_insight(&config, &totals, &TargetOverrides::default(), Some(14), true);
    assert!(result.is_ok());
}

// ========== Progress Command Tests ==========

#[test]
fn test_parse_days() {
    let days = vec!["2026-10-15".to_string(), " ".to_string(), "2026-10-14".to_string()];
    let parsed = commands::parse_days(&days).unwrap();
    assert_eq!(parsed.len(), 2);

    assert!(commands::parse_days(&["10/15/2026".to_string()]).is_err());
}

#[test]
fn test_cmd_streak() {
    let config = Config::default();
    let days = vec!["2026-10-15".to_string(), "2026-10-14".to_string()];
    assert!(commands::cmd_streak(&config, &days, Some("2026-10-16"), None).is_ok());
    assert!(commands::cmd_streak(&config, &days, Some("not-a-date"), None).is_err());
}

#[test]
fn test_cmd_level() {
    assert!(commands::cmd_level(0).is_ok());
    assert!(commands::cmd_level(250).is_ok());
}

// ========== Day Command Tests ==========

#[test]
fn test_build_day_report() {
    let config = Config::default();
    let log = DayLog::from_json(DAY_LOG).unwrap();
    let report = commands::build_day_report(&config, &log, day(), 15);

    assert_eq!(report.target_source, TargetSource::Computed);
    assert_eq!(report.targets.target_calories, 2873);
    assert_eq!(report.totals, NutritionTotals::new(1350.0, 35.0, 210.0, 30.0));
    assert_eq!(report.remaining.calories, 1523.0);
    assert_eq!(report.water_ml, 2250);
    assert_eq!(report.meals.morning, 1);
    assert_eq!(report.meals.afternoon, 1);
    assert_eq!(report.next_meal, MealSlot::Snack);

    assert_eq!(report.insight.rule, InsightRule::ProteinDeficit);
    assert_eq!(report.insight.suggested_next_meal, SuggestedMeal::HighProtein);

    assert_eq!(report.streak, 3);
    assert_eq!(report.awards, vec![AwardType::WaterGoal]);

    assert_eq!(report.week.len(), 7);
    assert_eq!(report.week[6].date, day());
    assert_eq!(report.week[5].calories, 300.0);
    assert_eq!(report.week[4].calories, 250.0);
    assert_eq!(report.week[0].calories, 0.0);
}

#[test]
fn test_build_day_report_stored_targets_win() {
    let config = Config::default();
    let mut log = DayLog::from_json(DAY_LOG).unwrap();
    log.targets = Some(Targets {
        target_calories: 1400,
        target_protein: 40,
        target_carbs: 250,
        target_fat: 45,
    });

    let report = commands::build_day_report(&config, &log, day(), 21);
    assert_eq!(report.target_source, TargetSource::Stored);
    // 1350 of 1400 kcal
    assert_eq!(report.insight.rule, InsightRule::TargetMet);
    assert!(report.awards.contains(&AwardType::GoalReached));
}

#[test]
fn test_build_day_report_incomplete_stored_targets_recomputed() {
    let config = Config::default();
    let log_json = DAY_LOG.replacen(
        r#""meals": ["#,
        r#""targets": { "target_calories": 1800 }, "meals": ["#,
        1,
    );
    let log = DayLog::from_json(&log_json).unwrap();
    assert!(log.targets.is_none());

    let report = commands::build_day_report(&config, &log, day(), 15);
    assert_eq!(report.target_source, TargetSource::Computed);
    assert_eq!(report.targets.target_calories, 2873);
}

#[test]
fn test_build_day_report_unknown_profile_values() {
    let config = Config::default();
    let log_json = DAY_LOG
        .replacen(r#""activity_level": "moderate""#, r#""activity_level": "extra_active""#, 1)
        .replacen(r#""goal": "maintain""#, r#""goal": "recomp""#, 1);
    let log = DayLog::from_json(&log_json).unwrap();

    let report = commands::build_day_report(&config, &log, day(), 15);
    assert_eq!(report.target_source, TargetSource::Computed);
    // Sedentary maintenance: 1853.6 kcal BMR x 1.2
    assert_eq!(report.targets.target_calories, 2224);
}

#[test]
fn test_build_day_report_empty_log() {
    let config = Config::default();
    let log = DayLog::from_json("{}").unwrap();
    let report = commands::build_day_report(&config, &log, day(), 9);

    assert_eq!(report.target_source, TargetSource::Fallback);
    assert_eq!(report.targets, Targets::default());
    assert_eq!(report.insight.rule, InsightRule::ZeroIntake);
    assert_eq!(report.insight.suggested_next_meal, SuggestedMeal::Balanced);
    assert_eq!(report.streak, 0);
    assert!(report.awards.is_empty());
}

#[test]
fn test_cmd_day() {
    let config = Config::default();
    let file = write_temp(DAY_LOG);
    assert!(commands::cmd_day(&config, file.path(), Some("2026-10-16"), Some(15), false).is_ok());
    assert!(commands::cmd_day(&config, file.path(), Some("2026-10-16"), None, true).is_ok());
}

#[test]
fn test_cmd_day_invalid_log() {
    let config = Config::default();
    let file = write_temp("{ not json");
    assert!(commands::cmd_day(&config, file.path(), Some("2026-10-16"), Some(9), false).is_err());
}

// ========== Food Command Tests ==========

const CATALOG: &str = r#"{"products": [
    {"product_name": "Red Lentil Soup", "brands": "Anadolu",
     "nutriments": {"energy-kcal_100g": 56, "proteins_100g": 3.6, "carbohydrates_100g": 8.1, "fat_100g": 1.2}},
    {"product_name": "Lentil Chips", "nutriments": {"energy-kcal_100g": 480}},
    {"product_name": "Water", "nutriments": {"energy-kcal_100g": 0}}
]}"#;

#[tokio::test]
async fn test_catalog_source_search() {
    use rebalance_core::food::FoodSource;

    let file = write_temp(CATALOG);
    let source = commands::CatalogSource::open(file.path()).unwrap();

    let items = source.search("lentil").await.unwrap();
    assert_eq!(items.len(), 2);
    let by_brand = source.search("anadolu").await.unwrap();
    assert_eq!(by_brand.len(), 1);
    assert!(source.lookup_barcode("123").await.is_err());
}

#[tokio::test]
async fn test_cmd_food() {
    let config = Config::default();
    let file = write_temp(CATALOG);
    assert!(commands::cmd_food(&config, "Lentil", file.path(), Some(250.0)).await.is_ok());
    assert!(commands::cmd_food(&config, "pizza", file.path(), None).await.is_ok());
}

#[test]
fn test_refresh_command_uses_food_config() {
    let mut config = Config::default();
    config.food.base_url = "http://localhost:9000".to_string();
    let endpoint = rebalance_core::food::openfoodfacts::Endpoint::from_config(&config.food);

    let command = commands::refresh_command(&endpoint, "red lentil");
    assert!(command.starts_with("curl -A 'Rebalance - Nutrition Tracker - 1.0' 'http://localhost:9000/cgi/search.pl?"));
    assert!(command.contains("search_terms=red%20lentil"));
}

#[test]
fn test_catalog_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(commands::CatalogSource::open(&dir.path().join("missing.json")).is_err());
}

// ========== Parse AI Command Tests ==========

#[test]
fn test_read_logged_input() {
    use rebalance_core::ai::LoggedInput;

    let file = write_temp("```json\n{\"type\": \"water\", \"amount\": 330}\n```");
    let input = commands::read_logged_input(file.path()).unwrap();
    assert_eq!(input, LoggedInput::Water { amount: 330 });
}

#[test]
fn test_cmd_parse_ai() {
    let food = write_temp(
        r#"{"type": "food", "data": {"name": "Lahmacun", "calories": 420, "protein": 18,
            "carbs": 55, "fat": 14, "portion_desc": "Estimating for 1 piece"}}"#,
    );
    assert!(commands::cmd_parse_ai(food.path()).is_ok());

    let garbage = write_temp("Sorry, I couldn't understand.");
    assert!(commands::cmd_parse_ai(garbage.path()).is_err());
}

// ========== Shared Helpers ==========

#[test]
fn test_parse_date() {
    assert_eq!(commands::parse_date(" 2026-10-16 ").unwrap(), day());
    assert!(commands::parse_date("2026-13-01").is_err());
}

#[test]
fn test_percent() {
    assert_eq!(commands::percent(0.5), "50%");
    assert_eq!(commands::percent(1.0), "100%");
}

#[test]
fn test_load_config_from_file() {
    let file = write_temp("[streak]\nlookback_days = 14\n");
    let config = commands::load_config(Some(file.path())).unwrap();
    assert_eq!(config.streak.lookback_days, 14);
}
