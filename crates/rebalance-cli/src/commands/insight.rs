//! Insight classification command

use anyhow::Result;
use chrono::Timelike;
use rebalance_core::insights::{classify_daily_insight, Insight, Severity};
use rebalance_core::models::{NutritionTotals, Targets};
use rebalance_core::totals::MealSlot;
use rebalance_core::Config;

/// Per-field target overrides from the command line
#[derive(Debug, Default, Clone, Copy)]
pub struct TargetOverrides {
    pub calories: Option<i64>,
    pub protein: Option<i64>,
    pub carbs: Option<i64>,
    pub fat: Option<i64>,
}

impl TargetOverrides {
    /// Apply the overrides on top of base targets
    pub fn apply(&self, base: Targets) -> Targets {
        Targets {
            target_calories: self.calories.unwrap_or(base.target_calories),
            target_protein: self.protein.unwrap_or(base.target_protein),
            target_carbs: self.carbs.unwrap_or(base.target_carbs),
            target_fat: self.fat.unwrap_or(base.target_fat),
        }
    }
}

pub fn current_hour() -> u32 {
    chrono::Local::now().hour()
}

pub fn cmd_insight(
    config: &Config,
    totals: &NutritionTotals,
    overrides: &TargetOverrides,
    hour: Option<u32>,
    json: bool,
) -> Result<()> {
    let targets = overrides.apply(config.goals.targets);
    let hour = hour.unwrap_or_else(current_hour);
    let insight = classify_daily_insight(totals, &targets, hour);

    if json {
        println!("{}", serde_json::to_string_pretty(&insight)?);
    } else {
        println!();
        print_insight(&insight, hour);
        println!();
    }
    Ok(())
}

pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "💡",
        Severity::Warning => "⚠️ ",
        Severity::Success => "✅",
    }
}

/// Print an insight block (shared with the day summary)
pub fn print_insight(insight: &Insight, hour: u32) {
    println!("{} {}", severity_icon(insight.severity), insight.title);
    println!("   {}", insight.message);
    println!(
        "   Next meal ({}): {}",
        MealSlot::from_hour(hour),
        insight.suggested_next_meal
    );
}
