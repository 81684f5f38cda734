//! Day summary command
//!
//! Reads an exported day log and prints what the dashboard shows: totals
//! against targets, the rebalance insight, the streak and the past week.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rebalance_core::gamification::{daily_awards, AwardType};
use rebalance_core::insights::{classify_daily_insight, Insight};
use rebalance_core::models::{
    deserialize_stored_targets, BiometricProfile, DailyGoals, MealEntry, NutritionTotals, Targets,
    WaterLog,
};
use rebalance_core::streak::{active_days, compute_streak};
use rebalance_core::targets::{resolve_targets, TargetSource};
use rebalance_core::totals::{
    calorie_progress, group_by_period, remaining, total_water_ml, weekly_summary, DaySummary,
    MealPeriod, MealSlot, Remaining,
};
use rebalance_core::Config;
use serde::{Deserialize, Serialize};

use super::{date_or_today, percent, print_insight};

/// Hour used for days other than today when no hour is given
const END_OF_DAY_HOUR: u32 = 23;

/// Exported log: optional profile/targets plus raw entries (any number of days)
#[derive(Debug, Default, Deserialize)]
pub struct DayLog {
    #[serde(default)]
    pub profile: Option<BiometricProfile>,
    #[serde(default, deserialize_with = "deserialize_stored_targets")]
    pub targets: Option<Targets>,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    #[serde(default)]
    pub water: Vec<WaterLog>,
}

impl DayLog {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid day log JSON")
    }
}

/// Number of meals in each period of the day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PeriodCounts {
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
    pub night: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub hour: u32,
    pub targets: Targets,
    pub target_source: TargetSource,
    pub totals: NutritionTotals,
    pub remaining: Remaining,
    pub calorie_progress: f64,
    pub water_ml: u32,
    pub water_goal_ml: u32,
    pub meals: PeriodCounts,
    pub next_meal: MealSlot,
    pub insight: Insight,
    pub streak: u32,
    pub awards: Vec<AwardType>,
    pub week: Vec<DaySummary>,
}

/// Build the report for one day of a log
pub fn build_day_report(config: &Config, log: &DayLog, date: NaiveDate, hour: u32) -> DayReport {
    let profile = log.profile.clone().unwrap_or_default();
    let (targets, target_source) = resolve_targets(log.targets, &profile);

    let todays_meals: Vec<MealEntry> = log.meals.iter().filter(|m| m.date() == date).cloned().collect();
    let totals = NutritionTotals::from_meals(&todays_meals);
    let water_ml = total_water_ml(log.water.iter().filter(|w| w.logged_at.date_naive() == date));

    let grouped = group_by_period(&todays_meals);
    let meals = PeriodCounts {
        morning: grouped.get(MealPeriod::Morning).len(),
        afternoon: grouped.get(MealPeriod::Afternoon).len(),
        evening: grouped.get(MealPeriod::Evening).len(),
        night: grouped.get(MealPeriod::Night).len(),
    };

    let goals = DailyGoals {
        targets,
        target_water_ml: config.goals.target_water_ml,
    };

    let days = active_days(log.meals.iter().map(|m| m.logged_at));
    let streak = compute_streak(&days, date, config.streak.lookback_days);

    DayReport {
        date,
        hour,
        targets,
        target_source,
        totals,
        remaining: remaining(&totals, &targets),
        calorie_progress: calorie_progress(&totals, &targets),
        water_ml,
        water_goal_ml: goals.target_water_ml,
        meals,
        next_meal: MealSlot::from_hour(hour),
        insight: classify_daily_insight(&totals, &targets, hour),
        streak,
        awards: daily_awards(&totals, water_ml, &goals),
        week: weekly_summary(&log.meals, &log.water, date),
    }
}

pub fn cmd_day(
    config: &Config,
    log_path: &Path,
    date: Option<&str>,
    hour: Option<u32>,
    json: bool,
) -> Result<()> {
    let content = fs::read_to_string(log_path)
        .with_context(|| format!("Failed to read day log {}", log_path.display()))?;
    let log = DayLog::from_json(&content)?;

    let date = date_or_today(date)?;
    let hour = hour.unwrap_or_else(|| {
        if date == chrono::Local::now().date_naive() {
            super::current_hour()
        } else {
            END_OF_DAY_HOUR
        }
    });

    tracing::debug!(
        meals = log.meals.len(),
        water = log.water.len(),
        %date,
        hour,
        "Building day report"
    );
    let report = build_day_report(config, &log, date, hour);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(r: &DayReport) {
    let t = &r.targets;

    println!();
    println!("📅 {}  ({} targets)", r.date.format("%A %Y-%m-%d"), r.target_source.as_str());
    println!("   ─────────────────────────────────────────────");
    println!(
        "   Calories: {:>6.0} / {:<5} kcal  {}  ({:.0} left)",
        r.totals.calories,
        t.target_calories,
        percent(r.calorie_progress),
        r.remaining.calories
    );
    println!(
        "   Protein:  {:>6.0} / {:<5} g     ({:.0} left)",
        r.totals.protein, t.target_protein, r.remaining.protein
    );
    println!(
        "   Carbs:    {:>6.0} / {:<5} g     ({:.0} left)",
        r.totals.carbs, t.target_carbs, r.remaining.carbs
    );
    println!(
        "   Fat:      {:>6.0} / {:<5} g     ({:.0} left)",
        r.totals.fat, t.target_fat, r.remaining.fat
    );
    println!("   Water:    {:>6} / {:<5} ml", r.water_ml, r.water_goal_ml);
    println!(
        "   Meals:    {} morning · {} afternoon · {} evening · {} night",
        r.meals.morning, r.meals.afternoon, r.meals.evening, r.meals.night
    );

    println!();
    print_insight(&r.insight, r.hour);

    println!();
    println!("🔥 Streak: {} day{}", r.streak, if r.streak == 1 { "" } else { "s" });
    for award in &r.awards {
        println!("🏅 {} (+{})", award.label(), award.points());
    }

    println!();
    println!("   Last 7 days:");
    for day in &r.week {
        println!("   {}  {:>6.0} kcal  {:>5} ml", day.label, day.calories, day.water_ml);
    }
    println!();
}
