//! Streak and level commands

use std::collections::HashSet;

use anyhow::Result;
use chrono::NaiveDate;
use rebalance_core::gamification::level_info;
use rebalance_core::streak::compute_streak;
use rebalance_core::Config;

use super::{date_or_today, parse_date, percent};

/// Parse day arguments, skipping empty items from stray commas
pub fn parse_days(days: &[String]) -> Result<HashSet<NaiveDate>> {
    days.iter()
        .filter(|d| !d.trim().is_empty())
        .map(|d| parse_date(d))
        .collect()
}

pub fn cmd_streak(
    config: &Config,
    days: &[String],
    today: Option<&str>,
    lookback: Option<u32>,
) -> Result<()> {
    let active = parse_days(days)?;
    let today = date_or_today(today)?;
    let lookback = lookback.unwrap_or(config.streak.lookback_days);

    let streak = compute_streak(&active, today, lookback);
    tracing::debug!(days = active.len(), %today, lookback, streak, "Streak computed");

    let logged_today = active.contains(&today);
    println!();
    println!("🔥 Streak: {} day{}", streak, if streak == 1 { "" } else { "s" });
    if !logged_today && streak > 0 {
        println!("   Log something today to keep it going");
    }
    println!();
    Ok(())
}

pub fn cmd_level(points: u64) -> Result<()> {
    let info = level_info(points);
    println!();
    println!("⭐ Level {}", info.level);
    println!("   Points:   {}", points);
    println!("   Progress: {}", percent(info.progress));
    println!("   Next:     {} points to level {}", info.next_level_points, info.level + 1);
    println!();
    Ok(())
}
