//! Rebalance CLI - Nutrition targets and daily guidance
//!
//! Usage:
//!   rebalance targets --weight 80 --height 180 --age 30 --gender male
//!   rebalance insight --calories 900 --carbs 160 --hour 14
//!   rebalance streak --days 2026-10-14,2026-10-15
//!   rebalance day --log today.json
//!   rebalance food lentil --catalog search.json

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Targets {
            weight,
            height,
            age,
            gender,
            activity,
            goal,
            json,
        } => commands::cmd_targets(weight, height, age, &gender, &activity, &goal, json),
        Commands::Insight {
            calories,
            protein,
            carbs,
            fat,
            hour,
            target_calories,
            target_protein,
            target_carbs,
            target_fat,
            json,
        } => {
            let totals = rebalance_core::NutritionTotals::new(calories, protein, carbs, fat);
            let overrides = commands::TargetOverrides {
                calories: target_calories,
                protein: target_protein,
                carbs: target_carbs,
                fat: target_fat,
            };
            commands::cmd_insight(&config, &totals, &overrides, hour, json)
        }
        Commands::Streak {
            days,
            today,
            lookback,
        } => commands::cmd_streak(&config, &days, today.as_deref(), lookback),
        Commands::Level { points } => commands::cmd_level(points),
        Commands::Day {
            log,
            date,
            hour,
            json,
        } => commands::cmd_day(&config, &log, date.as_deref(), hour, json),
        Commands::Food {
            query,
            catalog,
            grams,
        } => commands::cmd_food(&config, &query, &catalog, grams).await,
        Commands::ParseAi { file } => commands::cmd_parse_ai(&file),
    }
}
