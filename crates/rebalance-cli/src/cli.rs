//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rebalance - Daily nutrition targets and next-meal guidance
#[derive(Parser)]
#[command(name = "rebalance")]
#[command(about = "Nutrition targets, daily insights and logging streaks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute daily calorie and macro targets from biometrics
    Targets {
        /// Body weight in kg
        #[arg(long)]
        weight: f64,

        /// Height in cm
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// male or female
        #[arg(long, default_value = "female")]
        gender: String,

        /// sedentary, light, moderate, active, very_active
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// lose, maintain, gain
        #[arg(long, default_value = "maintain")]
        goal: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify today's intake into a rebalance insight
    Insight {
        /// Calories eaten so far
        #[arg(long, default_value = "0")]
        calories: f64,

        /// Protein eaten so far (g)
        #[arg(long, default_value = "0")]
        protein: f64,

        /// Carbs eaten so far (g)
        #[arg(long, default_value = "0")]
        carbs: f64,

        /// Fat eaten so far (g)
        #[arg(long, default_value = "0")]
        fat: f64,

        /// Local hour 0-23 (defaults to now)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,

        /// Calorie target (defaults to config goals)
        #[arg(long)]
        target_calories: Option<i64>,

        /// Protein target in g
        #[arg(long)]
        target_protein: Option<i64>,

        /// Carb target in g
        #[arg(long)]
        target_carbs: Option<i64>,

        /// Fat target in g
        #[arg(long)]
        target_fat: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count the logging streak for a set of days
    Streak {
        /// Logged days (YYYY-MM-DD), comma separated
        #[arg(long, value_delimiter = ',')]
        days: Vec<String>,

        /// Day to count back from (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<String>,

        /// Days of history to examine (defaults to config)
        #[arg(long)]
        lookback: Option<u32>,
    },

    /// Show the level for a point total
    Level {
        /// Accumulated points
        #[arg(long)]
        points: u64,
    },

    /// Summarize a day from an exported log file
    Day {
        /// JSON day log: { profile?, targets?, meals: [...], water: [...] }
        #[arg(short, long)]
        log: PathBuf,

        /// Day to summarize (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Local hour 0-23 for the insight
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search a saved OpenFoodFacts export for a food
    Food {
        /// Food name to search for (at least 2 characters)
        query: String,

        /// Saved search response (JSON with a `products` array)
        #[arg(long)]
        catalog: PathBuf,

        /// Portion in grams to show as a meal entry
        #[arg(long)]
        grams: Option<f64>,
    },

    /// Parse a saved food-recognition reply as a logged input
    ParseAi {
        /// File containing the raw model reply
        #[arg(short, long)]
        file: PathBuf,
    },
}
