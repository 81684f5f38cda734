//! Model reply parsing command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rebalance_core::ai::{parse_logged_input, LoggedInput};

/// Parse a saved reply into a logged input
pub fn read_logged_input(path: &Path) -> Result<LoggedInput> {
    let reply = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reply {}", path.display()))?;
    parse_logged_input(&reply).with_context(|| format!("Could not parse reply in {}", path.display()))
}

pub fn cmd_parse_ai(path: &Path) -> Result<()> {
    let input = read_logged_input(path)?;

    println!();
    match &input {
        LoggedInput::Water { amount } => {
            println!("💧 Water: {} ml", amount);
        }
        LoggedInput::Food { data } => {
            println!("🍽️  {}", data.name);
            println!(
                "   {:.0} kcal · P {:.0} g · C {:.0} g · F {:.0} g",
                data.calories, data.protein, data.carbs, data.fat
            );
            if let Some(confidence) = data.confidence {
                println!("   Confidence: {}", confidence);
            }
            if let Some(portion) = &data.portion_desc {
                println!("   {}", portion);
            }
        }
    }
    println!();
    Ok(())
}
