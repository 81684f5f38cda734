//! Target calculation command

use anyhow::{anyhow, Context, Result};
use rebalance_core::models::{ActivityLevel, BiometricProfile, Gender, Goal};
use rebalance_core::targets::{compute_breakdown, TargetBreakdown};

/// Build a profile from command-line values
pub fn profile_from_args(
    weight: f64,
    height: f64,
    age: u32,
    gender: &str,
    activity: &str,
    goal: &str,
) -> Result<BiometricProfile> {
    let gender: Gender = gender.parse().map_err(|e: String| anyhow!(e))?;
    let activity_level: ActivityLevel = activity.parse().map_err(|e: String| anyhow!(e))?;
    let goal: Goal = goal.parse().map_err(|e: String| anyhow!(e))?;

    Ok(BiometricProfile {
        weight_kg: Some(weight),
        height_cm: Some(height),
        age: Some(age),
        gender,
        activity_level: Some(activity_level),
        goal: Some(goal),
    })
}

pub fn cmd_targets(
    weight: f64,
    height: f64,
    age: u32,
    gender: &str,
    activity: &str,
    goal: &str,
    json: bool,
) -> Result<()> {
    let profile = profile_from_args(weight, height, age, gender, activity, goal)?;
    let breakdown = compute_breakdown(&profile)
        .context("Weight, height and age must all be greater than zero")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    print_breakdown(&profile, &breakdown);
    Ok(())
}

fn print_breakdown(profile: &BiometricProfile, breakdown: &TargetBreakdown) {
    let t = &breakdown.targets;

    println!();
    println!("🎯 Daily Targets");
    println!("   ─────────────────────────────────────────────");
    println!(
        "   Profile:  {} · {} · goal {}",
        profile.gender,
        profile.activity_level.unwrap_or_default(),
        profile.goal.unwrap_or_default()
    );
    println!("   BMR:      {:.0} kcal", breakdown.bmr);
    println!("   TDEE:     {:.0} kcal", breakdown.tdee);
    println!();
    println!("   Calories: {:>5} kcal", t.target_calories);
    println!("   Protein:  {:>5} g", t.target_protein);
    println!("   Carbs:    {:>5} g", t.target_carbs);
    println!("   Fat:      {:>5} g", t.target_fat);

    if t.target_carbs < 0 {
        println!();
        println!("   ⚠️  Protein and fat exceed the calorie budget; carb target is negative");
    }
    println!();
}
