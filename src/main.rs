use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use nutri_plan_rs::cli::{Cli, Command};
use nutri_plan_rs::error::{PlanError, Result};
use nutri_plan_rs::interface::{collect_user_profile, display_meal_plan, display_targets};
use nutri_plan_rs::planner::{generate_meal_plan, targets_for_profile, SelectionConfig};
use nutri_plan_rs::state::{load_recipes, recent_recipe_history, save_plan, RecipeStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { days, seed, output } => cmd_plan(&cli.file, days, seed, output.as_deref()),
        Command::Targets => cmd_targets(),
    }
}

/// Collect a profile and generate a day-by-day plan.
fn cmd_plan(file_path: &str, days: u32, seed: Option<u64>, output: Option<&str>) -> Result<()> {
    let path = Path::new(file_path);
    if !path.exists() {
        eprintln!("Recipe dataset not found: {}", file_path);
        eprintln!("Provide a CSV or JSON recipe table via --file.");
        return Ok(());
    }

    let recipes = load_recipes(path)?;
    let store = RecipeStore::new(recipes);
    if store.is_empty() {
        return Err(PlanError::EmptyRecipeTable);
    }
    println!("Loaded {} recipes", store.len());
    println!();

    let profile = collect_user_profile()?;
    let targets = targets_for_profile(&profile);
    display_targets(&targets);

    if days == 0 {
        println!("No days requested, nothing to plan.");
        return Ok(());
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let history = recent_recipe_history(14);
    let plan = generate_meal_plan(
        &store,
        &profile,
        &targets,
        days,
        &history,
        &SelectionConfig::default(),
        &mut rng,
    );

    display_meal_plan(&plan);

    if let Some(output) = output {
        save_plan(output, &plan)?;
        println!("Plan written to {}", output);
    }

    Ok(())
}

/// Compute and print targets only.
fn cmd_targets() -> Result<()> {
    let profile = collect_user_profile()?;
    let targets = targets_for_profile(&profile);
    display_targets(&targets);
    Ok(())
}
