use clap::{Parser, Subcommand};

/// NutriPlan — a meal planning CLI that matches recipes against personalized
/// calorie and macro targets.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe dataset (CSV, or JSON by extension).
    #[arg(short, long, default_value = "recipes.csv")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a multi-day meal plan from the recipe dataset.
    Plan {
        /// Number of days to plan for.
        #[arg(short, long, default_value_t = 7)]
        days: u32,

        /// Seed for the stochastic recipe draw, for reproducible plans.
        #[arg(long)]
        seed: Option<u64>,

        /// Write the generated plan to a JSON file.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compute and show calorie and macro targets without planning.
    Targets,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            days: 7,
            seed: None,
            output: None,
        }
    }
}
