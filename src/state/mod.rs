mod history;
mod persistence;
mod store;
mod usage;

pub use history::recent_recipe_history;
pub use persistence::{load_recipes, load_recipes_csv, load_recipes_json, save_plan};
pub use store::RecipeStore;
pub use usage::UsageState;
