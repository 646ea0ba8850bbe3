pub mod assemble;
pub mod constants;
pub mod decompose;
pub mod filter;
pub mod scoring;
pub mod targets;
pub mod variety;

pub use assemble::generate_meal_plan;
pub use constants::*;
pub use decompose::{decompose_targets, fiber_target, meal_calorie_distribution, meal_macro_ratios};
pub use filter::{filter_by_dietary_preferences, required_allergen_tags};
pub use scoring::nutritional_score;
pub use targets::{
    calculate_bmr, calculate_target_calories, calculate_target_macros, calculate_tdee,
    targets_for_profile,
};
pub use variety::{apply_variety_penalties, select_recipe, SelectionConfig};
