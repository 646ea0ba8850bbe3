mod plan;
mod profile;
mod recipe;
mod targets;

pub use plan::{DailySummary, DayPlan, MealPlan, NutritionSummary, PlannedMeal};
pub use profile::{
    ActivityLevel, DietaryPreference, Gender, UserProfile, WeightGoal, AGE_RANGE, HEIGHT_CM_RANGE,
    WEIGHT_KG_RANGE,
};
pub use recipe::{DietCategory, MealType, Recipe, ScoredRecipe};
pub use targets::{MacroTargets, MealTargets, NutritionTargets};
