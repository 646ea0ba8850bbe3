use serde::{Deserialize, Serialize};

/// Daily macro targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroTargets {
    /// Total energy of the macro targets (4 kcal/g protein and carbs, 9 kcal/g fat).
    pub fn total_kcal(&self) -> f64 {
        self.protein_g * 4.0 + self.carbs_g * 4.0 + self.fat_g * 9.0
    }
}

/// Daily calorie and macro targets derived from a user profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Basal metabolic rate, kcal/day.
    pub bmr: f64,
    /// Total daily energy expenditure, kcal/day.
    pub tdee: f64,
    /// Goal-adjusted daily calorie target, kcal/day.
    pub target_calories: f64,
    pub target_macros: MacroTargets,
}

/// Decomposed targets for one meal slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MealTargets {
    pub target_calories: f64,
    pub target_protein_g: f64,
    pub target_carbs_g: f64,
    pub target_fat_g: f64,
    pub target_fiber_g: f64,
}
