use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{MacroTargets, MealType};

/// A selected meal for one slot of one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub meal_type: MealType,

    pub name: String,

    /// kcal for the whole recipe serving.
    pub calories: f64,

    /// Grams.
    pub protein: f64,

    /// Grams.
    pub carbs: f64,

    /// Grams.
    pub fats: f64,

    /// Nutritional fit score at selection time, in [0, 1].
    pub score: f64,

    #[serde(default)]
    pub ingredients: String,

    #[serde(default)]
    pub instructions: String,
}

/// Nutrient totals for one day against its target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub target_calories: f64,
    /// (actual - target) / target * 100.
    pub calorie_variance_pct: f64,
    pub target_macros: MacroTargets,
}

/// One planned day: a meal per filled slot plus the daily summary.
///
/// Slots the selector could not fill are simply absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub meals: Vec<PlannedMeal>,
    pub daily_summary: DailySummary,
}

impl DayPlan {
    /// Key used in display and JSON output: "day_1", "day_2", ...
    pub fn label(&self) -> String {
        format!("day_{}", self.day)
    }

    /// The meal filled for a given slot, if any.
    pub fn meal(&self, meal_type: MealType) -> Option<&PlannedMeal> {
        self.meals.iter().find(|m| m.meal_type == meal_type)
    }
}

/// Plan-level summary returned alongside the day plans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub target_macros: MacroTargets,
    /// Calorie fraction per meal type used for decomposition.
    pub meal_distribution: BTreeMap<MealType, f64>,
    /// Mean of per-day calorie variances, percent.
    pub avg_calorie_variance_pct: f64,
    /// Distinct recipes selected across the plan.
    pub recipes_used: usize,
}

/// The full multi-day plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub days: Vec<DayPlan>,
    pub summary: NutritionSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal(meal_type: MealType, name: &str) -> PlannedMeal {
        PlannedMeal {
            meal_type,
            name: name.to_string(),
            calories: 400.0,
            protein: 25.0,
            carbs: 45.0,
            fats: 12.0,
            score: 0.8,
            ingredients: String::new(),
            instructions: String::new(),
        }
    }

    #[test]
    fn test_day_label() {
        let day = DayPlan {
            day: 3,
            meals: vec![],
            daily_summary: DailySummary {
                total_calories: 0.0,
                total_protein: 0.0,
                total_carbs: 0.0,
                total_fat: 0.0,
                target_calories: 2000.0,
                calorie_variance_pct: -100.0,
                target_macros: MacroTargets {
                    protein_g: 120.0,
                    carbs_g: 200.0,
                    fat_g: 60.0,
                },
            },
        };
        assert_eq!(day.label(), "day_3");
    }

    #[test]
    fn test_meal_lookup_by_slot() {
        let day = DayPlan {
            day: 1,
            meals: vec![
                sample_meal(MealType::Breakfast, "Oats"),
                sample_meal(MealType::Dinner, "Curry"),
            ],
            daily_summary: DailySummary {
                total_calories: 800.0,
                total_protein: 50.0,
                total_carbs: 90.0,
                total_fat: 24.0,
                target_calories: 2000.0,
                calorie_variance_pct: -60.0,
                target_macros: MacroTargets {
                    protein_g: 120.0,
                    carbs_g: 200.0,
                    fat_g: 60.0,
                },
            },
        };

        assert_eq!(day.meal(MealType::Breakfast).unwrap().name, "Oats");
        assert!(day.meal(MealType::Lunch).is_none());
    }
}
