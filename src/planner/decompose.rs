use std::collections::BTreeMap;

use crate::models::{ActivityLevel, MealTargets, MealType, NutritionTargets, WeightGoal};
use crate::planner::constants::*;

/// Calorie fraction of the day assigned to each meal slot.
///
/// Fractions sum to 1.0; for moderately/very active users 0.05 of the share
/// moves from dinner to snack (never outside the four slots).
pub fn meal_calorie_distribution(
    goal: WeightGoal,
    activity_level: ActivityLevel,
) -> BTreeMap<MealType, f64> {
    let (breakfast, lunch, mut dinner, mut snack) = match goal {
        WeightGoal::Loss => (0.30, 0.35, 0.25, 0.10),
        WeightGoal::Gain => (0.25, 0.30, 0.35, 0.10),
        WeightGoal::Maintain => (0.25, 0.35, 0.30, 0.10),
    };

    if matches!(
        activity_level,
        ActivityLevel::VeryActive | ActivityLevel::ModeratelyActive
    ) {
        dinner -= ACTIVITY_SNACK_SHIFT;
        snack += ACTIVITY_SNACK_SHIFT;
    }

    BTreeMap::from([
        (MealType::Breakfast, breakfast),
        (MealType::Lunch, lunch),
        (MealType::Dinner, dinner),
        (MealType::Snack, snack),
    ])
}

/// Protein/carb/fat fraction of a meal's calories, keyed by (goal, meal type).
///
/// Each cell sums to 1.0. Breakfast skews protein-heavy under loss; dinner
/// skews carb-heavy under gain.
pub fn meal_macro_ratios(goal: WeightGoal, meal_type: MealType) -> (f64, f64, f64) {
    match (goal, meal_type) {
        (WeightGoal::Loss, MealType::Breakfast) => (0.40, 0.35, 0.25),
        (WeightGoal::Loss, MealType::Lunch) => (0.35, 0.40, 0.25),
        (WeightGoal::Loss, MealType::Dinner) => (0.35, 0.35, 0.30),
        (WeightGoal::Loss, MealType::Snack) => (0.30, 0.40, 0.30),

        (WeightGoal::Gain, MealType::Breakfast) => (0.30, 0.45, 0.25),
        (WeightGoal::Gain, MealType::Lunch) => (0.25, 0.50, 0.25),
        (WeightGoal::Gain, MealType::Dinner) => (0.20, 0.55, 0.25),
        (WeightGoal::Gain, MealType::Snack) => (0.25, 0.45, 0.30),

        (WeightGoal::Maintain, MealType::Breakfast) => (0.30, 0.45, 0.25),
        (WeightGoal::Maintain, MealType::Lunch) => (0.25, 0.50, 0.25),
        (WeightGoal::Maintain, MealType::Dinner) => (0.25, 0.45, 0.30),
        (WeightGoal::Maintain, MealType::Snack) => (0.20, 0.50, 0.30),
    }
}

/// Fiber target for a meal slot, grams.
pub fn fiber_target(meal_type: MealType) -> f64 {
    match meal_type {
        MealType::Snack => FIBER_TARGET_SNACK,
        _ => FIBER_TARGET_MAIN,
    }
}

/// Split the daily targets into absolute targets for one meal slot.
pub fn decompose_targets(
    targets: &NutritionTargets,
    goal: WeightGoal,
    activity_level: ActivityLevel,
    meal_type: MealType,
) -> MealTargets {
    let distribution = meal_calorie_distribution(goal, activity_level);
    let calorie_fraction = distribution[&meal_type];
    let meal_calories = targets.target_calories * calorie_fraction;

    let (protein_frac, carb_frac, fat_frac) = meal_macro_ratios(goal, meal_type);

    MealTargets {
        target_calories: meal_calories,
        target_protein_g: meal_calories * protein_frac / KCAL_PER_G_PROTEIN,
        target_carbs_g: meal_calories * carb_frac / KCAL_PER_G_CARBS,
        target_fat_g: meal_calories * fat_frac / KCAL_PER_G_FAT,
        target_fiber_g: fiber_target(meal_type),
    }
}
