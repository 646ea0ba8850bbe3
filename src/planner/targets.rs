use crate::models::{ActivityLevel, Gender, MacroTargets, NutritionTargets, UserProfile, WeightGoal};
use crate::planner::constants::*;

/// Basal metabolic rate via Mifflin-St Jeor, kcal/day.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    let bmr = match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };
    round2(bmr)
}

/// Activity multiplier applied to BMR.
pub fn activity_multiplier(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
    }
}

/// Total daily energy expenditure, kcal/day.
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    round2(bmr * activity_multiplier(activity_level))
}

/// Goal-adjusted daily calorie target: tdee minus/plus 500 for loss/gain.
pub fn calculate_target_calories(tdee: f64, goal: WeightGoal) -> f64 {
    match goal {
        WeightGoal::Loss => round2(tdee - GOAL_CALORIE_DELTA),
        WeightGoal::Gain => round2(tdee + GOAL_CALORIE_DELTA),
        WeightGoal::Maintain => tdee,
    }
}

/// Protein target in grams per kg of body weight.
fn protein_g_per_kg(goal: WeightGoal, activity_level: ActivityLevel) -> f64 {
    let base = match goal {
        WeightGoal::Loss => 2.0,
        WeightGoal::Gain => 2.2,
        WeightGoal::Maintain => 1.6,
    };
    let bump = match activity_level {
        ActivityLevel::Sedentary | ActivityLevel::LightlyActive => 0.0,
        ActivityLevel::ModeratelyActive => 0.1,
        ActivityLevel::VeryActive => 0.2,
    };
    base + bump
}

/// Carbohydrate target in grams per kg of body weight.
fn carbs_g_per_kg(goal: WeightGoal, activity_level: ActivityLevel) -> f64 {
    let base = match goal {
        WeightGoal::Loss => 2.5,
        WeightGoal::Gain => 4.5,
        WeightGoal::Maintain => 3.5,
    };
    let bump = match activity_level {
        ActivityLevel::Sedentary => 0.0,
        ActivityLevel::LightlyActive => 0.25,
        ActivityLevel::ModeratelyActive => 0.5,
        ActivityLevel::VeryActive => 1.0,
    };
    base + bump
}

/// Minimum fraction of target calories that should come from fat.
fn min_fat_fraction(goal: WeightGoal) -> f64 {
    match goal {
        WeightGoal::Loss => 0.20,
        WeightGoal::Gain | WeightGoal::Maintain => 0.25,
    }
}

/// Daily macro targets in grams.
///
/// Protein and carbs come from body-weight-scaled tables; fat is the calorie
/// residual, computed last. When the residual would leave fat below the goal's
/// minimum fraction, the rebalancing pass reduces carbs by up to 20% of their
/// grams and recomputes fat from the remainder.
pub fn calculate_target_macros(
    target_calories: f64,
    goal: WeightGoal,
    weight_kg: f64,
    activity_level: ActivityLevel,
) -> MacroTargets {
    let protein_g = protein_g_per_kg(goal, activity_level) * weight_kg;
    let mut carbs_g = carbs_g_per_kg(goal, activity_level) * weight_kg;

    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;
    let fat_floor_kcal = target_calories * min_fat_fraction(goal);

    let residual_kcal = target_calories - protein_kcal - carbs_g * KCAL_PER_G_CARBS;
    if residual_kcal < fat_floor_kcal {
        // The three macros overrun the budget; pull carbs back toward the fat
        // floor, capped at 20% of their grams.
        let carbs_needed_g =
            ((target_calories - fat_floor_kcal - protein_kcal) / KCAL_PER_G_CARBS).max(0.0);
        let reduction = (carbs_g - carbs_needed_g).min(carbs_g * CARB_REDUCTION_CAP);
        carbs_g -= reduction.max(0.0);
    }

    let fat_g =
        ((target_calories - protein_kcal - carbs_g * KCAL_PER_G_CARBS) / KCAL_PER_G_FAT).max(0.0);

    MacroTargets {
        protein_g: round1(protein_g),
        carbs_g: round1(carbs_g),
        fat_g: round1(fat_g),
    }
}

/// Derive all daily targets for a profile in one pass.
pub fn targets_for_profile(profile: &UserProfile) -> NutritionTargets {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level);
    let target_calories = calculate_target_calories(tdee, profile.weight_goal);
    let target_macros = calculate_target_macros(
        target_calories,
        profile.weight_goal,
        profile.weight_kg,
        profile.activity_level,
    );

    NutritionTargets {
        bmr,
        tdee,
        target_calories,
        target_macros,
    }
}
