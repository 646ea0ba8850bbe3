use crate::models::{MealTargets, MealType, Recipe, WeightGoal};
use crate::planner::constants::*;

/// Per-nutrient weights of the fit score.
#[derive(Debug, Clone, Copy)]
struct ScoreWeights {
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
}

/// Goal base weights, then meal-type multipliers applied in place.
///
/// The multipliers are deliberately not renormalized; the weighted sum is an
/// emphasis mechanism, not a probability distribution.
fn score_weights(goal: WeightGoal, meal_type: MealType) -> ScoreWeights {
    let mut weights = match goal {
        WeightGoal::Loss => ScoreWeights {
            calories: 0.40,
            protein: 0.30,
            carbs: 0.15,
            fat: 0.10,
            fiber: 0.10,
        },
        WeightGoal::Gain | WeightGoal::Maintain => ScoreWeights {
            calories: 0.40,
            protein: 0.25,
            carbs: 0.25,
            fat: 0.10,
            fiber: 0.10,
        },
    };

    match meal_type {
        MealType::Breakfast => weights.protein *= 1.2,
        MealType::Dinner if goal == WeightGoal::Loss => weights.calories *= 1.3,
        MealType::Snack => weights.fat *= 1.2,
        _ => {}
    }

    weights
}

/// Gaussian decay of the distance between actual and target, in (0, 1].
///
/// One standard deviation is `tolerance` of the target; a zero target is
/// treated as 1 unit to keep the denominator alive.
fn gaussian_fit(actual: f64, target: f64, tolerance: f64) -> f64 {
    let sigma = tolerance * target.max(1.0);
    let diff = actual - target;
    (-(diff * diff) / (2.0 * sigma * sigma)).exp()
}

/// Score one candidate recipe against a meal's decomposed targets.
///
/// Returns a value in [0, 1]: a weighted sum of Gaussian fits for calories,
/// protein, carbs, fat and fiber, plus small closeness bonuses, hard-capped.
pub fn nutritional_score(
    recipe: &Recipe,
    meal_targets: &MealTargets,
    goal: WeightGoal,
    meal_type: MealType,
) -> f64 {
    let weights = score_weights(goal, meal_type);

    let weighted_sum = weights.calories
        * gaussian_fit(recipe.calories, meal_targets.target_calories, SCORE_TOLERANCE)
        + weights.protein
            * gaussian_fit(recipe.protein, meal_targets.target_protein_g, SCORE_TOLERANCE)
        + weights.carbs
            * gaussian_fit(recipe.carbs, meal_targets.target_carbs_g, SCORE_TOLERANCE)
        + weights.fat * gaussian_fit(recipe.fats, meal_targets.target_fat_g, SCORE_TOLERANCE)
        + weights.fiber
            * gaussian_fit(recipe.fiber, meal_targets.target_fiber_g, SCORE_TOLERANCE);

    let mut bonus = 0.0;

    // Calorie closeness chain; first satisfied branch wins.
    let calorie_dev = (recipe.calories - meal_targets.target_calories).abs()
        / meal_targets.target_calories.max(1.0);
    if calorie_dev <= 0.02 {
        bonus += 0.05;
    } else if calorie_dev <= 0.05 {
        bonus += 0.03;
    } else if recipe.protein >= 0.8 * meal_targets.target_protein_g {
        bonus += 0.03;
    }

    // Protein-calorie ratio bonus, skipped for a degenerate calorie target.
    if meal_targets.target_calories > 0.0 {
        let recipe_ratio = recipe.protein * KCAL_PER_G_PROTEIN / recipe.calories.max(1.0);
        let target_ratio = meal_targets.target_protein_g * KCAL_PER_G_PROTEIN
            / meal_targets.target_calories.max(1.0);
        if (recipe_ratio - target_ratio).abs() <= 0.05 {
            bonus += 0.02;
        }
    }

    (weighted_sum + bonus).min(1.0)
}
