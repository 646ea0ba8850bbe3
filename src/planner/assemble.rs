use std::collections::HashMap;

use rand::Rng;

use crate::models::{
    DailySummary, DayPlan, MealPlan, MealType, NutritionSummary, NutritionTargets, PlannedMeal,
    Recipe, ScoredRecipe, UserProfile,
};
use crate::planner::constants::*;
use crate::planner::decompose::{decompose_targets, meal_calorie_distribution};
use crate::planner::filter::filter_by_dietary_preferences;
use crate::planner::scoring::nutritional_score;
use crate::planner::variety::{select_recipe, SelectionConfig};
use crate::state::{RecipeStore, UsageState};

/// Candidates within the ±5% calorie window around the slot target, falling
/// back to the full meal-type set when the window is empty.
fn calorie_window_filter<'a>(candidates: &[&'a Recipe], target_calories: f64) -> Vec<&'a Recipe> {
    let half_width = CALORIE_WINDOW * target_calories;
    let windowed: Vec<&Recipe> = candidates
        .iter()
        .filter(|r| (r.calories - target_calories).abs() <= half_width)
        .copied()
        .collect();

    if windowed.is_empty() {
        candidates.to_vec()
    } else {
        windowed
    }
}

/// Assemble a multi-day plan: for each day and meal slot, decompose targets,
/// score the eligible recipes and let the variety selector pick one.
///
/// Later slots depend on the usage state mutated by earlier slots, so the
/// loops run strictly in order. A slot with no candidates is left absent; the
/// daily summary still computes over the meals that were filled.
pub fn generate_meal_plan<R: Rng>(
    store: &RecipeStore,
    profile: &UserProfile,
    targets: &NutritionTargets,
    days: u32,
    history: &[String],
    config: &SelectionConfig,
    rng: &mut R,
) -> MealPlan {
    let suitable = filter_by_dietary_preferences(store, profile);

    let mut buckets: HashMap<MealType, Vec<&Recipe>> = HashMap::new();
    for recipe in suitable {
        buckets.entry(recipe.meal_type).or_default().push(recipe);
    }

    let mut usage = UsageState::seeded(history);
    let mut day_plans = Vec::with_capacity(days as usize);

    for day in 1..=days {
        let mut meals = Vec::new();
        let (mut cal, mut protein, mut carbs, mut fat) = (0.0, 0.0, 0.0, 0.0);

        for meal_type in MealType::ALL {
            let Some(bucket) = buckets.get(&meal_type) else {
                continue;
            };

            let meal_targets =
                decompose_targets(targets, profile.weight_goal, profile.activity_level, meal_type);

            let eligible = calorie_window_filter(bucket, meal_targets.target_calories);

            let mut scored: Vec<ScoredRecipe> = eligible
                .iter()
                .map(|&recipe| {
                    let mut score =
                        nutritional_score(recipe, &meal_targets, profile.weight_goal, meal_type);
                    if meal_type == MealType::Breakfast && recipe.protein < BREAKFAST_MIN_PROTEIN_G
                    {
                        score *= BREAKFAST_LOW_PROTEIN_PENALTY;
                    }
                    ScoredRecipe { recipe, score }
                })
                .collect();

            // Keep a deterministic order into the selector regardless of
            // bucket construction order.
            scored.sort_by(|a, b| a.recipe.key().cmp(&b.recipe.key()));

            let Some(selected) = select_recipe(&scored, &usage, config, rng) else {
                continue;
            };

            let score = scored
                .iter()
                .find(|c| c.recipe.key() == selected.key())
                .map(|c| c.score)
                .unwrap_or(0.0);

            usage.record(&selected.name);
            cal += selected.calories;
            protein += selected.protein;
            carbs += selected.carbs;
            fat += selected.fats;

            meals.push(PlannedMeal {
                meal_type,
                name: selected.name.clone(),
                calories: selected.calories,
                protein: selected.protein,
                carbs: selected.carbs,
                fats: selected.fats,
                score: round2(score),
                ingredients: selected.ingredients.clone(),
                instructions: selected.instructions.clone(),
            });
        }

        let variance =
            (cal - targets.target_calories) / targets.target_calories.max(1.0) * 100.0;

        day_plans.push(DayPlan {
            day,
            meals,
            daily_summary: DailySummary {
                total_calories: round1(cal),
                total_protein: round1(protein),
                total_carbs: round1(carbs),
                total_fat: round1(fat),
                target_calories: targets.target_calories,
                calorie_variance_pct: round1(variance),
                target_macros: targets.target_macros,
            },
        });
    }

    let avg_variance = if day_plans.is_empty() {
        0.0
    } else {
        day_plans
            .iter()
            .map(|d| d.daily_summary.calorie_variance_pct)
            .sum::<f64>()
            / day_plans.len() as f64
    };

    let summary = NutritionSummary {
        bmr: targets.bmr,
        tdee: targets.tdee,
        target_calories: targets.target_calories,
        target_macros: targets.target_macros,
        meal_distribution: meal_calorie_distribution(profile.weight_goal, profile.activity_level),
        avg_calorie_variance_pct: round1(avg_variance),
        recipes_used: usage.distinct_used(),
    };

    MealPlan {
        days: day_plans,
        summary,
    }
}
