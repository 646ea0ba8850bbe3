use std::collections::{BTreeSet, HashMap};

use rand::rngs::StdRng;
use rand::SeedableRng;

use nutri_plan_rs::models::{
    ActivityLevel, DietCategory, DietaryPreference, Gender, MealType, Recipe, UserProfile,
    WeightGoal,
};
use nutri_plan_rs::planner::{generate_meal_plan, targets_for_profile, SelectionConfig};
use nutri_plan_rs::state::RecipeStore;

fn recipe(
    name: &str,
    meal_type: MealType,
    category: DietCategory,
    tags: &[&str],
    calories: f64,
    protein: f64,
) -> Recipe {
    Recipe {
        name: name.to_string(),
        meal_type,
        category,
        allergen_free: tags.iter().map(|t| t.to_string()).collect(),
        calories,
        protein,
        carbs: calories * 0.45 / 4.0,
        fats: calories * 0.25 / 9.0,
        fiber: 5.0,
        ingredients: "mixed".to_string(),
        instructions: "Cook and serve.".to_string(),
    }
}

// Calories clustered inside the ±5% windows around the decomposed targets of
// the sample profile (loss, sedentary: 443.6/517.5/369.6/147.9 kcal), so each
// slot keeps several candidates after the calorie pre-filter.
fn sample_store() -> RecipeStore {
    let mut recipes = Vec::new();
    for i in 0..8 {
        let category = if i % 2 == 0 {
            DietCategory::Vegan
        } else {
            DietCategory::NonVeg
        };
        let tags: &[&str] = if i % 3 == 0 {
            &["gluten-free", "nuts-free"]
        } else {
            &["gluten-free"]
        };

        recipes.push(recipe(
            &format!("Breakfast {}", i),
            MealType::Breakfast,
            category,
            tags,
            432.0 + i as f64 * 4.0,
            10.0 + i as f64 * 2.0,
        ));
        recipes.push(recipe(
            &format!("Lunch {}", i),
            MealType::Lunch,
            category,
            tags,
            500.0 + i as f64 * 5.0,
            26.0 + i as f64,
        ));
        recipes.push(recipe(
            &format!("Dinner {}", i),
            MealType::Dinner,
            category,
            tags,
            358.0 + i as f64 * 4.0,
            28.0 + i as f64,
        ));
        recipes.push(recipe(
            &format!("Snack {}", i),
            MealType::Snack,
            category,
            tags,
            141.0 + i as f64 * 2.0,
            5.0 + i as f64,
        ));
    }
    RecipeStore::new(recipes)
}

fn profile(pref: DietaryPreference, allergies: &[&str]) -> UserProfile {
    UserProfile::new(
        30,
        175.0,
        70.0,
        Gender::Male,
        ActivityLevel::Sedentary,
        WeightGoal::Loss,
        pref,
        allergies.iter().map(|a| a.to_string()).collect::<BTreeSet<_>>(),
    )
    .unwrap()
}

#[test]
fn test_seven_day_plan_has_seven_labeled_days() {
    let store = sample_store();
    let user = profile(DietaryPreference::NonVeg, &[]);
    let targets = targets_for_profile(&user);
    let mut rng = StdRng::seed_from_u64(1);

    let plan = generate_meal_plan(
        &store,
        &user,
        &targets,
        7,
        &[],
        &SelectionConfig::default(),
        &mut rng,
    );

    assert_eq!(plan.days.len(), 7);
    for (i, day) in plan.days.iter().enumerate() {
        assert_eq!(day.label(), format!("day_{}", i + 1));

        // Each daily variance is computable from that day's own totals.
        let actual: f64 = day.meals.iter().map(|m| m.calories).sum();
        let expected = (actual - targets.target_calories) / targets.target_calories * 100.0;
        assert!(
            (day.daily_summary.calorie_variance_pct - expected).abs() < 0.06,
            "day {} variance mismatch",
            day.day
        );
    }
}

#[test]
fn test_identical_seed_reproduces_plan() {
    let store = sample_store();
    let user = profile(DietaryPreference::NonVeg, &[]);
    let targets = targets_for_profile(&user);
    let config = SelectionConfig::default();

    let mut rng_a = StdRng::seed_from_u64(2024);
    let mut rng_b = StdRng::seed_from_u64(2024);

    let plan_a = generate_meal_plan(&store, &user, &targets, 7, &[], &config, &mut rng_a);
    let plan_b = generate_meal_plan(&store, &user, &targets, 7, &[], &config, &mut rng_b);

    let names = |plan: &nutri_plan_rs::models::MealPlan| -> Vec<String> {
        plan.days
            .iter()
            .flat_map(|d| d.meals.iter().map(|m| m.name.clone()))
            .collect()
    };
    assert_eq!(names(&plan_a), names(&plan_b));
}

#[test]
fn test_vegan_plan_only_uses_vegan_recipes() {
    let store = sample_store();
    let user = profile(DietaryPreference::Vegan, &[]);
    let targets = targets_for_profile(&user);
    let mut rng = StdRng::seed_from_u64(9);

    let plan = generate_meal_plan(
        &store,
        &user,
        &targets,
        5,
        &[],
        &SelectionConfig::default(),
        &mut rng,
    );

    for day in &plan.days {
        for meal in &day.meals {
            let recipe = store.get(&meal.name).unwrap();
            assert_eq!(recipe.category, DietCategory::Vegan, "{}", meal.name);
        }
    }
}

#[test]
fn test_scores_within_unit_interval() {
    let store = sample_store();
    let user = profile(DietaryPreference::NonVeg, &[]);
    let targets = targets_for_profile(&user);
    let mut rng = StdRng::seed_from_u64(17);

    let plan = generate_meal_plan(
        &store,
        &user,
        &targets,
        7,
        &[],
        &SelectionConfig::default(),
        &mut rng,
    );

    for day in &plan.days {
        for meal in &day.meals {
            assert!((0.0..=1.0).contains(&meal.score), "{}", meal.score);
        }
    }
}

#[test]
fn test_plan_completes_with_single_recipe_per_slot() {
    // One recipe per meal type: the repeat cap cannot hold, but plan
    // generation must still complete with all slots filled.
    let store = RecipeStore::new(vec![
        recipe("B", MealType::Breakfast, DietCategory::NonVeg, &[], 350.0, 15.0),
        recipe("L", MealType::Lunch, DietCategory::NonVeg, &[], 500.0, 30.0),
        recipe("D", MealType::Dinner, DietCategory::NonVeg, &[], 450.0, 28.0),
        recipe("S", MealType::Snack, DietCategory::NonVeg, &[], 150.0, 6.0),
    ]);
    let user = profile(DietaryPreference::NonVeg, &[]);
    let targets = targets_for_profile(&user);
    let mut rng = StdRng::seed_from_u64(4);

    let plan = generate_meal_plan(
        &store,
        &user,
        &targets,
        7,
        &[],
        &SelectionConfig::default(),
        &mut rng,
    );

    assert_eq!(plan.days.len(), 7);
    for day in &plan.days {
        assert_eq!(day.meals.len(), 4);
        assert_eq!(day.meal(MealType::Breakfast).unwrap().name, "B");
    }
}

#[test]
fn test_allergy_filter_carries_into_plan() {
    // Allergies declared: strict pass is small, relaxed keeps any-tag rows,
    // so every selected recipe must carry at least one required tag.
    let store = sample_store();
    let user = profile(DietaryPreference::NonVeg, &["gluten", "nuts"]);
    let targets = targets_for_profile(&user);
    let mut rng = StdRng::seed_from_u64(8);

    let plan = generate_meal_plan(
        &store,
        &user,
        &targets,
        3,
        &[],
        &SelectionConfig::default(),
        &mut rng,
    );

    for day in &plan.days {
        for meal in &day.meals {
            let recipe = store.get(&meal.name).unwrap();
            assert!(
                recipe.has_allergen_tag("gluten-free") || recipe.has_allergen_tag("nuts-free"),
                "{} has no required tag",
                meal.name
            );
        }
    }
}

#[test]
fn test_history_seed_discourages_recent_recipes() {
    // Two identical breakfast recipes; one is in the seeded history. With a
    // single-option draw the pick is deterministic: the fresh recipe's
    // unpenalized score must win the slot.
    let store = RecipeStore::new(vec![
        recipe("Fresh", MealType::Breakfast, DietCategory::NonVeg, &[], 440.0, 20.0),
        recipe("Stale", MealType::Breakfast, DietCategory::NonVeg, &[], 440.0, 20.0),
    ]);
    let user = profile(DietaryPreference::NonVeg, &[]);
    let targets = targets_for_profile(&user);
    let history = vec!["Stale".to_string()];

    let config = SelectionConfig {
        n_options: 1,
        ..SelectionConfig::default()
    };

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = generate_meal_plan(&store, &user, &targets, 1, &history, &config, &mut rng);
        let first = plan.days[0].meal(MealType::Breakfast).unwrap();
        assert_eq!(first.name, "Fresh");
    }
}

#[test]
fn test_usage_counts_bounded_with_alternatives() {
    let store = sample_store();
    let user = profile(DietaryPreference::NonVeg, &[]);
    let targets = targets_for_profile(&user);
    let mut rng = StdRng::seed_from_u64(33);

    let plan = generate_meal_plan(
        &store,
        &user,
        &targets,
        7,
        &[],
        &SelectionConfig::default(),
        &mut rng,
    );

    let mut counts: HashMap<String, u32> = HashMap::new();
    for day in &plan.days {
        for meal in &day.meals {
            *counts.entry(meal.name.clone()).or_insert(0) += 1;
        }
    }
    for (name, count) in counts {
        assert!(count <= 3, "{} used {} times", name, count);
    }
}
