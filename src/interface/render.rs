use crate::models::{MealPlan, MealType, NutritionTargets};

/// Display computed daily targets.
pub fn display_targets(targets: &NutritionTargets) {
    println!();
    println!("=== Nutrition Targets ===");
    println!("BMR:             {:.2} kcal/day", targets.bmr);
    println!("TDEE:            {:.2} kcal/day", targets.tdee);
    println!("Target calories: {:.2} kcal/day", targets.target_calories);
    println!(
        "Target macros:   protein {:.1} g, carbs {:.1} g, fat {:.1} g",
        targets.target_macros.protein_g,
        targets.target_macros.carbs_g,
        targets.target_macros.fat_g
    );
    println!();
}

/// Display a generated plan day by day, with summaries.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.days.is_empty() {
        println!("No meal plan generated (no days requested or no recipes available).");
        return;
    }

    for day in &plan.days {
        println!();
        println!("=== Day {} ===", day.day);

        for meal_type in MealType::ALL {
            let Some(meal) = day.meal(meal_type) else {
                continue;
            };

            println!();
            println!("  {}: {}", capitalize(meal_type.as_str()), meal.name);
            println!("    Calories: {:.0} kcal", meal.calories);
            println!("    Protein:  {:.1} g", meal.protein);
            println!("    Carbs:    {:.1} g", meal.carbs);
            println!("    Fat:      {:.1} g", meal.fats);
            println!("    Fit:      {:.2}", meal.score);
            if !meal.ingredients.is_empty() {
                println!("    Ingredients: {}", meal.ingredients);
            }
        }

        let summary = &day.daily_summary;
        println!();
        println!(
            "  Daily total: {:.1} kcal (target {:.1}, variance {:+.1}%)",
            summary.total_calories, summary.target_calories, summary.calorie_variance_pct
        );
        println!(
            "  Protein {:.1} g | Carbs {:.1} g | Fat {:.1} g",
            summary.total_protein, summary.total_carbs, summary.total_fat
        );
    }

    let summary = &plan.summary;
    println!();
    println!("--- Plan Summary ---");
    println!("Days planned: {}", plan.days.len());
    println!("Distinct recipes used: {}", summary.recipes_used);
    println!(
        "Average calorie variance: {:+.1}%",
        summary.avg_calorie_variance_pct
    );
    print!("Meal distribution:");
    for meal_type in MealType::ALL {
        if let Some(fraction) = summary.meal_distribution.get(&meal_type) {
            print!(" {} {:.0}%", meal_type, fraction * 100.0);
        }
    }
    println!();
    println!();
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
