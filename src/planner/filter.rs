use crate::models::{Recipe, UserProfile};
use crate::planner::constants::MIN_STRICT_ALLERGY_MATCHES;
use crate::state::RecipeStore;

/// Required allergen-free tags for a set of declared allergies.
pub fn required_allergen_tags(profile: &UserProfile) -> Vec<String> {
    profile
        .allergies
        .iter()
        .map(|a| format!("{}-free", a))
        .collect()
}

/// Narrow the recipe table by diet category and allergen exclusion.
///
/// Allergen handling degrades gracefully: the strict pass (all required tags)
/// is used when it keeps at least 20 rows; otherwise the relaxed pass (any
/// required tag) is used when non-empty; otherwise the diet-filtered table is
/// returned unchanged. Zero matches never error at this stage.
pub fn filter_by_dietary_preferences<'a>(
    store: &'a RecipeStore,
    profile: &UserProfile,
) -> Vec<&'a Recipe> {
    let diet_filtered: Vec<&Recipe> = store
        .all()
        .iter()
        .filter(|r| profile.dietary_pref.accepts(r.category))
        .copied()
        .collect();

    let required = required_allergen_tags(profile);
    if required.is_empty() {
        return diet_filtered;
    }

    let strict: Vec<&Recipe> = diet_filtered
        .iter()
        .filter(|r| required.iter().all(|tag| r.has_allergen_tag(tag)))
        .copied()
        .collect();

    if strict.len() >= MIN_STRICT_ALLERGY_MATCHES {
        return strict;
    }

    // Best-effort relaxation: any one required tag is enough. Better to serve
    // an imperfect recipe than none.
    let relaxed: Vec<&Recipe> = diet_filtered
        .iter()
        .filter(|r| required.iter().any(|tag| r.has_allergen_tag(tag)))
        .copied()
        .collect();

    if !relaxed.is_empty() {
        relaxed
    } else {
        diet_filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityLevel, DietCategory, DietaryPreference, Gender, MealType, WeightGoal,
    };
    use std::collections::BTreeSet;

    fn recipe(name: &str, category: DietCategory, tags: &[&str]) -> Recipe {
        Recipe {
            name: name.to_string(),
            meal_type: MealType::Lunch,
            category,
            allergen_free: tags.iter().map(|t| t.to_string()).collect(),
            calories: 400.0,
            protein: 20.0,
            carbs: 40.0,
            fats: 15.0,
            fiber: 5.0,
            ingredients: String::new(),
            instructions: String::new(),
        }
    }

    fn profile(pref: DietaryPreference, allergies: &[&str]) -> UserProfile {
        UserProfile::new(
            30,
            170.0,
            70.0,
            Gender::Female,
            ActivityLevel::Sedentary,
            WeightGoal::Maintain,
            pref,
            allergies.iter().map(|a| a.to_string()).collect::<BTreeSet<_>>(),
        )
        .unwrap()
    }

    fn store_with(recipes: Vec<Recipe>) -> RecipeStore {
        RecipeStore::new(recipes)
    }

    #[test]
    fn test_vegan_keeps_only_vegan() {
        let store = store_with(vec![
            recipe("Tofu Bowl", DietCategory::Vegan, &[]),
            recipe("Cheese Pasta", DietCategory::Vegetarian, &[]),
            recipe("Chicken Rice", DietCategory::NonVeg, &[]),
        ]);
        let filtered = filter_by_dietary_preferences(&store, &profile(DietaryPreference::Vegan, &[]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Tofu Bowl");
    }

    #[test]
    fn test_vegetarian_accepts_vegan() {
        let store = store_with(vec![
            recipe("Tofu Bowl", DietCategory::Vegan, &[]),
            recipe("Cheese Pasta", DietCategory::Vegetarian, &[]),
            recipe("Chicken Rice", DietCategory::NonVeg, &[]),
        ]);
        let filtered =
            filter_by_dietary_preferences(&store, &profile(DietaryPreference::Vegetarian, &[]));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_strict_pass_used_when_large_enough() {
        let mut recipes: Vec<Recipe> = (0..25)
            .map(|i| {
                recipe(
                    &format!("Safe {}", i),
                    DietCategory::NonVeg,
                    &["gluten-free", "nuts-free"],
                )
            })
            .collect();
        recipes.push(recipe("Partial", DietCategory::NonVeg, &["gluten-free"]));

        let store = store_with(recipes);
        let filtered = filter_by_dietary_preferences(
            &store,
            &profile(DietaryPreference::NonVeg, &["gluten", "nuts"]),
        );

        // 25 strict rows >= threshold, so "Partial" is excluded.
        assert_eq!(filtered.len(), 25);
        assert!(filtered.iter().all(|r| r.name.starts_with("Safe")));
    }

    #[test]
    fn test_relaxed_fallback_when_strict_too_small() {
        let store = store_with(vec![
            recipe("Both Free", DietCategory::NonVeg, &["gluten-free", "nuts-free"]),
            recipe("Gluten Only", DietCategory::NonVeg, &["gluten-free"]),
            recipe("Neither", DietCategory::NonVeg, &[]),
        ]);
        let filtered = filter_by_dietary_preferences(
            &store,
            &profile(DietaryPreference::NonVeg, &["gluten", "nuts"]),
        );

        // Strict pass has one row (< 20), relaxed keeps any-tag matches.
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().any(|r| r.name == "Gluten Only"));
    }

    #[test]
    fn test_unfiltered_fallback_when_both_passes_empty() {
        let store = store_with(vec![
            recipe("Plain A", DietCategory::NonVeg, &[]),
            recipe("Plain B", DietCategory::NonVeg, &[]),
        ]);
        let filtered = filter_by_dietary_preferences(
            &store,
            &profile(DietaryPreference::NonVeg, &["dairy"]),
        );

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_strict_subset_of_relaxed_subset_of_diet() {
        let store = store_with(vec![
            recipe("Both", DietCategory::Vegan, &["gluten-free", "dairy-free"]),
            recipe("One", DietCategory::Vegan, &["gluten-free"]),
            recipe("None", DietCategory::Vegan, &[]),
            recipe("Meat", DietCategory::NonVeg, &["gluten-free", "dairy-free"]),
        ]);
        let user = profile(DietaryPreference::Vegan, &["gluten", "dairy"]);

        let diet: Vec<&Recipe> = store
            .all()
            .iter()
            .filter(|r| user.dietary_pref.accepts(r.category))
            .copied()
            .collect();
        let required = required_allergen_tags(&user);
        let strict: Vec<&&Recipe> = diet
            .iter()
            .filter(|r| required.iter().all(|t| r.has_allergen_tag(t)))
            .collect();
        let relaxed: Vec<&&Recipe> = diet
            .iter()
            .filter(|r| required.iter().any(|t| r.has_allergen_tag(t)))
            .collect();

        assert!(strict.len() <= relaxed.len());
        assert!(relaxed.len() <= diet.len());
        for r in &strict {
            assert!(relaxed.iter().any(|x| x.name == r.name));
        }
    }
}
