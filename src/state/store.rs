use std::collections::HashMap;

use crate::models::{MealType, Recipe};

/// Read-only indexed collection of recipes.
///
/// Deduplicates by lowercase name (last occurrence wins) and keeps an index by
/// meal type so slot-candidate retrieval avoids full-table scans.
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    by_meal_type: HashMap<MealType, Vec<usize>>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut seen: HashMap<String, Recipe> = HashMap::new();
        for recipe in recipes {
            seen.insert(recipe.key(), recipe);
        }

        let mut recipes: Vec<Recipe> = seen.into_values().collect();
        recipes.sort_by(|a, b| a.key().cmp(&b.key()));

        let mut by_meal_type: HashMap<MealType, Vec<usize>> = HashMap::new();
        for (idx, recipe) in recipes.iter().enumerate() {
            by_meal_type.entry(recipe.meal_type).or_default().push(idx);
        }

        Self {
            recipes,
            by_meal_type,
        }
    }

    /// All recipes, in stable key order.
    pub fn all(&self) -> Vec<&Recipe> {
        self.recipes.iter().collect()
    }

    /// Recipes for one meal slot.
    pub fn for_meal_type(&self, meal_type: MealType) -> Vec<&Recipe> {
        self.by_meal_type
            .get(&meal_type)
            .map(|indices| indices.iter().map(|&i| &self.recipes[i]).collect())
            .unwrap_or_default()
    }

    /// Look up a recipe by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        let key = name.to_lowercase();
        self.recipes.iter().find(|r| r.key() == key)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
