use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{MealPlan, Recipe};

/// Raw CSV row; enum columns arrive as strings and tag lists as one
/// delimited field (e.g. "gluten-free;nuts-free").
#[derive(Debug, Deserialize)]
struct RecipeRow {
    name: String,
    meal_type: String,
    category: String,
    #[serde(default)]
    allergen_free: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    #[serde(default)]
    fiber: Option<f64>,
    #[serde(default)]
    ingredients: Option<String>,
    #[serde(default)]
    instructions: Option<String>,
}

impl RecipeRow {
    fn into_recipe(self) -> Result<Recipe> {
        Ok(Recipe {
            name: self.name,
            meal_type: self.meal_type.parse()?,
            category: self.category.parse()?,
            allergen_free: self
                .allergen_free
                .split([';', ','])
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
            fiber: self.fiber.unwrap_or(0.0),
            ingredients: self.ingredients.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
        })
    }
}

/// Load the recipe table from a CSV file.
pub fn load_recipes_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut recipes = Vec::new();
    for row in reader.deserialize::<RecipeRow>() {
        recipes.push(row?.into_recipe()?);
    }
    Ok(recipes)
}

/// Load the recipe table from a JSON file.
pub fn load_recipes_json<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    Ok(recipes)
}

/// Load the recipe table, dispatching on file extension (.json vs CSV).
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let is_json = path
        .as_ref()
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        load_recipes_json(path)
    } else {
        load_recipes_csv(path)
    }
}

/// Write a generated plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
