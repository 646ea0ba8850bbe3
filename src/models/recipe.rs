use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// The four meal slots of a planned day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Fixed planning order: breakfast, lunch, dinner, snack.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(PlanError::InvalidInput(format!(
                "Unknown meal type: {}",
                other
            ))),
        }
    }
}

/// Diet class of a recipe. Vegan recipes satisfy vegetarian constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietCategory {
    #[serde(rename = "vegan")]
    Vegan,
    #[serde(rename = "vegetarian")]
    Vegetarian,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl DietCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietCategory::Vegan => "vegan",
            DietCategory::Vegetarian => "vegetarian",
            DietCategory::NonVeg => "non-veg",
        }
    }
}

impl FromStr for DietCategory {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegan" => Ok(DietCategory::Vegan),
            "vegetarian" => Ok(DietCategory::Vegetarian),
            "non-veg" | "nonveg" | "non_veg" => Ok(DietCategory::NonVeg),
            other => Err(PlanError::InvalidInput(format!(
                "Unknown diet category: {}",
                other
            ))),
        }
    }
}

/// A recipe with nutritional data, as supplied by the external dataset.
///
/// Never mutated after loading. Name is the unique key (case-insensitive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    pub meal_type: MealType,

    pub category: DietCategory,

    /// Allergen-free tags, e.g. "gluten-free", "nuts-free".
    #[serde(default)]
    pub allergen_free: Vec<String>,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fats: f64,

    #[serde(default)]
    pub fiber: f64,

    #[serde(default)]
    pub ingredients: String,

    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether the recipe carries the given allergen-free tag.
    pub fn has_allergen_tag(&self, tag: &str) -> bool {
        self.allergen_free
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Basic validation: non-negative nutrient values.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fats >= 0.0
            && self.fiber >= 0.0
    }
}

/// A recipe paired with its fitness score for the current meal slot.
#[derive(Debug, Clone)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub score: f64,
}
