use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::DietCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(PlanError::InvalidInput(format!("Unknown gender: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            other => Err(PlanError::InvalidInput(format!(
                "Unknown activity level: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Loss,
    Gain,
    Maintain,
}

impl WeightGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightGoal::Loss => "loss",
            WeightGoal::Gain => "gain",
            WeightGoal::Maintain => "maintain",
        }
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightGoal {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "loss" => Ok(WeightGoal::Loss),
            "gain" => Ok(WeightGoal::Gain),
            "maintain" => Ok(WeightGoal::Maintain),
            other => Err(PlanError::InvalidInput(format!("Unknown goal: {}", other))),
        }
    }
}

/// What the user is willing to eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietaryPreference {
    #[serde(rename = "vegan")]
    Vegan,
    #[serde(rename = "vegetarian")]
    Vegetarian,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl DietaryPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Vegan => "vegan",
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::NonVeg => "non-veg",
        }
    }

    /// Whether a recipe of the given category is acceptable under this preference.
    pub fn accepts(&self, category: DietCategory) -> bool {
        match self {
            DietaryPreference::Vegan => category == DietCategory::Vegan,
            DietaryPreference::Vegetarian => {
                matches!(category, DietCategory::Vegan | DietCategory::Vegetarian)
            }
            DietaryPreference::NonVeg => true,
        }
    }
}

impl FromStr for DietaryPreference {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "vegan" => Ok(DietaryPreference::Vegan),
            "vegetarian" => Ok(DietaryPreference::Vegetarian),
            "non-veg" | "nonveg" | "non_veg" => Ok(DietaryPreference::NonVeg),
            other => Err(PlanError::InvalidInput(format!(
                "Unknown dietary preference: {}",
                other
            ))),
        }
    }
}

/// Accepted ranges for body stats at the profile boundary.
pub const AGE_RANGE: (u32, u32) = (13, 100);
pub const HEIGHT_CM_RANGE: (f64, f64) = (120.0, 230.0);
pub const WEIGHT_KG_RANGE: (f64, f64) = (30.0, 300.0);

/// User profile collected once per planning request; read-only during planning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub weight_goal: WeightGoal,
    pub dietary_pref: DietaryPreference,
    /// Declared allergen names, e.g. "gluten", "nuts", "dairy".
    pub allergies: BTreeSet<String>,
}

impl UserProfile {
    /// Construct a profile, rejecting out-of-range body stats.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        gender: Gender,
        activity_level: ActivityLevel,
        weight_goal: WeightGoal,
        dietary_pref: DietaryPreference,
        allergies: BTreeSet<String>,
    ) -> Result<Self> {
        if !(AGE_RANGE.0..=AGE_RANGE.1).contains(&age) {
            return Err(PlanError::InvalidInput(format!(
                "Age must be between {} and {}",
                AGE_RANGE.0, AGE_RANGE.1
            )));
        }
        if !(HEIGHT_CM_RANGE.0..=HEIGHT_CM_RANGE.1).contains(&height_cm) {
            return Err(PlanError::InvalidInput(format!(
                "Height must be between {} and {} cm",
                HEIGHT_CM_RANGE.0, HEIGHT_CM_RANGE.1
            )));
        }
        if !(WEIGHT_KG_RANGE.0..=WEIGHT_KG_RANGE.1).contains(&weight_kg) {
            return Err(PlanError::InvalidInput(format!(
                "Weight must be between {} and {} kg",
                WEIGHT_KG_RANGE.0, WEIGHT_KG_RANGE.1
            )));
        }

        Ok(Self {
            age,
            height_cm,
            weight_kg,
            gender,
            activity_level,
            weight_goal,
            dietary_pref,
            allergies: allergies
                .into_iter()
                .map(|a| a.trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
        })
    }
}
