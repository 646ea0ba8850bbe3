use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::assessment::{activity_level_from_responses, QUESTIONS};
use crate::error::{PlanError, Result};
use crate::models::{
    ActivityLevel, DietaryPreference, Gender, UserProfile, WeightGoal, AGE_RANGE, HEIGHT_CM_RANGE,
    WEIGHT_KG_RANGE,
};

/// Allergen vocabulary offered for free-text matching.
pub const KNOWN_ALLERGENS: [&str; 6] = ["gluten", "nuts", "dairy", "soy", "eggs", "shellfish"];

fn prompt_number(prompt: &str, default: &str, min: f64, max: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if !(min..=max).contains(&value) {
        return Err(PlanError::InvalidInput(format!(
            "Value must be between {} and {}",
            min, max
        )));
    }

    Ok(value)
}

pub fn prompt_age() -> Result<u32> {
    Ok(prompt_number("Your age", "30", AGE_RANGE.0 as f64, AGE_RANGE.1 as f64)? as u32)
}

pub fn prompt_height_cm() -> Result<f64> {
    prompt_number("Your height (cm)", "170", HEIGHT_CM_RANGE.0, HEIGHT_CM_RANGE.1)
}

pub fn prompt_weight_kg() -> Result<f64> {
    prompt_number("Your weight (kg)", "70", WEIGHT_KG_RANGE.0, WEIGHT_KG_RANGE.1)
}

pub fn prompt_gender() -> Result<Gender> {
    let selection = Select::new()
        .with_prompt("Your gender")
        .items(&["male", "female"])
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Gender::Male,
        _ => Gender::Female,
    })
}

pub fn prompt_weight_goal() -> Result<WeightGoal> {
    let selection = Select::new()
        .with_prompt("Your goal")
        .items(&["Weight loss", "Weight gain", "Maintain weight"])
        .default(2)
        .interact()?;

    Ok(match selection {
        0 => WeightGoal::Loss,
        1 => WeightGoal::Gain,
        _ => WeightGoal::Maintain,
    })
}

pub fn prompt_dietary_preference() -> Result<DietaryPreference> {
    let selection = Select::new()
        .with_prompt("Dietary preference")
        .items(&["Vegan", "Vegetarian", "Non-veg"])
        .default(2)
        .interact()?;

    Ok(match selection {
        0 => DietaryPreference::Vegan,
        1 => DietaryPreference::Vegetarian,
        _ => DietaryPreference::NonVeg,
    })
}

/// Collect allergies as free text with fuzzy matching against the vocabulary.
pub fn prompt_allergies() -> Result<BTreeSet<String>> {
    let mut allergies = BTreeSet::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a food allergy (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        if KNOWN_ALLERGENS.contains(&input.as_str()) {
            println!("Added: {}", input);
            allergies.insert(input);
            continue;
        }

        // Fuzzy match against the vocabulary.
        let mut candidates: Vec<(&str, f64)> = KNOWN_ALLERGENS
            .iter()
            .map(|a| (*a, jaro_winkler(a, &input)))
            .filter(|(_, score)| *score > 0.7)
            .collect();
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        match candidates.first() {
            Some((best, _)) => {
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", best))
                    .default(true)
                    .interact()?;
                if confirm {
                    println!("Added: {}", best);
                    allergies.insert(best.to_string());
                }
            }
            None => println!("Unknown allergen '{}'", input),
        }
    }

    Ok(allergies)
}

/// Run the activity questionnaire and classify the result.
pub fn run_activity_questionnaire() -> Result<ActivityLevel> {
    let mut responses = Vec::with_capacity(QUESTIONS.len());

    println!("Answer the following questions to assess your activity level.");
    println!();

    for (i, question) in QUESTIONS.iter().enumerate() {
        let selection = Select::new()
            .with_prompt(format!("Q{}. {}", i + 1, question.text))
            .items(&question.options)
            .default(0)
            .interact()?;
        responses.push(selection as u8 + 1);
    }

    Ok(activity_level_from_responses(&responses))
}

/// Collect a full user profile interactively.
pub fn collect_user_profile() -> Result<UserProfile> {
    let age = prompt_age()?;
    let height_cm = prompt_height_cm()?;
    let weight_kg = prompt_weight_kg()?;
    let gender = prompt_gender()?;
    let weight_goal = prompt_weight_goal()?;
    let dietary_pref = prompt_dietary_preference()?;
    let allergies = prompt_allergies()?;

    println!();
    let activity_level = run_activity_questionnaire()?;
    println!();
    println!("Assessed activity level: {}", activity_level);

    UserProfile::new(
        age,
        height_cm,
        weight_kg,
        gender,
        activity_level,
        weight_goal,
        dietary_pref,
        allergies,
    )
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
