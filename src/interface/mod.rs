pub mod prompts;
pub mod render;

pub use prompts::{
    collect_user_profile, prompt_allergies, prompt_dietary_preference, prompt_weight_goal,
    prompt_yes_no, run_activity_questionnaire,
};
pub use render::{display_meal_plan, display_targets};
