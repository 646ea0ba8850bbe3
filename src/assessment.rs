use crate::models::ActivityLevel;

/// One questionnaire item with four answer levels, least to most active.
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; 4],
    /// Relative importance, 1-3.
    pub weight: u32,
}

/// Research-based activity questionnaire. Answers are scored 1-4 and combined
/// as a weighted average.
pub const QUESTIONS: [Question; 7] = [
    Question {
        text: "How many days per week do you engage in planned exercise or sports?",
        options: [
            "0 days (None)",
            "1-2 days (Light)",
            "3-4 days (Moderate)",
            "5+ days (High)",
        ],
        weight: 3,
    },
    Question {
        text: "How would you describe your typical work day?",
        options: [
            "Mostly sitting (desk job, driving)",
            "Some walking, mostly sitting",
            "Regular walking, some physical tasks",
            "Mostly standing, walking, or physical labor",
        ],
        weight: 2,
    },
    Question {
        text: "On average, how many hours of moderate to vigorous exercise do you do per week?",
        options: [
            "Less than 1 hour",
            "1-3 hours",
            "4-6 hours",
            "More than 6 hours",
        ],
        weight: 3,
    },
    Question {
        text: "How many flights of stairs do you climb per day on average?",
        options: [
            "0-2 flights",
            "3-5 flights",
            "6-10 flights",
            "More than 10 flights",
        ],
        weight: 1,
    },
    Question {
        text: "How do you usually commute or travel for daily activities?",
        options: [
            "Car, bus, or other transport (mostly sitting)",
            "Mix of transport and walking",
            "Walking or cycling for short distances",
            "Mostly walking or cycling",
        ],
        weight: 1,
    },
    Question {
        text: "During leisure time, you typically prefer:",
        options: [
            "Sedentary activities (TV, reading, computer)",
            "Light activities (shopping, cooking, casual walks)",
            "Active hobbies (gardening, dancing, recreational sports)",
            "Intense activities (competitive sports, hiking, gym)",
        ],
        weight: 2,
    },
    Question {
        text: "How often do you feel physically tired at the end of the day due to physical activity?",
        options: [
            "Rarely (mostly sedentary)",
            "Sometimes (light activity)",
            "Often (moderate activity)",
            "Very often (high activity level)",
        ],
        weight: 1,
    },
];

/// Classify an activity level from questionnaire responses.
///
/// Each response is the answer score 1-4 for the question at the same index;
/// out-of-range values clamp to that range and extra responses are ignored.
pub fn activity_level_from_responses(responses: &[u8]) -> ActivityLevel {
    let mut total_score = 0.0;
    let mut total_weight = 0.0;

    for (question, &response) in QUESTIONS.iter().zip(responses) {
        let score = response.clamp(1, 4) as f64;
        total_score += score * question.weight as f64;
        total_weight += question.weight as f64;
    }

    let weighted_average = if total_weight > 0.0 {
        total_score / total_weight
    } else {
        1.0
    };

    if weighted_average <= 1.5 {
        ActivityLevel::Sedentary
    } else if weighted_average <= 2.5 {
        ActivityLevel::LightlyActive
    } else if weighted_average <= 3.2 {
        ActivityLevel::ModeratelyActive
    } else {
        ActivityLevel::VeryActive
    }
}
