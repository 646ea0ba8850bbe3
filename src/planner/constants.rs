/// kcal per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// kcal per gram of carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Calorie deficit/surplus applied for loss/gain goals, kcal/day.
pub const GOAL_CALORIE_DELTA: f64 = 500.0;

/// Largest share of carb grams the macro rebalancing pass may remove.
pub const CARB_REDUCTION_CAP: f64 = 0.20;

/// Minimum rows required from the strict allergy pass before relaxing.
pub const MIN_STRICT_ALLERGY_MATCHES: usize = 20;

/// One standard deviation of the Gaussian fit decay, as a fraction of target.
pub const SCORE_TOLERANCE: f64 = 0.05;

/// Half-width of the per-slot calorie pre-filter window, fraction of target.
pub const CALORIE_WINDOW: f64 = 0.05;

/// Fiber target for breakfast, lunch and dinner, grams.
pub const FIBER_TARGET_MAIN: f64 = 6.0;

/// Fiber target for snacks, grams.
pub const FIBER_TARGET_SNACK: f64 = 3.0;

/// Calorie share moved from dinner to snack for active users.
pub const ACTIVITY_SNACK_SHIFT: f64 = 0.05;

/// Score multiplier lost by a recipe used 0 steps ago.
pub const RECENCY_PENALTY_FACTOR: f64 = 0.6;

/// Per-step decay of the recency penalty.
pub const RECENCY_DECAY: f64 = 0.8;

/// Base of the frequency penalty: score multiplied by this to the usage count.
pub const FREQUENCY_PENALTY_BASE: f64 = 0.1;

/// Usage count at which the frequency penalty starts applying.
pub const FREQUENCY_PENALTY_MIN_COUNT: u32 = 2;

/// How many top candidates enter the stochastic draw.
pub const DEFAULT_N_OPTIONS: usize = 5;

/// Softmax temperature for the weighted draw. Lower = greedier.
pub const SOFTMAX_TEMPERATURE: f64 = 0.3;

/// Soft cap on uses of one recipe within a plan.
pub const MAX_RECIPE_REPEATS: u32 = 3;

/// Retries when the drawn recipe is already at the repeat cap.
pub const MAX_SELECTION_RETRIES: usize = 3;

/// Length cap of the most-recently-used recipe list.
pub const RECENT_LIST_CAP: usize = 15;

/// Breakfast candidates under this much protein (grams) get penalized.
pub const BREAKFAST_MIN_PROTEIN_G: f64 = 10.0;

/// Score multiplier for low-protein breakfast candidates.
pub const BREAKFAST_LOW_PROTEIN_PENALTY: f64 = 0.9;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
