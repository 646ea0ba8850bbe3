use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::models::{Recipe, ScoredRecipe};
use crate::planner::constants::*;
use crate::state::UsageState;

/// Knobs of the variety-aware selection step.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Score multiplier lost by a recipe used 0 steps ago.
    pub penalty_factor: f64,
    /// Per-step decay of the recency penalty.
    pub recency_decay: f64,
    /// How many top candidates enter the stochastic draw.
    pub n_options: usize,
    /// Softmax temperature for the weighted draw.
    pub temperature: f64,
    /// Soft cap on uses of one recipe within a plan.
    pub max_recipe_repeats: u32,
    /// Retries when the drawn recipe is already at the cap.
    pub max_retries: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            penalty_factor: RECENCY_PENALTY_FACTOR,
            recency_decay: RECENCY_DECAY,
            n_options: DEFAULT_N_OPTIONS,
            temperature: SOFTMAX_TEMPERATURE,
            max_recipe_repeats: MAX_RECIPE_REPEATS,
            max_retries: MAX_SELECTION_RETRIES,
        }
    }
}

/// Recency penalty: a recipe at index i of the recent list keeps
/// `1 - penalty_factor * decay^i` of its score, so older uses matter less.
fn recency_multiplier(index: usize, config: &SelectionConfig) -> f64 {
    1.0 - config.penalty_factor * config.recency_decay.powi(index as i32)
}

/// Frequency penalty: a recipe already used `count >= 2` times keeps
/// `0.1^count` of its score. Aggressive suppression, not a hard ban.
fn frequency_multiplier(count: u32) -> f64 {
    if count >= FREQUENCY_PENALTY_MIN_COUNT {
        FREQUENCY_PENALTY_BASE.powi(count as i32)
    } else {
        1.0
    }
}

/// Apply both variety penalties in sequence to a scored candidate set.
pub fn apply_variety_penalties(
    candidates: &mut [ScoredRecipe<'_>],
    usage: &UsageState,
    config: &SelectionConfig,
) {
    for candidate in candidates.iter_mut() {
        if let Some(index) = usage.recency_index(&candidate.recipe.name) {
            candidate.score *= recency_multiplier(index, config);
        }
        candidate.score *= frequency_multiplier(usage.count(&candidate.recipe.name));
    }
}

/// Temperature-scaled softmax draw among the top candidates by score.
fn weighted_draw<'a, R: Rng>(
    pool: &[ScoredRecipe<'a>],
    config: &SelectionConfig,
    rng: &mut R,
) -> Option<&'a Recipe> {
    if pool.is_empty() {
        return None;
    }

    let mut ranked: Vec<&ScoredRecipe<'a>> = pool.iter().collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(config.n_options.min(ranked.len()).max(1));

    let weights: Vec<f64> = ranked
        .iter()
        .map(|c| (c.score / config.temperature).exp())
        .collect();

    let dist = WeightedIndex::new(&weights).ok()?;
    Some(ranked[dist.sample(rng)].recipe)
}

/// Pick one recipe from a scored candidate set.
///
/// Penalizes recently/frequently used recipes, then draws stochastically
/// among the top `n_options`. A draw that is already at the repeat cap is
/// retried (up to `max_retries`) on the remaining candidates; when no
/// alternative remains the repeat is accepted rather than failing the slot.
pub fn select_recipe<'a, R: Rng>(
    candidates: &[ScoredRecipe<'a>],
    usage: &UsageState,
    config: &SelectionConfig,
    rng: &mut R,
) -> Option<&'a Recipe> {
    if candidates.is_empty() {
        return None;
    }

    let mut pool: Vec<ScoredRecipe<'a>> = candidates.to_vec();
    apply_variety_penalties(&mut pool, usage, config);

    let mut retries = 0;
    loop {
        let drawn = weighted_draw(&pool, config, rng)?;

        if usage.count(&drawn.name) < config.max_recipe_repeats
            || retries >= config.max_retries
        {
            return Some(drawn);
        }

        let key = drawn.key();
        let remaining: Vec<ScoredRecipe<'a>> = pool
            .into_iter()
            .filter(|c| c.recipe.key() != key)
            .collect();
        if remaining.is_empty() {
            return Some(drawn);
        }

        pool = remaining;
        retries += 1;
    }
}
