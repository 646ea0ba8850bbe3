/// Recently used recipe names from past plans, most recent first.
///
/// Stub: plan history is not persisted yet, so the look-back always comes up
/// empty. The planner treats the result as seed data for its usage state.
pub fn recent_recipe_history(_lookback_days: u32) -> Vec<String> {
    Vec::new()
}
