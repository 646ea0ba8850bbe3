use std::collections::{HashMap, VecDeque};

use crate::planner::constants::RECENT_LIST_CAP;

/// Per-request record of which recipes have been used and how recently.
///
/// Scoped to one planning call; seeded from external history and discarded
/// afterward.
#[derive(Debug, Default, Clone)]
pub struct UsageState {
    /// Most recent first, capped at RECENT_LIST_CAP entries.
    recent: VecDeque<String>,
    counts: HashMap<String, u32>,
}

impl UsageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the recent list from externally supplied history, most recent first.
    ///
    /// History entries do not count toward the plan's usage counters.
    pub fn seeded(history: &[String]) -> Self {
        let mut state = Self::new();
        for name in history.iter().rev() {
            state.push_recent(name);
        }
        state
    }

    fn push_recent(&mut self, name: &str) {
        self.recent.push_front(name.to_lowercase());
        self.recent.truncate(RECENT_LIST_CAP);
    }

    /// Record a successful selection.
    pub fn record(&mut self, name: &str) {
        self.push_recent(name);
        *self.counts.entry(name.to_lowercase()).or_insert(0) += 1;
    }

    /// Position in the recent list (0 = most recent), if present.
    pub fn recency_index(&self, name: &str) -> Option<usize> {
        let key = name.to_lowercase();
        self.recent.iter().position(|n| *n == key)
    }

    /// Times the recipe has been selected within this plan.
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(&name.to_lowercase()).copied().unwrap_or(0)
    }

    /// Distinct recipes selected within this plan.
    pub fn distinct_used(&self) -> usize {
        self.counts.len()
    }
}
