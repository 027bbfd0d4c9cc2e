//! Search statistics for diagnostics and strategy tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during a duel search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Frontier entries popped and evaluated.
    pub states_evaluated: u64,

    /// Frontier entries pushed (root included).
    pub states_enqueued: u64,

    /// Branches abandoned by the strategy's game-level pruning.
    pub branches_pruned: u64,

    /// Largest frontier size observed.
    pub peak_frontier: usize,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate evaluated states per second.
    #[must_use]
    pub fn states_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.states_evaluated as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of evaluated states abandoned by pruning.
    #[must_use]
    pub fn prune_rate(&self) -> f64 {
        if self.states_evaluated == 0 {
            0.0
        } else {
            self.branches_pruned as f64 / self.states_evaluated as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.states_evaluated, 0);
        assert_eq!(stats.peak_frontier, 0);
    }

    #[test]
    fn test_states_per_second() {
        let mut stats = SearchStats::new();
        stats.states_evaluated = 5000;
        stats.time_us = 1_000_000;

        assert_eq!(stats.states_per_second(), 5000.0);
    }

    #[test]
    fn test_prune_rate() {
        let mut stats = SearchStats::new();
        stats.states_evaluated = 100;
        stats.branches_pruned = 25;

        assert_eq!(stats.prune_rate(), 0.25);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.states_evaluated = 10;
        stats.reset();

        assert_eq!(stats.states_evaluated, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.states_evaluated = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.states_evaluated, deserialized.states_evaluated);
    }
}
