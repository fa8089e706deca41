//! Search statistics.
//!
//! Plain counters gathered while the bounded branch search runs.

use std::time::Duration;

/// Counters for one bounded branch search.
///
/// # Example
///
/// ```
/// use packsmith_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.record_node();
/// stats.record_candidate(true);
/// stats.record_candidate(false);
///
/// assert_eq!(stats.nodes_explored, 1);
/// assert_eq!(stats.candidates, 2);
/// assert_eq!(stats.improvements, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursion levels entered.
    pub nodes_explored: u64,
    /// Complete combinations reaching the target.
    pub candidates: u64,
    /// Candidates that replaced the best so far.
    pub improvements: u64,
    /// Partial combinations cut because they could not beat the best.
    pub pruned: u64,
}

impl SearchStats {
    /// Records entering a recursion level.
    #[inline]
    pub fn record_node(&mut self) {
        self.nodes_explored += 1;
    }

    /// Records a complete candidate and whether it became the best.
    #[inline]
    pub fn record_candidate(&mut self, improved: bool) {
        self.candidates += 1;
        if improved {
            self.improvements += 1;
        }
    }

    /// Records a pruned branch.
    #[inline]
    pub fn record_prune(&mut self) {
        self.pruned += 1;
    }

    /// Adds the counters of another search into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_explored += other.nodes_explored;
        self.candidates += other.candidates;
        self.improvements += other.improvements;
        self.pruned += other.pruned;
    }

    /// Returns nodes explored per second over `elapsed`.
    pub fn nodes_per_second(&self, elapsed: Duration) -> f64 {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nodes_explored as f64 / secs
        } else {
            0.0
        }
    }
}
