//! Bounded branch search over pack counts.
//!
//! For each pack size, largest first, the search tries how many copies of
//! that size to use and recurses into the smaller sizes. A branch closes
//! as soon as its running total reaches the target; the best complete
//! candidate is kept under the ranking:
//!
//! 1. smaller Total
//! 2. fewer packs
//! 3. fewer packs of the larger sizes (counts compared largest size first)
//!
//! The third level keeps the first tie met in depth-first order, where
//! every size is tried from zero copies upward. It also makes the parallel
//! mode return the same combination as the sequential one.
//!
//! Before descending, a branch is cut when its optimistic bound (the
//! target reached with the fewest packs of the next size) already ranks
//! below the best candidate.
//!
//! Each level receives its own partial counts and the best-so-far candidate
//! by value and hands the (possibly replaced) best back to its caller.
//! No state is shared between branches apart from the optional
//! termination flag, which is polled before every count tried.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use packsmith_config::SearchMode;
use packsmith_core::{PackCombination, PackError, PackScore, PackSize};
use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::debug;

use crate::stats::SearchStats;

/// Counts per size index, aligned with the descending size slice.
pub(crate) type Counts = SmallVec<[u64; 8]>;

/// Extra copies of a size tried beyond the floor of the remaining target.
pub const OVERSHOOT_SLACK: u64 = 2;

/// A complete combination reaching the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    counts: Counts,
    score: PackScore,
}

impl Candidate {
    /// Returns true if this candidate ranks strictly above `other`.
    fn beats(&self, other: &Candidate) -> bool {
        match self.score.cmp(&other.score) {
            Ordering::Greater => true,
            Ordering::Less => false,
            // Counts are aligned largest size first.
            Ordering::Equal => self.counts < other.counts,
        }
    }

    pub(crate) fn score(&self) -> PackScore {
        self.score
    }

    pub(crate) fn into_combination(
        self,
        sizes: &[PackSize],
    ) -> Result<PackCombination, PackError> {
        PackCombination::from_counts(sizes.iter().copied().zip(self.counts))
    }
}

fn keep_better(best: Option<Candidate>, challenger: Option<Candidate>) -> Option<Candidate> {
    match (best, challenger) {
        (Some(best), Some(challenger)) => {
            if challenger.beats(&best) {
                Some(challenger)
            } else {
                Some(best)
            }
        }
        (best, None) => best,
        (None, challenger) => challenger,
    }
}

/// Bounded branch search for one target over a descending size slice.
#[derive(Debug)]
pub(crate) struct BoundedSearch<'a> {
    sizes: &'a [PackSize],
    target: u64,
    terminate: Option<&'a AtomicBool>,
}

impl<'a> BoundedSearch<'a> {
    pub(crate) fn new(sizes: &'a [PackSize], target: u64) -> Self {
        debug_assert!(!sizes.is_empty());
        debug_assert!(sizes.windows(2).all(|w| w[0] > w[1]));
        Self {
            sizes,
            target,
            terminate: None,
        }
    }

    /// Stops the search with [`PackError::Cancelled`] once `flag` is set.
    pub(crate) fn with_termination(mut self, flag: Option<&'a AtomicBool>) -> Self {
        self.terminate = flag;
        self
    }

    fn check_terminated(&self) -> Result<(), PackError> {
        match self.terminate {
            Some(flag) if flag.load(AtomicOrdering::Relaxed) => Err(PackError::Cancelled),
            _ => Ok(()),
        }
    }

    /// Runs the search, returning the best candidate and its counters.
    pub(crate) fn run(
        &self,
        mode: SearchMode,
    ) -> Result<(Option<Candidate>, SearchStats), PackError> {
        let result = match mode {
            SearchMode::Sequential => {
                let mut stats = SearchStats::default();
                let best = self.explore(0, Counts::new(), PackScore::ZERO, None, &mut stats)?;
                (best, stats)
            }
            SearchMode::Parallel => self.explore_parallel()?,
        };

        debug!(
            event = "search",
            target = self.target,
            mode = %mode,
            nodes = result.1.nodes_explored,
            candidates = result.1.candidates,
            pruned = result.1.pruned,
            best_total = result.0.as_ref().map_or(0, |c| c.score().total()),
        );
        Ok(result)
    }

    /// Largest count of `size` worth trying with `remaining` items to go.
    fn count_limit(remaining: u64, size: u64) -> u64 {
        (remaining / size).saturating_add(OVERSHOOT_SLACK)
    }

    /// Best score any completion of `score` using `sizes[index..]` could
    /// reach, or `None` when no sizes remain.
    fn optimistic_bound(&self, index: usize, score: PackScore) -> Option<PackScore> {
        let next_size = self.sizes.get(index)?.get();
        let smallest = self.sizes[self.sizes.len() - 1].get();
        let remaining = self.target - score.total();

        Some(PackScore::of(
            score.total().saturating_add(remaining.max(smallest)),
            score
                .pack_count()
                .saturating_add(remaining.div_ceil(next_size)),
        ))
    }

    fn explore(
        &self,
        index: usize,
        counts: Counts,
        score: PackScore,
        mut best: Option<Candidate>,
        stats: &mut SearchStats,
    ) -> Result<Option<Candidate>, PackError> {
        stats.record_node();

        let Some(size) = self.sizes.get(index).map(|s| s.get()) else {
            // Every size decided without reaching the target.
            return Ok(best);
        };

        let remaining = self.target - score.total();
        let limit = Self::count_limit(remaining, size);

        // Smaller counts at the last size lead only to dead ends.
        let first = if index + 1 == self.sizes.len() {
            remaining.div_ceil(size).min(limit)
        } else {
            0
        };

        for count in first..=limit {
            self.check_terminated()?;
            let next = score
                .checked_add_packs(size, count)
                .ok_or(PackError::Overflow)?;

            let mut next_counts = counts.clone();
            next_counts.push(count);

            if next.covers(self.target) {
                next_counts.resize(self.sizes.len(), 0);
                let candidate = Candidate {
                    counts: next_counts,
                    score: next,
                };
                let improved = best.as_ref().map_or(true, |b| candidate.beats(b));
                stats.record_candidate(improved);
                if improved {
                    best = Some(candidate);
                }
                // Larger counts only ship more items.
                break;
            }

            let Some(bound) = self.optimistic_bound(index + 1, next) else {
                // No smaller sizes left to reach the target with.
                continue;
            };
            // Larger counts of this size can still lower the bound.
            if best.as_ref().is_some_and(|b| bound < b.score) {
                stats.record_prune();
                continue;
            }

            best = self.explore(index + 1, next_counts, next, best, stats)?;
        }

        Ok(best)
    }

    /// Splits on the counts of the largest size and explores each branch
    /// on the rayon pool.
    fn explore_parallel(&self) -> Result<(Option<Candidate>, SearchStats), PackError> {
        let size = self.sizes[0].get();
        let limit = Self::count_limit(self.target, size).min(self.target.div_ceil(size));

        let branches = (0..=limit)
            .into_par_iter()
            .map(|count| {
                self.check_terminated()?;
                let mut stats = SearchStats::default();
                stats.record_node();
                let score = PackScore::ZERO
                    .checked_add_packs(size, count)
                    .ok_or(PackError::Overflow)?;
                let mut counts = Counts::new();
                counts.push(count);

                if score.covers(self.target) {
                    counts.resize(self.sizes.len(), 0);
                    stats.record_candidate(true);
                    return Ok((Some(Candidate { counts, score }), stats));
                }
                let best = self.explore(1, counts, score, None, &mut stats)?;
                Ok((best, stats))
            })
            .collect::<Result<Vec<_>, PackError>>()?;

        let mut stats = SearchStats::default();
        let mut best = None;
        for (candidate, branch_stats) in branches {
            stats.merge(&branch_stats);
            best = keep_better(best, candidate);
        }
        Ok((best, stats))
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
