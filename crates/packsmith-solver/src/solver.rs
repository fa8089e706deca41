//! The pack solver: case dispatch around the bounded branch search.
//!
//! Logging levels:
//! - **INFO**: Solve start/end with the case taken and the final score
//! - **DEBUG**: Bounded search summaries (nodes, candidates, pruned)

use std::fmt;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use packsmith_config::{SearchMode, SolverConfig};
use packsmith_core::{OrderQuantity, PackCombination, PackError, PackSizes, PackSolution};
use tracing::info;

use crate::search::BoundedSearch;
use crate::stats::SearchStats;

/// Which of the four solving cases produced a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveCase {
    /// The quantity equals a pack size: one pack of it.
    ExactMatch,
    /// The quantity is below the smallest size: one smallest pack.
    BelowSmallest,
    /// Between the smallest and largest sizes: bounded search.
    BelowLargest,
    /// At or above the largest size: largest packs plus a remainder.
    AboveLargest,
}

impl fmt::Display for SolveCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveCase::ExactMatch => write!(f, "ExactMatch"),
            SolveCase::BelowSmallest => write!(f, "BelowSmallest"),
            SolveCase::BelowLargest => write!(f, "BelowLargest"),
            SolveCase::AboveLargest => write!(f, "AboveLargest"),
        }
    }
}

/// Result of a solve with its diagnostics.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The chosen packs.
    pub solution: PackSolution,
    /// The case that produced them.
    pub case: SolveCase,
    /// Bounded search counters; all zero when no search ran.
    pub stats: SearchStats,
    /// Wall time spent solving.
    pub duration: Duration,
}

/// Chooses the pack combination for an order.
///
/// Stateless apart from its configuration, so one instance can be shared
/// across threads and called concurrently.
///
/// # Example
///
/// ```
/// use packsmith_core::{OrderQuantity, PackSizes};
/// use packsmith_solver::PackSolver;
///
/// let sizes = PackSizes::new([250, 500, 1000, 2000, 5000]).unwrap();
/// let solver = PackSolver::default();
///
/// let solution = solver.solve(OrderQuantity::new(12_001).unwrap(), &sizes).unwrap();
/// assert_eq!(solution.total(), 12_250);
/// assert_eq!(solution.pack_count(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackSolver {
    config: SolverConfig,
}

impl PackSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Creates a solver using the given search mode.
    pub fn with_search_mode(mode: SearchMode) -> Self {
        Self::new(SolverConfig::new().with_search_mode(mode))
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves one order, returning the chosen packs.
    pub fn solve(
        &self,
        quantity: OrderQuantity,
        sizes: &PackSizes,
    ) -> Result<PackSolution, PackError> {
        self.solve_with_stats(quantity, sizes)
            .map(|result| result.solution)
    }

    /// Solves one order, returning the chosen packs with diagnostics.
    pub fn solve_with_stats(
        &self,
        quantity: OrderQuantity,
        sizes: &PackSizes,
    ) -> Result<SolveResult, PackError> {
        self.run(quantity, sizes, None)
    }

    /// Solves one order, giving up with [`PackError::Cancelled`] once
    /// `terminate` is set.
    ///
    /// Only the bounded search polls the flag; the other cases finish in
    /// constant time.
    pub fn solve_with_termination(
        &self,
        quantity: OrderQuantity,
        sizes: &PackSizes,
        terminate: &AtomicBool,
    ) -> Result<SolveResult, PackError> {
        self.run(quantity, sizes, Some(terminate))
    }

    fn run(
        &self,
        quantity: OrderQuantity,
        sizes: &PackSizes,
        terminate: Option<&AtomicBool>,
    ) -> Result<SolveResult, PackError> {
        let started = Instant::now();
        let items = quantity.get();
        let largest = sizes.largest();
        let smallest = sizes.smallest();

        info!(
            event = "solve_start",
            quantity = items,
            size_count = sizes.len() as u64,
        );

        let mut stats = SearchStats::default();
        let (case, combination) = if let Some(size) = sizes.find(items) {
            (SolveCase::ExactMatch, PackCombination::single(size))
        } else if items < smallest.get() {
            (SolveCase::BelowSmallest, PackCombination::single(smallest))
        } else if items < largest.get() {
            let packs = self.search(sizes, items, terminate, &mut stats)?;
            (SolveCase::BelowLargest, packs)
        } else {
            let count = items / largest.get();
            let remainder = items % largest.get();
            let mut packs = PackCombination::of(largest, count)?;

            if remainder == 0 {
                // Whole largest packs cover the order exactly.
            } else if let Some(size) = sizes.find(remainder) {
                packs.add(size, 1)?;
            } else if remainder < smallest.get() {
                packs.add(smallest, 1)?;
            } else {
                let rest = self.search(sizes, remainder, terminate, &mut stats)?;
                packs.merge(&rest)?;
            }
            (SolveCase::AboveLargest, packs)
        };

        let solution = PackSolution::new(quantity, combination);
        let duration = started.elapsed();

        info!(
            event = "solve_end",
            case = %case,
            score = %solution.score(),
            total = solution.total(),
            overshoot = solution.overshoot(),
            pack_count = solution.pack_count(),
            nodes = stats.nodes_explored,
            nodes_per_second = stats.nodes_per_second(duration) as u64,
            duration_us = duration.as_micros() as u64,
        );

        Ok(SolveResult {
            solution,
            case,
            stats,
            duration,
        })
    }

    fn search(
        &self,
        sizes: &PackSizes,
        target: u64,
        terminate: Option<&AtomicBool>,
        stats: &mut SearchStats,
    ) -> Result<PackCombination, PackError> {
        let search = BoundedSearch::new(sizes.as_slice(), target).with_termination(terminate);
        let (best, search_stats) = search.run(self.config.search_mode)?;
        stats.merge(&search_stats);

        match best {
            Some(candidate) => candidate.into_combination(sizes.as_slice()),
            // The slack on the largest size always reaches the target, so
            // this only guards against a search that found nothing.
            None => {
                let largest = sizes.largest();
                PackCombination::of(largest, target.div_ceil(largest.get()))
            }
        }
    }
}

/// Solves one order with the default configuration.
///
/// # Errors
///
/// Returns [`PackError::InvalidQuantity`] for a zero quantity and
/// [`PackError::Overflow`] if the shipped total does not fit in `u64`.
///
/// # Example
///
/// ```
/// use packsmith_core::PackSizes;
///
/// let sizes = PackSizes::new([250, 500, 1000, 2000, 5000]).unwrap();
/// let solution = packsmith_solver::solve(251, &sizes).unwrap();
/// assert_eq!(solution.total(), 500);
/// assert_eq!(solution.pack_count(), 1);
/// ```
pub fn solve(quantity: u64, sizes: &PackSizes) -> Result<PackSolution, PackError> {
    PackSolver::default().solve(OrderQuantity::new(quantity)?, sizes)
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
