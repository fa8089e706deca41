//! Packsmith Solver
//!
//! Chooses which packs to ship for an order:
//! - [`PackSolver`] dispatches between the four solving cases
//! - A bounded branch search handles quantities that need several sizes
//! - [`SearchStats`] counts the work done by that search
//!
//! Logging levels:
//! - **INFO**: `solve_start` and `solve_end` events per order
//! - **DEBUG**: `search` summaries for every bounded search run
//!
//! Events are emitted under the `packsmith_solver` target.

mod search;
pub mod solver;
pub mod stats;

pub use search::OVERSHOOT_SLACK;
pub use solver::{solve, PackSolver, SolveCase, SolveResult};
pub use stats::SearchStats;
