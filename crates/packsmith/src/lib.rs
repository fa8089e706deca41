//! Packsmith - Pack-Combination Solving in Rust
//!
//! Given the pack sizes on hand, decide which packs to ship for an order:
//! never under-ship, ship as few surplus items as possible, then use as
//! few packs as possible.
//!
//! # Example
//!
//! ```rust
//! use packsmith::prelude::*;
//!
//! let sizes = PackSizes::new([250, 500, 1000, 2000, 5000]).unwrap();
//! let solution = solve(12_001, &sizes).unwrap();
//!
//! assert_eq!(solution.total(), 12_250);
//! assert_eq!(solution.pack_count(), 4);
//! assert_eq!(solution.to_string(), "12001 -> 2x5000 + 1x2000 + 1x250 (12250total/4packs)");
//! ```

// Domain types
pub use packsmith_core::{
    OrderQuantity, PackCombination, PackError, PackScore, PackSize, PackSizes, PackSolution,
};

// Configuration
pub use packsmith_config::{SearchMode, SolverConfig};

// Solver
pub use packsmith_solver::{solve, PackSolver, SearchStats, SolveCase, SolveResult};

/// Console output, enabled with the `console` feature.
#[cfg(feature = "console")]
pub use packsmith_console as console;

pub mod prelude {
    pub use super::{OrderQuantity, PackCombination, PackError, PackScore, PackSizes, PackSolution};
    pub use super::{solve, PackSolver, SearchMode, SolverConfig};
}
