//! Shared test fixtures for Packsmith crates.
//!
//! This crate provides pack-size fixtures and a brute-force oracle for
//! checking solver output. It does NOT depend on `packsmith-solver`, so the
//! solver can use it as a dev-dependency.
//!
//! - [`fixtures`] - The reference pack sizes and their expected solutions
//! - [`oracle`] - Exhaustive minimum over all combinations
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! packsmith-test = { workspace = true }
//! ```

pub mod fixtures;
pub mod oracle;

pub use fixtures::{reference_sizes, ExpectedPacks, REFERENCE_SIZES, REFERENCE_TABLE};
pub use oracle::oracle;
