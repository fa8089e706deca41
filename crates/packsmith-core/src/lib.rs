//! Packsmith Core - domain types for pack-combination solving
//!
//! This crate provides the fundamental vocabulary shared by every other
//! Packsmith crate:
//! - [`PackSize`] and the descending, de-duplicated [`PackSizes`] set
//! - [`OrderQuantity`] for the number of items requested
//! - [`PackCombination`], the size-to-count mapping that gets shipped
//! - [`PackScore`] for ranking combinations (Total, then PackCount)
//! - [`PackSolution`], a combination paired with its score

pub mod combination;
pub mod error;
pub mod pack;
pub mod score;
pub mod solution;

#[cfg(test)]
mod tests;

pub use combination::PackCombination;
pub use error::PackError;
pub use pack::{OrderQuantity, PackSize, PackSizes};
pub use score::PackScore;
pub use solution::PackSolution;
