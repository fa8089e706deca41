//! PackSolution - the answer for one order

use std::fmt;

use crate::combination::PackCombination;
use crate::pack::OrderQuantity;
use crate::score::PackScore;

/// A pack combination chosen for an order quantity.
///
/// Callers that need the shipped total or the pack count read them from
/// here rather than recomputing them from the combination.
#[derive(Clone, PartialEq, Eq)]
pub struct PackSolution {
    quantity: OrderQuantity,
    combination: PackCombination,
}

impl PackSolution {
    /// Pairs a combination with the quantity it was chosen for.
    pub fn new(quantity: OrderQuantity, combination: PackCombination) -> Self {
        Self {
            quantity,
            combination,
        }
    }

    /// Returns the order quantity this solution answers.
    #[inline]
    pub fn quantity(&self) -> OrderQuantity {
        self.quantity
    }

    /// Returns the chosen packs.
    #[inline]
    pub fn combination(&self) -> &PackCombination {
        &self.combination
    }

    /// Consumes the solution, returning the chosen packs.
    pub fn into_combination(self) -> PackCombination {
        self.combination
    }

    /// Returns the Total/PackCount score.
    #[inline]
    pub fn score(&self) -> PackScore {
        self.combination.score()
    }

    /// Returns the number of items shipped.
    #[inline]
    pub fn total(&self) -> u64 {
        self.combination.total()
    }

    /// Returns the number of physical packs shipped.
    #[inline]
    pub fn pack_count(&self) -> u64 {
        self.combination.pack_count()
    }

    /// Returns how many items are shipped beyond the order.
    pub fn overshoot(&self) -> u64 {
        self.total().saturating_sub(self.quantity.get())
    }
}

impl fmt::Debug for PackSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackSolution")
            .field("quantity", &self.quantity.get())
            .field("packs", &self.combination)
            .field("score", &self.score())
            .finish()
    }
}

impl fmt::Display for PackSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.quantity, self.combination, self.combination.score()
        )
    }
}
