//! Error types for Packsmith

use thiserror::Error;

/// Precondition violations detected by the core types and the solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// A pack size of zero was supplied.
    #[error("pack size must be a positive integer")]
    InvalidPackSize,

    /// No pack sizes were supplied.
    #[error("pack size set must not be empty")]
    EmptyPackSizes,

    /// An order quantity of zero was supplied.
    #[error("order quantity must be a positive integer")]
    InvalidQuantity,

    /// A combination total does not fit in `u64`.
    #[error("pack total overflows u64")]
    Overflow,

    /// The search was stopped through its termination flag.
    #[error("solve cancelled")]
    Cancelled,
}

/// Result type alias for Packsmith operations
pub type Result<T> = std::result::Result<T, PackError>;
