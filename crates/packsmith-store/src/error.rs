//! Error types for pack-size stores.

use thiserror::Error;

/// Errors raised by a [`PackSizeStore`](crate::PackSizeStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid store file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("pack size not found")]
    NotFound(u64),

    #[error("pack size must be positive")]
    InvalidSize,

    #[error("pack size limit of {max} reached")]
    Capacity { max: usize },
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
