//! # API Error Types
//!
//! Maps solver and store errors to HTTP status codes and the response
//! envelope. Internal error details are logged, never returned.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use packsmith_core::PackError;
use packsmith_store::StoreError;
use thiserror::Error;

use crate::response::ApiResponse;

/// Error returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The query string was missing or could not be parsed (400).
    #[error("Invalid query parameters")]
    InvalidQuery,

    /// The request body was missing or malformed (400).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The order quantity was below one (400).
    #[error("invalid order-item-quantity")]
    InvalidQuantity,

    /// The store holds no pack sizes to solve with (400).
    #[error("no pack sizes configured")]
    NoPackSizes,

    /// The size to remove is not configured (400).
    #[error("pack size not found")]
    PackSizeNotFound,

    /// The store is at capacity (400).
    #[error("pack size limit of {max} reached")]
    StoreFull { max: usize },

    /// The solve exceeded its time budget (503).
    #[error("solve timed out")]
    SolveTimeout,

    /// Anything else (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the status code and the `error` field for this error.
    fn status_and_error(&self) -> (StatusCode, String) {
        match self {
            Self::InvalidQuery => (StatusCode::BAD_REQUEST, "Invalid query parameters".into()),
            Self::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input".into()),
            Self::InvalidQuantity
            | Self::NoPackSizes
            | Self::PackSizeNotFound
            | Self::StoreFull { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::SolveTimeout => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error".into()),
        }
    }

    /// Returns the `message` field: details for bad input, a fixed text
    /// for internal failures, nothing otherwise.
    fn message(&self) -> String {
        match self {
            Self::InvalidInput(details) => details.clone(),
            Self::Internal(_) => "Something went wrong".into(),
            _ => String::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_error();

        if let Self::Internal(_) = &self {
            tracing::error!(error = %self, "internal server error");
        }

        ApiResponse::fail(status, error, self.message()).into_response()
    }
}

impl From<PackError> for ApiError {
    fn from(err: PackError) -> Self {
        match err {
            PackError::InvalidQuantity => Self::InvalidQuantity,
            PackError::EmptyPackSizes => Self::NoPackSizes,
            PackError::InvalidPackSize => Self::InvalidInput(err.to_string()),
            PackError::Overflow => Self::Internal(err.to_string()),
            // Solves are only cancelled once their time budget is spent.
            PackError::Cancelled => Self::SolveTimeout,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::PackSizeNotFound,
            StoreError::InvalidSize => Self::InvalidInput(err.to_string()),
            StoreError::Capacity { max } => Self::StoreFull { max },
            StoreError::Io(_) | StoreError::Json(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(_: QueryRejection) -> Self {
        Self::InvalidQuery
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_query_status() {
        let (status, error) = ApiError::InvalidQuery.status_and_error();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, "Invalid query parameters");
    }

    #[test]
    fn invalid_input_keeps_details() {
        let err = ApiError::InvalidInput("missing field `size`".into());
        let (status, error) = err.status_and_error();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, "Invalid input");
        assert_eq!(err.message(), "missing field `size`");
    }

    #[test]
    fn internal_hides_details() {
        let err = ApiError::Internal("disk on fire".into());
        let (status, error) = err.status_and_error();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error, "internal_error");
        assert_eq!(err.message(), "Something went wrong");
    }

    #[test]
    fn timeout_is_unavailable() {
        let (status, error) = ApiError::SolveTimeout.status_and_error();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error, "solve timed out");
    }

    #[test]
    fn pack_errors_convert() {
        assert!(matches!(
            ApiError::from(PackError::InvalidQuantity),
            ApiError::InvalidQuantity
        ));
        assert!(matches!(
            ApiError::from(PackError::EmptyPackSizes),
            ApiError::NoPackSizes
        ));
        assert!(matches!(
            ApiError::from(PackError::Overflow),
            ApiError::Internal(_)
        ));
        assert!(matches!(
            ApiError::from(PackError::Cancelled),
            ApiError::SolveTimeout
        ));
    }

    #[test]
    fn store_errors_convert() {
        assert!(matches!(
            ApiError::from(StoreError::NotFound(7)),
            ApiError::PackSizeNotFound
        ));
        assert!(matches!(
            ApiError::from(StoreError::Capacity { max: 4 }),
            ApiError::StoreFull { max: 4 }
        ));
        let io = std::io::Error::new(std::io::ErrorKind::Other, "read-only");
        assert!(matches!(
            ApiError::from(StoreError::Io(io)),
            ApiError::Internal(_)
        ));
    }
}
