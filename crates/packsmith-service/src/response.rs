//! The JSON envelope wrapped around every `/api` response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Response envelope: `{status_code, success, message?, data?, error?}`.
///
/// Empty messages and errors are omitted from the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn non_empty(s: impl Into<String>) -> Option<String> {
    Some(s.into()).filter(|s| !s.is_empty())
}

impl<T> ApiResponse<T> {
    /// A 200 response carrying `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            success: true,
            message: non_empty(message),
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// A 200 response without data.
    pub fn success_no_data(message: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            success: true,
            message: non_empty(message),
            data: None,
            error: None,
        }
    }

    /// A failed response without data.
    pub fn fail(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            success: false,
            message: non_empty(message),
            data: None,
            error: non_empty(error),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
