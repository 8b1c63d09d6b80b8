//! # API Errors
//!
//! Every client-visible failure path of the HTTP surface. Each error
//! knows its status code and renders as `{"error": "<message>"}`, the
//! single-field shape clients rely on.
//!
//! Two quirks are kept for compatibility with existing clients: a
//! missing user answers 400 (not 404), and store failures always answer
//! with the fixed message `"Server error"`, with detail kept server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API surface errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Validation (400)
    // ==================
    /// User creation without a username
    #[error("Username is required")]
    MissingUsername,

    /// Exercise creation without description or duration
    #[error("Description and duration are required")]
    MissingExerciseFields,

    /// Duration that does not parse as a whole number of minutes
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// Date or date bound that does not parse as a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Log limit that does not parse as a non-negative integer
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    // ==================
    // Lookup (400, compatibility quirk)
    // ==================
    /// Referenced user does not exist
    #[error("User not found")]
    UserNotFound,

    // ==================
    // Server (500)
    // ==================
    /// Any store failure; never leaks detail to the client
    #[error("Server error")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUsername
            | ApiError::MissingExerciseFields
            | ApiError::InvalidDuration(_)
            | ApiError::InvalidDate(_)
            | ApiError::InvalidLimit(_)
            | ApiError::UserNotFound => StatusCode::BAD_REQUEST,

            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(err) = &self {
            tracing::error!(error = %err, "store operation failed");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
