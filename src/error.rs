//! Application error type and its single translation point to HTTP.
//!
//! All operation-level failures are converted to the uniform
//! `{"error": "<message>"}` JSON body here; no internal error ever crashes
//! the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::db_error::is_unique_violation_on_slug;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Internal error kinds, each mapped to exactly one HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or incorrect shared secret. Terminal, 401.
    #[error("{0}")]
    Unauthorized(String),

    /// Malformed or missing input. Terminal, 400; the caller must resubmit.
    #[error("{0}")]
    Validation(String),

    /// Slug uniqueness violation at insert time. Surfaced as 400 after the
    /// bounded retry in [`crate::application::services::LinkService`] is
    /// exhausted.
    #[error("{0}")]
    Conflict(String),

    /// Transient store failure (pool exhaustion, network, timeout). 503, no
    /// partial state written.
    #[error("{0}")]
    StoreUnavailable(String),

    /// Anything else. 500.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            AppError::Validation(message) | AppError::Conflict(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::StoreUnavailable(message) => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_slug(&e) {
            return AppError::conflict("Slug already exists");
        }

        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::unavailable("Link store unavailable")
            }
            _ => {
                tracing::error!("Database error: {e}");
                AppError::internal("Database error")
            }
        }
    }
}
