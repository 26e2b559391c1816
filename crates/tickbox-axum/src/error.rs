//! Error types for the HTTP adapter.
//!
//! `CoreError` values cross this boundary exactly once, where they are
//! logged and mapped onto status codes and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use tickbox_core::{CoreError, RepositoryError};

/// Errors a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No todo matches the request. Carries the exact client-facing
    /// message.
    #[error("{0}")]
    NotFound(String),

    /// Anything the server cannot express more precisely.
    #[error("internal server error: {0}")]
    Internal(String),
}

/// JSON shape of every error response.
#[derive(Serialize)]
struct ErrorPayload {
    error: String,
    status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let payload = ErrorPayload {
            error,
            status: status.as_u16(),
        };
        (status, axum::Json(payload)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(msg) => {
                // Surfaced to the client verbatim, logged first
                tracing::error!("{msg}");
                ApiError::NotFound(msg)
            }
            CoreError::Repository(repo_err) => repo_err.into(),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // A miss that reaches this boundary unmapped still answers
            // with the one documented message
            RepositoryError::NotFound(id) => CoreError::not_found(id).into(),
            RepositoryError::Storage(msg) => ApiError::Internal(format!("Storage: {msg}")),
        }
    }
}
