use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// A query parameter violates its declared constraint.
    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A path identifier is not a well-formed ObjectId.
    #[error("Invalid book ID format: {0}")]
    InvalidId(String),

    /// A well-formed identifier matched no record.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The record store is unreachable or errored.
    #[error("Store error: {0}")]
    Store(#[from] mongodb::error::Error),

    /// The message queue is unreachable or errored.
    #[error("Queue error: {0}")]
    Queue(#[from] lapin::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request error");
        } else {
            tracing::debug!(error = %self, "Client error");
        }

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for the application.
pub type Result<T> = std::result::Result<T, AppError>;
