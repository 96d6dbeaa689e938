//! Error types for the directory server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Directory Error Enum ==
/// Unified error type for the directory server.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Path id is not a positive integer
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// No advocate with the given id
    #[error("Advocate not found: {0}")]
    NotFound(i64),

    /// Store query failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Any other unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            DirectoryError::InvalidId(_) => (StatusCode::BAD_REQUEST, "Invalid id"),
            DirectoryError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            DirectoryError::Database(_) | DirectoryError::Internal(_) => {
                // Detail goes to the log only
                error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the directory server.
pub type Result<T> = std::result::Result<T, DirectoryError>;
