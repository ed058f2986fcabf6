//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Every error body has the shape `{"error": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Path id is not an integer (400)
    InvalidProductId,

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::InvalidProductId => {
                (StatusCode::BAD_REQUEST, "invalid product ID".to_owned())
            }
            Self::NotFound { resource, id } => {
                tracing::debug!(resource = %resource, id = %id, "resource not found");
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
