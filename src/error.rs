//! Error types for the REST API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

#[cfg(test)]
mod tests;

/// Fixed message returned for unhandled errors.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

/// A single request-validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field as it appears on the wire.
    #[serde(rename = "Field")]
    pub field: String,
    /// Human-readable constraint description.
    #[serde(rename = "Message")]
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Per-field validation failures.
    #[serde(rename = "Errors")]
    pub errors: Vec<FieldError>,
}

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request payload failed field-level validation.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing, malformed or expired credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated caller lacks a required role.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Convenience constructor for a single-field validation failure.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation(vec![FieldError::new(field, message)])
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse { errors }),
            )
                .into_response(),
            // Missing resources surface as a bare 404.
            ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApiError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: message,
                    code: "UNAUTHORIZED".to_string(),
                }),
            )
                .into_response(),
            ApiError::Forbidden(message) => (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    error: message,
                    code: "FORBIDDEN".to_string(),
                }),
            )
                .into_response(),
            ApiError::Database(detail) | ApiError::Internal(detail) => {
                // The detail is logged server-side and never sent to the caller.
                tracing::error!(detail = %detail, "unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: INTERNAL_ERROR_MESSAGE.to_string(),
                        code: "INTERNAL_ERROR".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
