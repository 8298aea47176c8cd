//! REST error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use curricula_types::CurriculaError;
use serde::Serialize;
use thiserror::Error;

/// API-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Domain validation failure
    #[error("Validation error: {0}")]
    Validation(String),

    /// Actor's role does not permit the operation
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Concurrent update won; caller should refetch and retry
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CurriculaError> for ApiError {
    fn from(err: CurriculaError) -> Self {
        match err {
            CurriculaError::Validation(_) => ApiError::Validation(err.to_string()),
            CurriculaError::Authorization { .. } => ApiError::Forbidden(err.to_string()),
            CurriculaError::Conflict { .. } => ApiError::Conflict(err.to_string()),
            CurriculaError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CurriculaError::Storage(_) => ApiError::Internal(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handler functions
pub type ApiResult<T> = Result<T, ApiError>;
