/// Error types for pitcher-service
///
/// Every service-layer failure is an `AppError`; actix converts it into a JSON
/// error response through `ResponseError`.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Result type for pitcher-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Field-scoped validation failure
    #[error("Validation error: {field} {message}")]
    Validation { field: String, message: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A persistence round-trip exceeded the configured timeout (milliseconds)
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl AppError {
    pub fn validation(field: &str, message: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Stable error code, also used as the metrics outcome label
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::Validation { field, message } => {
                HttpResponse::build(status).json(json!({ "errors": { field: [message] } }))
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error while serving request");
                HttpResponse::build(status).json(ErrorResponse {
                    error: self.kind(),
                    message: "Database error".to_string(),
                })
            }
            _ => HttpResponse::build(status).json(ErrorResponse {
                error: self.kind(),
                message: self.to_string(),
            }),
        }
    }
}
