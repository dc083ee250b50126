//! Error handling module
//!
//! Centralized error types and HTTP response conversion. Services raise at
//! the point of violation and propagate with `?`; this boundary maps each
//! taxonomy kind to a stable response shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("invalid request")]
    Validation(Vec<String>),

    #[error("authentication failed")]
    Authentication,

    // Deliberately does not confirm that the resource exists.
    #[error("the requested cart item is not available")]
    Ownership,

    #[error("customer not found: {0}")]
    CustomerNotFound(String),

    #[error("cart item not found: {0}")]
    CartItemNotFound(Uuid),

    #[error("username is already taken")]
    UsernameTaken,

    // Server errors (5xx)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl From<crate::domain::ValidationError> for AppError {
    fn from(err: crate::domain::ValidationError) -> Self {
        AppError::Validation(vec![err.to_string()])
    }
}

impl From<crate::auth::HasherError> for AppError {
    fn from(err: crate::auth::HasherError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, messages) = match &self {
            // 400 Bad Request - field-level messages, aggregable
            AppError::Validation(msgs) => {
                (StatusCode::BAD_REQUEST, "validation_failed", Some(msgs.clone()))
            }

            // 401 Unauthorized - generic, no credential detail leaks
            AppError::Authentication => {
                (StatusCode::UNAUTHORIZED, "authentication_failed", None)
            }

            // 403 Forbidden
            AppError::Ownership => {
                (StatusCode::FORBIDDEN, "not_owner", None)
            }

            // 404 Not Found
            AppError::CustomerNotFound(_) => {
                (StatusCode::NOT_FOUND, "customer_not_found", None)
            }
            AppError::CartItemNotFound(_) => {
                (StatusCode::NOT_FOUND, "cart_item_not_found", None)
            }

            // 409 Conflict
            AppError::UsernameTaken => {
                (StatusCode::CONFLICT, "username_taken", None)
            }

            // 500 Internal Server Error
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
            AppError::Config(e) => {
                tracing::error!("Config error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "config_error", None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            messages,
        };

        (status, Json(body)).into_response()
    }
}
