pub mod handlers;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::StoreError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response body.
///
/// Every error, regardless of status code, carries a single human-readable
/// `detail` field:
///
/// ```json
/// { "detail": "Product not found" }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub detail: String,
}

/// Application error type that converts into HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database not configured")]
    StorageUnavailable,

    #[error("Database error: {0}")]
    Storage(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => AppError::StorageUnavailable,
            StoreError::InvalidId(raw) => {
                AppError::InvalidIdentifier(format!("Invalid identifier: {}", raw))
            }
            StoreError::Database(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!("JSON extraction error: {:?}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e.body_text())
            }
            AppError::Validation(msg) => {
                tracing::info!("Validation error: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            AppError::InvalidIdentifier(msg) => {
                tracing::info!("Invalid identifier: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::StorageUnavailable => {
                tracing::error!("Request rejected: database not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database not configured".to_string(),
                )
            }
            AppError::Storage(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", msg),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
