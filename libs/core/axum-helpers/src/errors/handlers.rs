use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        detail: "Not Found".to_string(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
