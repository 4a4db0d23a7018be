//! API route definitions.

use axum::{
    Json, Router,
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use paycalc_shared::AppError;
use serde_json::json;

use crate::AppState;

pub mod conversions;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(conversions::routes())
}

/// Builds a JSON error response from an application error.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.message(),
        })),
    )
        .into_response()
}

/// Fallback for unknown paths.
pub(crate) async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    error_response(&AppError::NotFound(format!("no route for {}", uri.path())))
}
