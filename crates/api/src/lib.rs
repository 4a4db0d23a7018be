//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for forward and inverse conversions
//! - Request validation and default resolution
//! - Response types with currency-formatted amounts

pub mod routes;

use axum::Router;
use paycalc_shared::CalculatorConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Defaults applied to fields a request leaves out.
    pub calculator: Arc<CalculatorConfig>,
}

impl AppState {
    /// Creates state from calculator defaults.
    #[must_use]
    pub fn new(calculator: CalculatorConfig) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
