//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                - Service info and endpoint map
//! - `GET  /track/{token}`   - Click tracking redirect
//! - `GET  /stats/{token}`   - Aggregated click statistics
//! - `POST /generate-token`  - Issue a new tracking token
//! - `GET  /health`          - Health check: store, log queue, sheet log
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    generate_token_handler, health_handler, index_handler, stats_handler, track_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/track/{token}", get(track_handler))
        .route("/stats/{token}", get(stats_handler))
        .route("/generate-token", post(generate_token_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
