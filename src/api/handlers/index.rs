//! Handler for the service index endpoint.

use axum::Json;

use crate::api::dto::index::{EndpointMap, IndexResponse};

/// Returns service metadata and well-known endpoint paths.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// {
///   "name": "link-tracker",
///   "version": "0.1.0",
///   "endpoints": {
///     "track": "/track/{token}",
///     "stats": "/stats/{token}",
///     "health": "/health",
///     "generate": "/generate-token"
///   }
/// }
/// ```
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointMap {
            track: "/track/{token}".to_string(),
            stats: "/stats/{token}".to_string(),
            health: "/health".to_string(),
            generate: "/generate-token".to_string(),
        },
    })
}
