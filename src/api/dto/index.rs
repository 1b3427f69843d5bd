//! DTOs for the service index endpoint.

use serde::Serialize;

/// Service descriptor returned at the root path.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub name: String,
    pub version: String,
    pub endpoints: EndpointMap,
}

/// Well-known endpoint paths for API discovery.
#[derive(Debug, Serialize)]
pub struct EndpointMap {
    pub track: String,
    pub stats: String,
    pub health: String,
    pub generate: String,
}
