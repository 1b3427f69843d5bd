//! Handler for token click statistics.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves aggregated click statistics for a tracking token.
///
/// # Endpoint
///
/// `GET /stats/{token}`
///
/// # Response
///
/// ```json
/// {
///   "token": "urlsafe-base64-token",
///   "total_clicks": 3,
///   "unique_ips": 2,
///   "clicks_by_date": { "2026-08-22": 3 },
///   "clicks_by_user_agent": { "Mozilla/5.0": 3 },
///   "first_click": "2026-08-22T09:14:07.123456Z",
///   "last_click": "2026-08-22T11:02:51.654321Z"
/// }
/// ```
///
/// Expired tokens still report their accumulated history.
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state
        .tracker_service
        .get_click_stats(&token)
        .await?
        .ok_or_else(|| AppError::not_found("Token not found", json!({ "token": token })))?;

    Ok(Json(StatsResponse::from_stats(token, stats)))
}
