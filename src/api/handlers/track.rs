//! Handler for tracked link redirects.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use std::net::SocketAddr;
use tracing::warn;

use crate::domain::entities::TrackOutcome;
use crate::domain::log_event::LogEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Fallback when the client sends no User-Agent header.
const UNKNOWN_USER_AGENT: &str = "Unknown";

/// Records a click and redirects to the token's target URL.
///
/// # Endpoint
///
/// `GET /track/{token}`
///
/// # Request Flow
///
/// 1. Extract client IP from the peer socket address
/// 2. Extract User-Agent header (`"Unknown"` when absent)
/// 3. Record the click atomically in the store
/// 4. Send a log event to the background worker
/// 5. Return 307 Temporary Redirect to the target URL
///
/// # Click Logging
///
/// Log events go to a bounded channel for async delivery to the
/// spreadsheet. If the queue is full, the event is dropped with a warning
/// (fire-and-forget); the redirect is never delayed by logging.
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't exist.
/// Returns 410 Gone if the token has expired.
pub async fn track_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let ip_address = addr.ip().to_string();
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(UNKNOWN_USER_AGENT)
        .to_string();

    let outcome = state
        .tracker_service
        .track_click(&token, &ip_address, &user_agent)
        .await?;

    match outcome {
        TrackOutcome::Recorded(receipt) => {
            // Send log event for async processing
            let event = LogEvent::click_tracked(&token, &ip_address, &user_agent, &receipt);
            if state.log_sender.try_send(event).is_err() {
                warn!("Log queue full, dropped click event for token {}", token);
            }

            Ok(Redirect::temporary(&receipt.target_url))
        }
        TrackOutcome::UnknownToken => {
            Err(AppError::not_found("Token not found", json!({ "token": token })))
        }
        TrackOutcome::Expired => Err(AppError::gone("Token expired", json!({ "token": token }))),
    }
}
