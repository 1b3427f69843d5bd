//! Handler for token generation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;
use validator::Validate;

use crate::api::dto::generate::{GenerateTokenRequest, GenerateTokenResponse};
use crate::domain::log_event::LogEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Issues a new tracking token for a target URL.
///
/// # Endpoint
///
/// `POST /generate-token`
///
/// # Request Body
///
/// ```json
/// {
///   "target_url": "https://example.com/landing",
///   "email": "user@example.com",     // optional
///   "campaign": "spring-sale"        // optional, defaults to "default"
/// }
/// ```
///
/// # Response
///
/// Returns 201 Created:
///
/// ```json
/// {
///   "token": "urlsafe-base64-token",
///   "tracker_url": "https://tracker.example.com/track/urlsafe-base64-token",
///   "target_url": "https://example.com/landing",
///   "campaign": "spring-sale"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `target_url` is missing or malformed, or if
/// `email` is provided but malformed.
pub async fn generate_token_handler(
    State(state): State<AppState>,
    Json(payload): Json<GenerateTokenRequest>,
) -> Result<(StatusCode, Json<GenerateTokenResponse>), AppError> {
    payload.validate()?;

    let record = state
        .tracker_service
        .generate_token(payload.target_url, payload.email, payload.campaign)
        .await?;

    // Send log event for async processing
    let event = LogEvent::token_created(&record);
    if state.log_sender.try_send(event).is_err() {
        warn!("Log queue full, dropped creation event for token {}", record.token);
    }

    let tracker_url = format!(
        "{}/track/{}",
        state.base_url.trim_end_matches('/'),
        record.token
    );

    Ok((
        StatusCode::CREATED,
        Json(GenerateTokenResponse {
            token: record.token,
            tracker_url,
            target_url: record.target_url,
            campaign: record.campaign,
        }),
    ))
}
