//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;
use crate::utils::clock::current_timestamp;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: Counts held tokens
/// 2. **Log Queue**: Checks if channel is open and reports capacity
/// 3. **Sheet Log**: Tests backend reachability
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "timestamp": "2026-08-22T09:14:07.123456Z",
///   "checks": {
///     "store": {
///       "status": "ok",
///       "message": "Tracking 42 tokens"
///     },
///     "log_queue": {
///       "status": "ok",
///       "message": "Capacity: 10000"
///     },
///     "sheet_log": {
///       "status": "ok",
///       "message": "Log backend reachable"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;

    let queue_check = check_log_queue(&state);

    let sheet_check = check_sheet_log(&state).await;

    let all_healthy =
        store_check.status == "ok" && queue_check.status == "ok" && sheet_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: current_timestamp(),
        checks: HealthChecks {
            store: store_check,
            log_queue: queue_check,
            sheet_log: sheet_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the token store by counting held tokens.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.tracker_service.token_count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Tracking {} tokens", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {}", e)),
        },
    }
}

/// Checks if the log event queue is operational.
fn check_log_queue(state: &AppState) -> CheckStatus {
    if state.log_sender.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Log queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", state.log_sender.capacity())),
        }
    }
}

/// Checks sheet log connectivity.
async fn check_sheet_log(state: &AppState) -> CheckStatus {
    if state.sheet_log.check_connection().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Log backend reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Log backend unreachable".to_string()),
        }
    }
}
