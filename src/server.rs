//! HTTP server initialization and runtime setup.
//!
//! Handles store and sheet log setup, worker spawning, and Axum server lifecycle.

use crate::application::services::TrackerService;
use crate::config::Config;
use crate::domain::log_worker::run_log_worker;
use crate::infrastructure::sheet_log::{NullSheetLog, SheetLog, SheetsApiLog};
use crate::infrastructure::store::MemoryTokenRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory token store
/// - Google Sheets log (or NullSheetLog fallback)
/// - Background log worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(MemoryTokenRepository::new());
    tracing::info!("In-memory token store ready");

    let sheet_log: Arc<dyn SheetLog> = match (&config.google_sheets_id, &config.sheets_api_token) {
        (Some(sheets_id), Some(api_token)) => {
            match SheetsApiLog::connect(&config.sheets_api_endpoint, sheets_id, api_token).await {
                Ok(sheets) => {
                    tracing::info!("Sheet logging enabled (Google Sheets)");
                    Arc::new(sheets)
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to connect to Google Sheets: {}. Using NullSheetLog.",
                        e
                    );
                    Arc::new(NullSheetLog::new())
                }
            }
        }
        _ => {
            tracing::info!("Sheet logging disabled (NullSheetLog)");
            Arc::new(NullSheetLog::new())
        }
    };

    let (log_tx, log_rx) = mpsc::channel(config.log_queue_capacity);

    tokio::spawn(run_log_worker(log_rx, sheet_log.clone()));
    tracing::info!("Log worker started");

    let tracker_service = Arc::new(TrackerService::new(
        repository,
        config.token_length,
        config.token_expiry_days,
    ));

    let state = AppState {
        tracker_service,
        sheet_log,
        log_sender: log_tx,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
///
/// Dropping the server also drops the log sender side, which lets the log
/// worker drain its queue and exit.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received");
}
