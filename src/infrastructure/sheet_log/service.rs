//! Sheet log trait definition and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::log_event::LogEvent;

/// Errors that can occur while talking to the spreadsheet backend.
#[derive(Debug, Error)]
pub enum SheetLogError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("Sheets API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Sheets API returned status {status}: {body}")]
    Api { status: u16, body: String },
}

/// Result type for sheet log operations.
pub type SheetLogResult<T> = Result<T, SheetLogError>;

/// Trait for the external spreadsheet audit log.
///
/// Implementations must be thread-safe. Delivery is best effort: the log
/// worker retries a failed append a few times and then drops the event, so
/// implementations should surface errors honestly rather than masking them.
///
/// # Implementations
///
/// - [`SheetsApiLog`](super::SheetsApiLog) - Google Sheets REST client
/// - [`NullSheetLog`](super::NullSheetLog) - no-op sink for disabled logging
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetLog: Send + Sync {
    /// Appends one event as a spreadsheet row.
    ///
    /// # Errors
    ///
    /// Returns `SheetLogError` if the request fails or the API rejects it.
    async fn append(&self, event: &LogEvent) -> SheetLogResult<()>;

    /// Checks whether the backend is reachable.
    ///
    /// Used by health check endpoints to report log status.
    async fn check_connection(&self) -> bool;
}
