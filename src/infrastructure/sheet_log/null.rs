//! No-op sheet log implementation.

use async_trait::async_trait;
use tracing::debug;

use super::service::{SheetLog, SheetLogResult};
use crate::domain::log_event::LogEvent;

/// A sheet log that accepts every event and discards it.
///
/// Used when no spreadsheet is configured or the initial connection fails,
/// letting the rest of the application run unchanged.
///
/// # Use Cases
///
/// - Development environments without Sheets credentials
/// - Test scenarios where external logging should be bypassed
/// - Fallback when the Sheets connection fails at startup
pub struct NullSheetLog;

impl NullSheetLog {
    /// Creates a new NullSheetLog instance.
    pub fn new() -> Self {
        debug!("Using NullSheetLog (spreadsheet logging disabled)");
        Self
    }
}

impl Default for NullSheetLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SheetLog for NullSheetLog {
    async fn append(&self, _event: &LogEvent) -> SheetLogResult<()> {
        Ok(())
    }

    async fn check_connection(&self) -> bool {
        true
    }
}
