use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::TrackerService;
use crate::domain::log_event::LogEvent;
use crate::infrastructure::sheet_log::SheetLog;
use crate::infrastructure::store::MemoryTokenRepository;

/// Shared state injected into every HTTP handler.
///
/// Cloning is cheap: the heavyweight members sit behind `Arc` and the log
/// sender is a channel handle.
#[derive(Clone)]
pub struct AppState {
    pub tracker_service: Arc<TrackerService<MemoryTokenRepository>>,
    pub sheet_log: Arc<dyn SheetLog>,
    pub log_sender: mpsc::Sender<LogEvent>,
    /// Public base URL prepended to `/track/{token}` in issued links.
    pub base_url: String,
}
