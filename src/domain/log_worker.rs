//! Asynchronous delivery of log events to the sheet log.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use crate::domain::log_event::LogEvent;
use crate::infrastructure::sheet_log::SheetLog;

/// Retries per event after the initial attempt.
const MAX_RETRIES: usize = 3;

/// Drains the log queue, delivering each event to the sheet log sink.
///
/// Each append is retried with jittered exponential backoff; an event that
/// still fails after [`MAX_RETRIES`] retries is dropped with a warning.
/// Delivery is best effort by design and never feeds back into request
/// handling. The worker exits when all senders are dropped.
pub async fn run_log_worker(mut rx: mpsc::Receiver<LogEvent>, sink: Arc<dyn SheetLog>) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(10).map(jitter).take(MAX_RETRIES);

        match Retry::spawn(strategy, || sink.append(&event)).await {
            Ok(()) => {
                metrics::counter!("sheet_log_events_delivered_total").increment(1);
                debug!(token = event.token(), "Log event delivered");
            }
            Err(e) => {
                metrics::counter!("sheet_log_events_dropped_total").increment(1);
                warn!(
                    token = event.token(),
                    error = %e,
                    "Dropping log event after {} retries",
                    MAX_RETRIES
                );
            }
        }
    }

    debug!("Log worker stopped (channel closed)");
}
