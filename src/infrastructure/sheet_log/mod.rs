//! Spreadsheet logging for issued tokens and recorded clicks.
//!
//! Provides a [`SheetLog`] trait with two implementations:
//! - [`SheetsApiLog`] - Google Sheets REST client
//! - [`NullSheetLog`] - no-op implementation for log-less operation

mod null;
mod service;
mod sheets;

pub use null::NullSheetLog;
pub use service::{SheetLog, SheetLogError, SheetLogResult};
pub use sheets::SheetsApiLog;

#[cfg(test)]
pub use service::MockSheetLog;
