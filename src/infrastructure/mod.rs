//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for token storage and spreadsheet logging.
//!
//! # Modules
//!
//! - [`store`] - In-memory token storage
//! - [`sheet_log`] - Spreadsheet logging (Google Sheets and no-op implementations)

pub mod sheet_log;
pub mod store;
