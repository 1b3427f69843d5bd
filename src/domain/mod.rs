//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! It defines entities, repository interfaces, and domain services independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`stats`] - Pure click statistics aggregation
//! - [`log_event`] - Spreadsheet log event model
//! - [`log_worker`] - Asynchronous log delivery worker
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the API or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Log Delivery Flow
//!
//! 1. HTTP handler completes a core operation (token issued or click recorded)
//! 2. A [`log_event::LogEvent`] is sent to the async channel
//! 3. [`log_worker::run_log_worker`] delivers events with retry and backoff
//! 4. Rows are appended via [`crate::infrastructure::sheet_log::SheetLog`]

pub mod entities;
pub mod log_event;
pub mod log_worker;
pub mod repositories;
pub mod stats;
