//! # Link Tracker
//!
//! A link-tracking redirector service built with Axum.
//!
//! Opaque tokens are bound to target URLs; clicking a tracked link records
//! the click and redirects to the destination. Aggregated statistics are
//! served per token, and every issue/click event is mirrored to a Google
//! Sheets audit log by a background worker.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, statistics, and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Token store and spreadsheet log integrations
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Opaque URL-safe tokens with configurable expiry
//! - Atomic in-memory click recording under per-entry locks
//! - Asynchronous spreadsheet logging with retry logic
//! - Aggregated per-token click statistics
//! - Structured logging and component health checks
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: enable the spreadsheet audit log
//! export GOOGLE_SHEETS_ID="1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms"
//! export SHEETS_API_TOKEN="ya29.a0ARrdaM..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::TrackerService;
    pub use crate::domain::entities::{ClickRecord, TokenRecord, TrackOutcome};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
