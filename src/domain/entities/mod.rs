//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the link tracking service. Entities are plain data structures
//! without business logic beyond their own invariants.
//!
//! # Entity Types
//!
//! - [`TokenRecord`] - A tracking token bound to a destination URL
//! - [`ClickRecord`] - A single visit to a tracked link
//! - [`ClickReceipt`] / [`TrackOutcome`] - Result values of a tracking attempt
//! - [`TokenInfo`] - Token metadata with its full click history
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod click;
pub mod token;

pub use click::{ClickReceipt, ClickRecord, TrackOutcome};
pub use token::{DEFAULT_CAMPAIGN, TokenInfo, TokenRecord};
