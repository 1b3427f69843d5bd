//! HTTP middleware for request processing.
//!
//! Provides observability middleware for structured request logging.

pub mod tracing;
