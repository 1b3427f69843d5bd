//! Business logic services for the application layer.

pub mod tracker_service;

pub use tracker_service::TrackerService;
