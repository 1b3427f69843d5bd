//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod generate;
pub mod health;
pub mod index;
pub mod stats;
pub mod track;

pub use generate::generate_token_handler;
pub use health::health_handler;
pub use index::index_handler;
pub use stats::stats_handler;
pub use track::track_handler;
