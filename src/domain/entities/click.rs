//! Click entities recorded when a tracked link is visited.

use chrono::{DateTime, Utc};

/// A single visit to a tracked link.
///
/// `ip_address` and `user_agent` are stored exactly as received; truncation
/// for grouping or external logging happens at those boundaries, never here.
/// The `click_hash` fingerprint is kept for future deduplication and does not
/// influence whether a click is accepted.
#[derive(Debug, Clone)]
pub struct ClickRecord {
    pub ip_address: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
    pub click_hash: String,
}

impl ClickRecord {
    /// Creates a new ClickRecord instance.
    pub fn new(
        ip_address: String,
        user_agent: String,
        timestamp: DateTime<Utc>,
        click_hash: String,
    ) -> Self {
        Self {
            ip_address,
            user_agent,
            timestamp,
            click_hash,
        }
    }
}

/// Payload returned to the caller when a click is recorded.
///
/// `click_count` is the counter value after the increment, and `timestamp`
/// matches the stored [`ClickRecord`] exactly.
#[derive(Debug, Clone)]
pub struct ClickReceipt {
    pub target_url: String,
    pub timestamp: DateTime<Utc>,
    pub click_count: u64,
}

/// Business outcome of a click tracking attempt.
///
/// Unknown and expired tokens are ordinary values here, not faults; storage
/// failures travel separately as [`crate::error::AppError`].
#[derive(Debug, Clone)]
pub enum TrackOutcome {
    /// The click was appended and the counter incremented.
    Recorded(ClickReceipt),
    /// No record exists for the token. Nothing was modified.
    UnknownToken,
    /// The record exists but has passed its expiry. Nothing was modified.
    Expired,
}

impl TrackOutcome {
    /// Returns true for the recorded variant.
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded(_))
    }
}
