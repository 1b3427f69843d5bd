//! In-memory token store backed by a concurrent hash map.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::entities::{ClickReceipt, ClickRecord, TokenInfo, TokenRecord, TrackOutcome};
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use crate::utils::click_hash::click_hash;

/// A token record together with its owned click history.
struct TokenEntry {
    record: TokenRecord,
    clicks: Vec<ClickRecord>,
}

/// In-memory implementation of [`TokenRepository`].
///
/// Entries live in a [`DashMap`], whose per-entry locking gives
/// [`TokenRepository::record_click`] its atomicity: lookup, expiry check,
/// append, and counter increment all happen under one exclusive entry guard.
/// Reads clone the entry under a shared guard, so snapshots are always
/// consistent. No guard is held across an await point.
///
/// State is process-local and lost on restart. Expired records are kept; no
/// background eviction runs.
pub struct MemoryTokenRepository {
    entries: DashMap<String, TokenEntry>,
}

impl MemoryTokenRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Removes every token and click record.
    ///
    /// Test-isolation hook. Deliberately absent from [`TokenRepository`] so
    /// no production path can reach it; tests call it through the concrete
    /// store handle.
    pub fn clear_all(&self) {
        self.entries.clear();
    }
}

impl Default for MemoryTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MemoryTokenRepository {
    async fn insert(&self, record: TokenRecord) -> Result<(), AppError> {
        self.entries.insert(
            record.token.clone(),
            TokenEntry {
                record,
                clicks: Vec::new(),
            },
        );
        Ok(())
    }

    async fn record_click(
        &self,
        token: &str,
        ip_address: &str,
        user_agent: &str,
    ) -> Result<TrackOutcome, AppError> {
        let Some(mut entry) = self.entries.get_mut(token) else {
            return Ok(TrackOutcome::UnknownToken);
        };

        if entry.record.is_expired() {
            return Ok(TrackOutcome::Expired);
        }

        // Timestamp assigned under the entry guard keeps the history
        // time-ordered by insertion.
        let click = ClickRecord::new(
            ip_address.to_string(),
            user_agent.to_string(),
            Utc::now(),
            click_hash(token, ip_address),
        );
        let timestamp = click.timestamp;

        entry.clicks.push(click);
        entry.record.click_count += 1;

        Ok(TrackOutcome::Recorded(ClickReceipt {
            target_url: entry.record.target_url.clone(),
            timestamp,
            click_count: entry.record.click_count,
        }))
    }

    async fn find(&self, token: &str) -> Result<Option<TokenInfo>, AppError> {
        Ok(self.entries.get(token).map(|entry| TokenInfo {
            record: entry.record.clone(),
            clicks: entry.clicks.clone(),
        }))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.entries.len())
    }
}
