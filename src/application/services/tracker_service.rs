//! Token issue and click tracking service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{TokenInfo, TokenRecord, TrackOutcome};
use crate::domain::repositories::TokenRepository;
use crate::domain::stats::ClickStats;
use crate::error::AppError;
use crate::utils::token_generator::generate_token;

/// Service for issuing tracking tokens and recording clicks.
///
/// Token generation is a blind insert: with 32 random bytes per token the
/// collision probability is negligible, so no uniqueness probe runs before
/// the write.
pub struct TrackerService<R: TokenRepository> {
    repository: Arc<R>,
    token_bytes: usize,
    token_ttl_days: i64,
}

impl<R: TokenRepository> TrackerService<R> {
    /// Creates a new tracker service.
    ///
    /// # Arguments
    ///
    /// - `token_bytes` - random bytes per token before base64 encoding
    /// - `token_ttl_days` - days until an issued token stops accepting clicks
    pub fn new(repository: Arc<R>, token_bytes: usize, token_ttl_days: i64) -> Self {
        Self {
            repository,
            token_bytes,
            token_ttl_days,
        }
    }

    /// Issues a new tracking token bound to `target_url`.
    ///
    /// The record is stored immediately and its expiry countdown starts at
    /// issue time. A missing campaign falls back to `"default"`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store rejects the write.
    pub async fn generate_token(
        &self,
        target_url: String,
        email: Option<String>,
        campaign: Option<String>,
    ) -> Result<TokenRecord, AppError> {
        let token = generate_token(self.token_bytes);
        let record = TokenRecord::issue(token, target_url, email, campaign, self.token_ttl_days);

        self.repository.insert(record.clone()).await?;

        info!(
            "Issued token {} for {} (campaign: {})",
            record.token, record.target_url, record.campaign
        );

        Ok(record)
    }

    /// Records a click against `token` and reports the outcome.
    ///
    /// Unknown and expired tokens come back through [`TrackOutcome`] rather
    /// than as errors, so the handler decides the status code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn track_click(
        &self,
        token: &str,
        ip_address: &str,
        user_agent: &str,
    ) -> Result<TrackOutcome, AppError> {
        let outcome = self
            .repository
            .record_click(token, ip_address, user_agent)
            .await?;

        match &outcome {
            TrackOutcome::Recorded(receipt) => {
                metrics::counter!("clicks_tracked_total").increment(1);
                info!(
                    "Tracked click {} on token {} from {}",
                    receipt.click_count, token, ip_address
                );
            }
            TrackOutcome::UnknownToken => {
                warn!("Click on unknown token {}", token);
            }
            TrackOutcome::Expired => {
                warn!("Click on expired token {}", token);
            }
        }

        Ok(outcome)
    }

    /// Computes aggregate click statistics for `token`.
    ///
    /// Expired tokens still report their accumulated history. Returns
    /// `None` when the token does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn get_click_stats(&self, token: &str) -> Result<Option<ClickStats>, AppError> {
        let Some(info) = self.repository.find(token).await? else {
            return Ok(None);
        };

        Ok(Some(ClickStats::compute(&info.clicks)))
    }

    /// Retrieves the full record and click history for `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn get_token_info(&self, token: &str) -> Result<Option<TokenInfo>, AppError> {
        self.repository.find(token).await
    }

    /// Counts tokens currently held by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn token_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
