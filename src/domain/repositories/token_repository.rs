//! Repository trait for tracking token storage.

use crate::domain::entities::{TokenInfo, TokenRecord, TrackOutcome};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for tracking tokens and their click histories.
///
/// A token record owns its click sequence; implementations must keep the
/// append and the counter increment of [`Self::record_click`] atomic per
/// token, and reads must return a consistent snapshot that never observes a
/// partially appended history.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::MemoryTokenRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Stores a freshly issued record with an empty click history.
    ///
    /// No uniqueness probe is made; collision resistance of the random token
    /// source is relied upon instead.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, record: TokenRecord) -> Result<(), AppError>;

    /// Records a click against a token.
    ///
    /// On success the stored click carries a timestamp assigned at insertion
    /// time and a fresh fingerprint of `(token, ip_address)`. Unknown and
    /// expired tokens are reported as [`TrackOutcome`] values and leave the
    /// store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record_click(
        &self,
        token: &str,
        ip_address: &str,
        user_agent: &str,
    ) -> Result<TrackOutcome, AppError>;

    /// Returns a token's metadata and full click history.
    ///
    /// Works for expired tokens; expiry only gates [`Self::record_click`].
    ///
    /// # Returns
    ///
    /// - `Ok(Some(TokenInfo))` if the token exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find(&self, token: &str) -> Result<Option<TokenInfo>, AppError>;

    /// Counts stored token records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<usize, AppError>;
}
