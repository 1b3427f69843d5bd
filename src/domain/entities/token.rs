//! Token entity representing a tracked link.

use chrono::{DateTime, Duration, Utc};

use super::click::ClickRecord;

/// Campaign label applied when none is supplied at creation.
pub const DEFAULT_CAMPAIGN: &str = "default";

/// A tracking token bound to a destination URL.
///
/// The token string itself is the identity; there is no surrogate id. Expired
/// records stay queryable for metadata and statistics, they only stop
/// accepting new clicks. Records are never purged.
#[derive(Debug, Clone)]
pub struct TokenRecord {
    pub token: String,
    pub target_url: String,
    pub email: Option<String>,
    pub campaign: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
}

impl TokenRecord {
    /// Issues a fresh record with a zero click count.
    ///
    /// `expires_at` is fixed at creation as `created_at + ttl_days`; a missing
    /// campaign falls back to [`DEFAULT_CAMPAIGN`]. No validation is performed
    /// on `target_url` or `email` here; callers wanting validated input run
    /// the shape checks in [`crate::utils::validators`] first.
    pub fn issue(
        token: String,
        target_url: String,
        email: Option<String>,
        campaign: Option<String>,
        ttl_days: i64,
    ) -> Self {
        let created_at = Utc::now();

        Self {
            token,
            target_url,
            email,
            campaign: campaign.unwrap_or_else(|| DEFAULT_CAMPAIGN.to_string()),
            created_at,
            expires_at: created_at + Duration::days(ttl_days),
            click_count: 0,
        }
    }

    /// Returns true if the record has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Token metadata together with its full click history.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub record: TokenRecord,
    pub clicks: Vec<ClickRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_sets_expiry_from_ttl() {
        let record = TokenRecord::issue(
            "tok123".to_string(),
            "https://example.com".to_string(),
            None,
            None,
            90,
        );

        assert_eq!(record.expires_at - record.created_at, Duration::days(90));
        assert_eq!(record.click_count, 0);
        assert!(!record.is_expired());
    }

    #[test]
    fn test_issue_defaults_campaign() {
        let record = TokenRecord::issue(
            "tok123".to_string(),
            "https://example.com".to_string(),
            None,
            None,
            90,
        );

        assert_eq!(record.campaign, DEFAULT_CAMPAIGN);
    }

    #[test]
    fn test_issue_keeps_supplied_campaign_and_email() {
        let record = TokenRecord::issue(
            "tok123".to_string(),
            "https://example.com".to_string(),
            Some("user@example.com".to_string()),
            Some("spring-launch".to_string()),
            30,
        );

        assert_eq!(record.campaign, "spring-launch");
        assert_eq!(record.email, Some("user@example.com".to_string()));
    }

    #[test]
    fn test_is_expired_past_expiry() {
        let mut record = TokenRecord::issue(
            "tok123".to_string(),
            "https://example.com".to_string(),
            None,
            None,
            90,
        );
        record.expires_at = Utc::now() - Duration::seconds(1);

        assert!(record.is_expired());
    }

    #[test]
    fn test_expired_record_keeps_metadata() {
        let mut record = TokenRecord::issue(
            "tok123".to_string(),
            "https://example.com".to_string(),
            Some("user@example.com".to_string()),
            None,
            90,
        );
        record.expires_at = Utc::now() - Duration::days(1);

        assert!(record.is_expired());
        assert_eq!(record.target_url, "https://example.com");
        assert_eq!(record.email, Some("user@example.com".to_string()));
    }
}
