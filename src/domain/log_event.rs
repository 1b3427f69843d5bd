//! Log event model for asynchronous spreadsheet logging.

use chrono::{DateTime, Utc};

use crate::domain::entities::{ClickReceipt, TokenRecord};

/// An in-memory representation of an event bound for the external sheet log.
///
/// Used to pass token and click information from HTTP handlers to the
/// background worker via a channel. This decouples the HTTP response from
/// external API calls, allowing fast redirects without blocking.
///
/// # Design
///
/// - Carries denormalized data so the worker never reads the store
/// - Cloneable for sending across async boundaries
///
/// # Usage Flow
///
/// 1. Created in a handler after the core operation succeeds
/// 2. Sent to the channel (non-blocking `try_send`; a full queue drops the event)
/// 3. Processed by [`crate::domain::log_worker::run_log_worker`]
/// 4. Appended as a spreadsheet row by the configured sink
#[derive(Debug, Clone)]
pub enum LogEvent {
    /// A tracking token was issued.
    TokenCreated {
        token: String,
        target_url: String,
        email: Option<String>,
        campaign: String,
        created_at: DateTime<Utc>,
    },
    /// A click was recorded and the visitor redirected.
    ClickTracked {
        token: String,
        ip_address: String,
        user_agent: String,
        timestamp: DateTime<Utc>,
        target_url: String,
        click_count: u64,
    },
}

impl LogEvent {
    /// Builds a creation event from a freshly issued record.
    pub fn token_created(record: &TokenRecord) -> Self {
        Self::TokenCreated {
            token: record.token.clone(),
            target_url: record.target_url.clone(),
            email: record.email.clone(),
            campaign: record.campaign.clone(),
            created_at: record.created_at,
        }
    }

    /// Builds a click event from the receipt of a recorded click.
    pub fn click_tracked(
        token: &str,
        ip_address: &str,
        user_agent: &str,
        receipt: &ClickReceipt,
    ) -> Self {
        Self::ClickTracked {
            token: token.to_string(),
            ip_address: ip_address.to_string(),
            user_agent: user_agent.to_string(),
            timestamp: receipt.timestamp,
            target_url: receipt.target_url.clone(),
            click_count: receipt.click_count,
        }
    }

    /// The token the event belongs to.
    pub fn token(&self) -> &str {
        match self {
            Self::TokenCreated { token, .. } | Self::ClickTracked { token, .. } => token,
        }
    }
}
