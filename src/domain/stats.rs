//! Click statistics aggregation.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::ClickRecord;

/// Number of user-agent characters kept when grouping.
const USER_AGENT_GROUP_CHARS: usize = 50;

/// Aggregated statistics over a token's click history.
///
/// Computed from a consistent snapshot of the click sequence, so totals,
/// groupings, and first/last timestamps always describe the same set of
/// clicks.
#[derive(Debug, Clone)]
pub struct ClickStats {
    pub total_clicks: u64,
    pub unique_ips: u64,
    /// Clicks per UTC calendar date.
    pub clicks_by_date: BTreeMap<NaiveDate, u64>,
    /// Clicks per user agent, grouped by the first 50 characters.
    /// Longer variants of the same agent string merge into one bucket.
    pub clicks_by_user_agent: HashMap<String, u64>,
    pub first_click: Option<DateTime<Utc>>,
    pub last_click: Option<DateTime<Utc>>,
}

impl ClickStats {
    /// Aggregates a snapshot of click records.
    ///
    /// The snapshot is read in insertion order: `first_click` and
    /// `last_click` come from the ends of the sequence, not from sorting by
    /// timestamp.
    pub fn compute(clicks: &[ClickRecord]) -> Self {
        let mut unique_ips = HashSet::new();
        let mut clicks_by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        let mut clicks_by_user_agent: HashMap<String, u64> = HashMap::new();

        for click in clicks {
            unique_ips.insert(click.ip_address.as_str());

            *clicks_by_date
                .entry(click.timestamp.date_naive())
                .or_insert(0) += 1;

            let agent = truncate_chars(&click.user_agent, USER_AGENT_GROUP_CHARS);
            *clicks_by_user_agent.entry(agent).or_insert(0) += 1;
        }

        Self {
            total_clicks: clicks.len() as u64,
            unique_ips: unique_ips.len() as u64,
            clicks_by_date,
            clicks_by_user_agent,
            first_click: clicks.first().map(|c| c.timestamp),
            last_click: clicks.last().map(|c| c.timestamp),
        }
    }
}

/// Truncates to at most `max_chars` characters, never splitting a character.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
