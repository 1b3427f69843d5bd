//! DTOs for token statistics endpoint.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::stats::ClickStats;

/// Aggregated click statistics for a tracking token.
///
/// Date keys are UTC days; serializing from a `BTreeMap` keeps them in
/// chronological order. `first_click` and `last_click` are `null` until the
/// first click arrives.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub token: String,
    pub total_clicks: u64,
    pub unique_ips: u64,
    pub clicks_by_date: BTreeMap<NaiveDate, u64>,
    pub clicks_by_user_agent: HashMap<String, u64>,
    pub first_click: Option<DateTime<Utc>>,
    pub last_click: Option<DateTime<Utc>>,
}

impl StatsResponse {
    /// Builds the response from computed statistics.
    pub fn from_stats(token: String, stats: ClickStats) -> Self {
        Self {
            token,
            total_clicks: stats.total_clicks,
            unique_ips: stats.unique_ips,
            clicks_by_date: stats.clicks_by_date,
            clicks_by_user_agent: stats.clicks_by_user_agent,
            first_click: stats.first_click,
            last_click: stats.last_click,
        }
    }
}
