//! Google Sheets-backed log implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::service::{SheetLog, SheetLogError, SheetLogResult};
use crate::domain::log_event::LogEvent;

const TOKENS_SHEET: &str = "Tokens";
const CLICKS_SHEET: &str = "Clicks";

const TOKENS_RANGE: &str = "Tokens!A:F";
const CLICKS_RANGE: &str = "Clicks!A:E";

const TOKENS_HEADERS: [&str; 6] = [
    "Timestamp",
    "Token",
    "Target URL",
    "Email",
    "Campaign",
    "Status",
];
const CLICKS_HEADERS: [&str; 5] = ["Timestamp", "Token", "IP Address", "User Agent", "Click Count"];

/// User agent characters kept in click rows. Longer values are truncated
/// for sheet readability.
const LOGGED_USER_AGENT_CHARS: usize = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Google Sheets v4 REST client for the spreadsheet audit log.
///
/// Token issues land in the `Tokens` sheet and clicks in the `Clicks`
/// sheet, one row per event via the `values:append` endpoint. Unlike the
/// fail-open in-process store, append errors propagate to the caller so the
/// log worker can retry.
pub struct SheetsApiLog {
    http: Client,
    endpoint: String,
    spreadsheet_id: String,
    api_token: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

impl SheetsApiLog {
    /// Connects to the spreadsheet, validates access by fetching its
    /// metadata, and creates the `Tokens` and `Clicks` sheets with their
    /// header rows when missing.
    ///
    /// # Arguments
    ///
    /// - `endpoint` - API base URL (e.g., `"https://sheets.googleapis.com"`);
    ///   controlled via `SHEETS_API_ENDPOINT` env var
    /// - `spreadsheet_id` - target spreadsheet identifier
    /// - `api_token` - OAuth bearer token with spreadsheet scope
    ///
    /// # Errors
    ///
    /// Returns [`SheetLogError`] if the HTTP client cannot be built, the
    /// spreadsheet is unreachable, or sheet bootstrap fails.
    pub async fn connect(
        endpoint: &str,
        spreadsheet_id: &str,
        api_token: &str,
    ) -> SheetLogResult<Self> {
        info!("Connecting to Google Sheets spreadsheet {}", spreadsheet_id);

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let log = Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            api_token: api_token.to_string(),
        };

        let existing = log.fetch_sheet_titles().await?;
        log.ensure_sheet(&existing, TOKENS_SHEET, &TOKENS_HEADERS)
            .await?;
        log.ensure_sheet(&existing, CLICKS_SHEET, &CLICKS_HEADERS)
            .await?;

        info!("✓ Connected to Google Sheets");

        Ok(log)
    }

    /// Constructs a spreadsheet API URL from a path suffix.
    fn spreadsheet_url(&self, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}{}",
            self.endpoint, self.spreadsheet_id, suffix
        )
    }

    async fn fetch_sheet_titles(&self) -> SheetLogResult<Vec<String>> {
        let url = self.spreadsheet_url("?fields=sheets.properties.title");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        let meta: SpreadsheetMeta = Self::check_status(response).await?.json().await?;

        Ok(meta
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }

    /// Creates `title` with its header row unless the spreadsheet already
    /// has a sheet by that name.
    async fn ensure_sheet(
        &self,
        existing: &[String],
        title: &str,
        headers: &[&str],
    ) -> SheetLogResult<()> {
        if existing.iter().any(|name| name == title) {
            return Ok(());
        }

        let url = self.spreadsheet_url(":batchUpdate");
        let body = json!({
            "requests": [{ "addSheet": { "properties": { "title": title } } }]
        });
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;

        let url = self.spreadsheet_url(&format!("/values/{}!A1:Z1?valueInputOption=RAW", title));
        let body = json!({ "values": [headers] });
        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;

        info!("Created sheet: {}", title);

        Ok(())
    }

    async fn append_row(&self, range: &str, row: Vec<Value>) -> SheetLogResult<()> {
        let url = self.spreadsheet_url(&format!("/values/{}:append?valueInputOption=RAW", range));
        let body = json!({ "values": [row] });
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;

        Ok(())
    }

    async fn check_status(response: reqwest::Response) -> SheetLogResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(SheetLogError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

/// Builds the append range and row values for an event.
///
/// Token rows log a missing email as `N/A`; click rows keep at most the
/// first 100 characters of the user agent.
fn event_row(event: &LogEvent) -> (&'static str, Vec<Value>) {
    match event {
        LogEvent::TokenCreated {
            token,
            target_url,
            email,
            campaign,
            created_at,
        } => (
            TOKENS_RANGE,
            vec![
                json!(created_at.to_rfc3339_opts(SecondsFormat::Micros, true)),
                json!(token),
                json!(target_url),
                json!(email.as_deref().unwrap_or("N/A")),
                json!(campaign),
                json!("Active"),
            ],
        ),
        // The click row has no URL column; the token links it back to the
        // target recorded on the Tokens sheet.
        LogEvent::ClickTracked {
            token,
            ip_address,
            user_agent,
            timestamp,
            click_count,
            ..
        } => (
            CLICKS_RANGE,
            vec![
                json!(timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)),
                json!(token),
                json!(ip_address),
                json!(
                    user_agent
                        .chars()
                        .take(LOGGED_USER_AGENT_CHARS)
                        .collect::<String>()
                ),
                json!(click_count),
            ],
        ),
    }
}

#[async_trait]
impl SheetLog for SheetsApiLog {
    async fn append(&self, event: &LogEvent) -> SheetLogResult<()> {
        let (range, row) = event_row(event);
        self.append_row(range, row).await?;

        debug!("Appended log row for token {} to {}", event.token(), range);

        Ok(())
    }

    async fn check_connection(&self) -> bool {
        self.fetch_sheet_titles().await.is_ok()
    }
}
