//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export TRACKER_BASE_URL="https://track.example.com"
//! export GOOGLE_SHEETS_ID="1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms"
//! export SHEETS_API_TOKEN="ya29.a0ARrdaM..."
//! ```
//!
//! ## Required Variables
//!
//! None. `SHEETS_API_TOKEN` becomes required once `GOOGLE_SHEETS_ID` is set.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `TRACKER_BASE_URL` - Public base URL used in issued tracker links
//!   (default: `http://localhost:3000`)
//! - `TOKEN_EXPIRY_DAYS` - Days until issued tokens stop accepting clicks
//!   (default: 90, min: 1)
//! - `TOKEN_LENGTH` - Random bytes per token before base64 encoding
//!   (default: 32, range: 8-64)
//! - `LOG_QUEUE_CAPACITY` - Log event buffer size (default: 10000, min: 100)
//! - `GOOGLE_SHEETS_ID` - Spreadsheet id (enables sheet logging if set)
//! - `SHEETS_API_TOKEN` - OAuth bearer token for the Sheets API
//! - `SHEETS_API_ENDPOINT` - Sheets API base URL
//!   (default: `https://sheets.googleapis.com`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL prepended to `/track/{token}` in issued tracker links.
    pub base_url: String,
    /// Days until an issued token stops accepting clicks.
    pub token_expiry_days: i64,
    /// Random bytes per token before base64 encoding.
    pub token_length: usize,
    pub log_queue_capacity: usize,
    /// Target spreadsheet. Sheet logging is disabled when unset.
    pub google_sheets_id: Option<String>,
    /// OAuth bearer token for the Sheets API. Required when
    /// `google_sheets_id` is set.
    pub sheets_api_token: Option<String>,
    pub sheets_api_endpoint: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values silently fall back to their defaults;
    /// range checks happen in [`Self::validate`].
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("TRACKER_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        let token_expiry_days = env::var("TOKEN_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(90);

        let token_length = env::var("TOKEN_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(32);

        let log_queue_capacity = env::var("LOG_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let google_sheets_id = env::var("GOOGLE_SHEETS_ID").ok().filter(|v| !v.is_empty());
        let sheets_api_token = env::var("SHEETS_API_TOKEN").ok().filter(|v| !v.is_empty());
        let sheets_api_endpoint = env::var("SHEETS_API_ENDPOINT")
            .unwrap_or_else(|_| "https://sheets.googleapis.com".to_string());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            base_url,
            token_expiry_days,
            token_length,
            log_queue_capacity,
            google_sheets_id,
            sheets_api_token,
            sheets_api_endpoint,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `token_expiry_days` is less than 1
    /// - `token_length` is outside 8-64
    /// - `log_queue_capacity` is outside 100-1000000
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` or `base_url` is malformed
    /// - `google_sheets_id` is set without `sheets_api_token`
    pub fn validate(&self) -> Result<()> {
        // Validate token expiry
        if self.token_expiry_days < 1 {
            anyhow::bail!(
                "TOKEN_EXPIRY_DAYS must be at least 1, got {}",
                self.token_expiry_days
            );
        }

        // Validate token length
        if self.token_length < 8 || self.token_length > 64 {
            anyhow::bail!(
                "TOKEN_LENGTH must be between 8 and 64, got {}",
                self.token_length
            );
        }

        // Validate queue capacity
        if self.log_queue_capacity < 100 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY must be at least 100, got {}",
                self.log_queue_capacity
            );
        }

        if self.log_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.log_queue_capacity
            );
        }

        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate base URL format
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "TRACKER_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        // Validate sheets configuration (if present)
        if self.google_sheets_id.is_some() && self.sheets_api_token.is_none() {
            anyhow::bail!("SHEETS_API_TOKEN must be set when GOOGLE_SHEETS_ID is provided");
        }

        if !self.sheets_api_endpoint.starts_with("http://")
            && !self.sheets_api_endpoint.starts_with("https://")
        {
            anyhow::bail!(
                "SHEETS_API_ENDPOINT must start with 'http://' or 'https://', got '{}'",
                self.sheets_api_endpoint
            );
        }

        Ok(())
    }

    /// Returns whether spreadsheet logging is enabled.
    pub fn is_sheet_logging_enabled(&self) -> bool {
        self.google_sheets_id.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Token expiry: {} days", self.token_expiry_days);
        tracing::info!("  Token length: {} bytes", self.token_length);

        if let Some(ref sheets_id) = self.google_sheets_id {
            let token = self.sheets_api_token.as_deref().unwrap_or("");
            tracing::info!(
                "  Sheets: {} (token: {}, enabled)",
                sheets_id,
                mask_secret(token)
            );
        } else {
            tracing::info!("  Sheets: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Log queue capacity: {}", self.log_queue_capacity);
    }
}

/// Masks sensitive values for logging.
///
/// Keeps the first four characters of longer secrets so operators can tell
/// credentials apart:
/// - `ya29.a0ARrdaM...` → `ya29***`
/// - anything of eight characters or fewer → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
