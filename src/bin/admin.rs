//! CLI administration tool for link-tracker.
//!
//! Drives the HTTP API of a running service instance: issues tracking
//! tokens, fetches click statistics, and checks service health. The token
//! store lives in the server process, so every command talks to the API
//! rather than to storage directly.
//!
//! # Usage
//!
//! ```bash
//! # Issue a tracking token (interactive)
//! cargo run --bin admin -- generate
//!
//! # Issue a token non-interactively
//! cargo run --bin admin -- generate --url https://example.com/landing -y
//!
//! # Show click statistics for a token
//! cargo run --bin admin -- stats "token-value"
//!
//! # Check service health
//! cargo run --bin admin -- health
//! ```
//!
//! # Environment Variables
//!
//! - `TRACKER_BASE_URL` (optional): service base URL (default: `http://localhost:3000`)
//!
//! # Features
//!
//! - **Token Issue**: Generate tracking tokens with optional email/campaign
//! - **Statistics**: Per-token click totals, date and user agent breakdowns
//! - **Health Checks**: Component status of a running instance
//! - **Interactive Prompts**: User-friendly CLI with confirmation dialogs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

/// CLI tool for managing link-tracker.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Issue a new tracking token
    Generate {
        /// Target URL the tracking link redirects to
        #[arg(short, long)]
        url: Option<String>,

        /// Recipient email recorded with the token
        #[arg(short, long)]
        email: Option<String>,

        /// Campaign label (defaults to "default" server-side)
        #[arg(short, long)]
        campaign: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show click statistics for a token
    Stats {
        /// Token value to inspect
        token: String,
    },

    /// Check service health
    Health,
}

#[derive(Deserialize)]
struct TokenCreated {
    token: String,
    tracker_url: String,
    target_url: String,
    campaign: String,
}

#[derive(Deserialize)]
struct TokenStats {
    token: String,
    total_clicks: u64,
    unique_ips: u64,
    clicks_by_date: BTreeMap<String, u64>,
    clicks_by_user_agent: HashMap<String, u64>,
    first_click: Option<String>,
    last_click: Option<String>,
}

#[derive(Deserialize)]
struct HealthBody {
    status: String,
    version: String,
    checks: HealthChecks,
}

#[derive(Deserialize)]
struct HealthChecks {
    store: ComponentCheck,
    log_queue: ComponentCheck,
    sheet_log: ComponentCheck,
}

#[derive(Deserialize)]
struct ComponentCheck {
    status: String,
    message: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorInfo,
}

#[derive(Deserialize)]
struct ApiErrorInfo {
    code: String,
    message: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let base_url = std::env::var("TRACKER_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let base_url = base_url.trim_end_matches('/').to_string();

    let client = Client::new();

    match cli.command {
        Commands::Generate {
            url,
            email,
            campaign,
            yes,
        } => generate_token(&client, &base_url, url, email, campaign, yes).await?,
        Commands::Stats { token } => show_stats(&client, &base_url, &token).await?,
        Commands::Health => check_health(&client, &base_url).await?,
    }

    Ok(())
}

/// Issues a tracking token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for target URL (or use provided)
/// 2. Display token details
/// 3. Confirm creation (unless `--yes` flag)
/// 4. POST to `/generate-token`
/// 5. Display the token and its tracker URL
async fn generate_token(
    client: &Client,
    base_url: &str,
    url: Option<String>,
    email: Option<String>,
    campaign: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Issue Tracking Token".bright_blue().bold());
    println!();

    // Get target URL
    let target_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Target URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    // Show request details
    println!("{}", "Token details:".bright_white().bold());
    println!("  Target URL: {}", target_url.cyan());
    println!(
        "  Email:      {}",
        email.as_deref().unwrap_or("N/A").cyan()
    );
    println!(
        "  Campaign:   {}",
        campaign.as_deref().unwrap_or("default").cyan()
    );
    println!();

    // Confirm
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Issue this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let response = client
        .post(format!("{}/generate-token", base_url))
        .json(&json!({
            "target_url": target_url,
            "email": email,
            "campaign": campaign,
        }))
        .send()
        .await
        .context("Failed to reach the service")?;

    if response.status() != StatusCode::CREATED {
        let err: ApiErrorBody = response
            .json()
            .await
            .context("Failed to parse error response")?;
        anyhow::bail!("{} ({})", err.error.message, err.error.code);
    }

    let created: TokenCreated = response
        .json()
        .await
        .context("Failed to parse token response")?;

    println!();
    println!("{}", "✅ Token issued successfully!".green().bold());
    println!();
    println!("  Token:       {}", created.token.bright_yellow().bold());
    println!("  Tracker URL: {}", created.tracker_url.bright_cyan());
    println!("  Target URL:  {}", created.target_url.cyan());
    println!("  Campaign:    {}", created.campaign.cyan());
    println!();
    println!("{}", "Embed the tracker URL in your emails:".bright_white());
    println!("  curl -L {}", created.tracker_url.bright_cyan());
    println!();

    Ok(())
}

/// Fetches and displays click statistics for a token.
///
/// # Output Format
///
/// ```text
/// 📊 Click Statistics
///
///   Token:        abc...
///   Total clicks: 42
///   Unique IPs:   17
///
///   By date:
///     2026-08-21  12
///     2026-08-22  30
/// ```
async fn show_stats(client: &Client, base_url: &str, token: &str) -> Result<()> {
    println!("{}", "📊 Click Statistics".bright_blue().bold());
    println!();

    let response = client
        .get(format!("{}/stats/{}", base_url, token))
        .send()
        .await
        .context("Failed to reach the service")?;

    if response.status() == StatusCode::NOT_FOUND {
        println!("{}", "  Token not found".yellow());
        return Ok(());
    }

    if !response.status().is_success() {
        let err: ApiErrorBody = response
            .json()
            .await
            .context("Failed to parse error response")?;
        anyhow::bail!("{} ({})", err.error.message, err.error.code);
    }

    let stats: TokenStats = response
        .json()
        .await
        .context("Failed to parse stats response")?;

    println!("  Token:        {}", stats.token.cyan());
    println!(
        "  Total clicks: {}",
        stats.total_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Unique IPs:   {}",
        stats.unique_ips.to_string().bright_green().bold()
    );
    println!(
        "  First click:  {}",
        stats.first_click.as_deref().unwrap_or("-").bright_black()
    );
    println!(
        "  Last click:   {}",
        stats.last_click.as_deref().unwrap_or("-").bright_black()
    );

    if !stats.clicks_by_date.is_empty() {
        println!();
        println!("  {}", "By date:".bright_white().bold());
        for (date, count) in &stats.clicks_by_date {
            println!("    {}  {}", date.bright_black(), count);
        }
    }

    if !stats.clicks_by_user_agent.is_empty() {
        println!();
        println!("  {}", "By user agent:".bright_white().bold());

        let mut agents: Vec<_> = stats.clicks_by_user_agent.iter().collect();
        agents.sort_by(|a, b| b.1.cmp(a.1));

        for (agent, count) in agents {
            println!("    {:<50}  {}", agent.bright_black(), count);
        }
    }

    println!();

    Ok(())
}

/// Checks service health and prints component statuses.
async fn check_health(client: &Client, base_url: &str) -> Result<()> {
    println!("{}", "🔍 Checking service health...".bright_blue());
    println!();

    let response = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .context("Failed to reach the service")?;

    // 503 still carries a health body with per-component details
    let health: HealthBody = response
        .json()
        .await
        .context("Failed to parse health response")?;

    let status = if health.status == "healthy" {
        health.status.green().bold()
    } else {
        health.status.red().bold()
    };

    println!("  Status:  {}", status);
    println!("  Version: {}", health.version.bright_black());
    println!();
    print_check("Store", &health.checks.store);
    print_check("Log queue", &health.checks.log_queue);
    print_check("Sheet log", &health.checks.sheet_log);
    println!();

    Ok(())
}

/// Prints one component check line.
fn print_check(name: &str, check: &ComponentCheck) {
    let icon = if check.status == "ok" { "✅" } else { "❌" };

    println!(
        "  {} {:<10} {}",
        icon,
        name,
        check.message.as_deref().unwrap_or("").bright_black()
    );
}
