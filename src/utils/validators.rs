//! Email and URL shape validation.
//!
//! Pure predicates over compiled regexes. These perform shape checks only:
//! no DNS lookups, no reachability probes, no failure modes. The tracking
//! core itself accepts any string; callers that want validated input invoke
//! these at the boundary.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for email validation.
///
/// Requires a non-empty local part, an `@`, a domain, and a TLD of at least
/// two letters.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Compiled regex for URL validation.
///
/// Accepts `http`/`https` schemes (case-insensitive) followed by a
/// non-whitespace body.
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[^\s/$.?#].[^\s]*$").unwrap());

/// Returns true if the string looks like a valid email address.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true if the string looks like a valid HTTP or HTTPS URL.
pub fn validate_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}
