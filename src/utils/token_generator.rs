//! Tracking token generation.
//!
//! Provides cryptographically secure random token generation for tracking links.

use base64::Engine as _;

/// Default length of random bytes before base64 encoding.
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Generates a cryptographically secure random tracking token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding. The default of 32 raw bytes yields a 43-character token.
///
/// Collision resistance comes from the size of the random space; callers do
/// not probe the store for uniqueness.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let token = generate_token(DEFAULT_TOKEN_BYTES);
/// assert_eq!(token.len(), 43);
/// assert!(token.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_token(byte_length: usize) -> String {
    let mut buffer = vec![0u8; byte_length];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_token_not_empty() {
        let token = generate_token(DEFAULT_TOKEN_BYTES);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_generate_token_has_correct_length() {
        // 32 raw bytes -> ceil(32 * 4 / 3) = 43 base64 characters
        let token = generate_token(DEFAULT_TOKEN_BYTES);
        assert_eq!(token.len(), 43);
    }

    #[test]
    fn test_generate_token_custom_length() {
        let token = generate_token(16);
        assert_eq!(token.len(), 22);
    }

    #[test]
    fn test_generate_token_url_safe_characters() {
        let token = generate_token(DEFAULT_TOKEN_BYTES);
        assert!(
            token
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_token_no_padding() {
        let token = generate_token(DEFAULT_TOKEN_BYTES);
        assert!(!token.contains('='));
    }

    #[test]
    fn test_generate_token_produces_unique_tokens() {
        let mut tokens = HashSet::new();

        for _ in 0..1000 {
            let token = generate_token(DEFAULT_TOKEN_BYTES);
            tokens.insert(token);
        }

        assert_eq!(tokens.len(), 1000);
    }
}
