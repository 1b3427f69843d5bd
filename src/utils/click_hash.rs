//! Click fingerprinting.

use sha2::{Digest, Sha256};

/// Computes the deduplication fingerprint for a click.
///
/// The fingerprint is the SHA-256 hex digest of `"{token}:{ip_address}"`.
/// It is stored with every click record so repeat visits can be correlated
/// later; it is never used to reject a click.
pub fn click_hash(token: &str, ip_address: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.update(b":");
    hasher.update(ip_address.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_hash_is_deterministic() {
        let a = click_hash("token123", "192.168.1.1");
        let b = click_hash("token123", "192.168.1.1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_click_hash_is_hex_sha256() {
        let hash = click_hash("token123", "192.168.1.1");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_click_hash_varies_by_ip() {
        let a = click_hash("token123", "192.168.1.1");
        let b = click_hash("token123", "192.168.1.2");
        assert_ne!(a, b);
    }

    #[test]
    fn test_click_hash_varies_by_token() {
        let a = click_hash("token123", "192.168.1.1");
        let b = click_hash("token456", "192.168.1.1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_click_hash_matches_joined_input() {
        // Hashing the pre-joined string must give the same digest as the
        // incremental update path.
        let mut hasher = Sha256::new();
        hasher.update("abc:10.0.0.1".as_bytes());
        let expected = hex::encode(hasher.finalize());

        assert_eq!(click_hash("abc", "10.0.0.1"), expected);
    }
}
