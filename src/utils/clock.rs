//! Wall-clock helpers.

use chrono::{SecondsFormat, Utc};

/// Returns the current UTC time as an RFC 3339 string.
///
/// Used where a serialized timestamp is needed directly, such as the health
/// endpoint's liveness value.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_current_timestamp_is_rfc3339() {
        let ts = current_timestamp();
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_current_timestamp_is_utc() {
        let ts = current_timestamp();
        assert!(ts.ends_with('Z'));
    }
}
