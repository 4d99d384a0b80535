//! Timestamp and run-id helpers for snapshot envelopes.

use chrono::{SecondsFormat, Utc};
use std::time::{SystemTime, UNIX_EPOCH};
use ulid::Ulid;

/// Returns unix-epoch milliseconds.
pub fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Returns the current UTC time as an ISO-8601 string (e.g. `2026-08-26T14:03:07Z`).
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn new_run_id() -> String {
    Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso8601_format() {
        let ts = now_iso8601();
        assert!(ts.ends_with('Z'));
        assert!(ts.contains('T'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_new_run_id_is_unique() {
        assert_ne!(new_run_id(), new_run_id());
    }

    #[test]
    fn test_now_epoch_ms_is_nonzero() {
        assert!(now_epoch_ms() > 0);
    }
}
