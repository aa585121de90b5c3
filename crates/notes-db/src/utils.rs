//! Shared utility functions

use chrono::{DateTime, Utc};

/// Parse a datetime string (RFC3339 format) or return current time
///
/// Rows are written with `to_rfc3339`, so the fallback only triggers on
/// hand-edited data.
pub fn parse_datetime_or_now(s: &str) -> DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Generate a fresh record identifier
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
