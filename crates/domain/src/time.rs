//! Time and timestamp helpers.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as fixed-width RFC 3339 with nanosecond precision and a
/// `Z` suffix, so that lexical order matches chronological order.
#[must_use]
pub fn to_fixed_rfc3339(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse any RFC 3339 timestamp back into UTC.
///
/// # Errors
///
/// Returns [`chrono::ParseError`] when `text` is not RFC 3339.
pub fn parse_rfc3339(text: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(text).map(|ts| ts.to_utc())
}
