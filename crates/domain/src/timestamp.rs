//! Storage representation of timestamps.
//!
//! Rows keep UTC timestamps as `YYYY-MM-DD HH:MM:SS` text, the same shape
//! SQLite's `CURRENT_TIMESTAMP` produces. Because the format is fixed-width
//! and most-significant-first, comparing the strings compares the instants.

use crate::errors::DomainError;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};

pub const DB_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used in job log entries (`2024-05-01 02:00:00 - ...`).
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used by the heartbeat entry (`01/05/2024-02:00:00 CRM is alive`).
pub const HEARTBEAT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y-%H:%M:%S";

/// Longest lookback window, in days, any job accepts.
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// `now` minus `days` whole days, or `ConfigError` when the result falls
/// outside the representable range.
pub fn days_before(now: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>, DomainError> {
    Duration::try_days(i64::from(days))
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| {
            DomainError::ConfigError(format!("window of {days} days reaches before {now}"))
        })
}

pub fn to_db(ts: DateTime<Utc>) -> String {
    ts.format(DB_TIMESTAMP_FORMAT).to_string()
}

pub fn from_db(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    NaiveDateTime::parse_from_str(raw, DB_TIMESTAMP_FORMAT)
        .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
        .map_err(|e| DomainError::InvalidTimestamp(format!("{raw}: {e}")))
}
