//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod strategies;

use chrono::{DateTime, Utc};

/// Fixed evaluation instant so time-based assertions are deterministic
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-02T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// RFC 3339 timestamp `hours` relative to [`fixed_now`]
pub fn hours_from_now(hours: i64) -> String {
    (fixed_now() + chrono::Duration::hours(hours)).to_rfc3339()
}

pub fn days_from_now(days: i64) -> String {
    (fixed_now() + chrono::Duration::days(days)).to_rfc3339()
}
