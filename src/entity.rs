//! Entity records as seen by the engine.
//!
//! Leads, proposals, invoices, tickets and the rest all reach the engine as
//! loosely typed key-value records. [`EntityRecord`] keeps only the fields the
//! engine reads, each one optional.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// Naive date-time layouts accepted besides RFC 3339, read in the local clock
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Fields of an entity that drive urgency and suggestions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_24h_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_movement_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl EntityRecord {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Read a record from a loosely typed JSON object.
    ///
    /// Fields that are missing, null or not strings are left empty. Anything
    /// other than an object yields an empty record.
    pub fn from_json(value: &Value) -> Self {
        let field = |name: &str| -> Option<String> {
            match value.get(name) {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Null) | None => None,
                Some(other) => {
                    trace!(field = name, value = %other, "Ignoring non-string entity field");
                    None
                }
            }
        };

        Self {
            status: field("status"),
            due_date: field("due_date"),
            sla_24h_deadline: field("sla_24h_deadline"),
            created_at: field("created_at"),
            last_movement_at: field("last_movement_at"),
            full_name: field("full_name"),
            client_name: field("client_name"),
            subject: field("subject"),
            title: field("title"),
        }
    }

    pub fn due_date(mut self, value: impl Into<String>) -> Self {
        self.due_date = Some(value.into());
        self
    }

    pub fn sla_24h_deadline(mut self, value: impl Into<String>) -> Self {
        self.sla_24h_deadline = Some(value.into());
        self
    }

    pub fn created_at(mut self, value: impl Into<String>) -> Self {
        self.created_at = Some(value.into());
        self
    }

    pub fn last_movement_at(mut self, value: impl Into<String>) -> Self {
        self.last_movement_at = Some(value.into());
        self
    }

    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    pub fn client_name(mut self, value: impl Into<String>) -> Self {
        self.client_name = Some(value.into());
        self
    }

    pub fn subject(mut self, value: impl Into<String>) -> Self {
        self.subject = Some(value.into());
        self
    }

    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    /// Raw status, empty when absent
    pub fn status_str(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }

    /// First non-empty of `full_name`, `client_name`, `subject`, `title`
    pub fn display_name(&self) -> Option<&str> {
        [&self.full_name, &self.client_name, &self.subject, &self.title]
            .into_iter()
            .find_map(|field| present(field))
    }
}

/// A field counts as present when it is set and non-empty
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Parse a timestamp the way the data layer writes them.
///
/// Accepts RFC 3339, naive date-times (read in the local clock) and bare
/// dates (UTC midnight). Returns `None` for anything else; callers treat that
/// as an invalid date against which every comparison is false.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_reads_string_fields() {
        let record = EntityRecord::from_json(&json!({
            "id": 42,
            "status": "new",
            "created_at": "2026-01-05T10:00:00Z",
            "full_name": "María Pérez"
        }));
        assert_eq!(record.status_str(), "new");
        assert_eq!(record.created_at.as_deref(), Some("2026-01-05T10:00:00Z"));
        assert_eq!(record.display_name(), Some("María Pérez"));
        assert!(record.due_date.is_none());
    }

    #[test]
    fn test_from_json_ignores_non_string_values() {
        let record = EntityRecord::from_json(&json!({
            "status": 3,
            "due_date": null,
            "title": ["x"]
        }));
        assert_eq!(record, EntityRecord::default());
        assert_eq!(EntityRecord::from_json(&json!("not an object")), EntityRecord::default());
    }

    #[test]
    fn test_display_name_skips_empty_fields() {
        let record = EntityRecord::default()
            .full_name("")
            .subject("Consulta arriendo")
            .title("Ticket 9");
        assert_eq!(record.display_name(), Some("Consulta arriendo"));
        assert_eq!(EntityRecord::default().display_name(), None);
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_timestamp("2026-03-01T12:30:00-03:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-03-01T15:30:00+00:00");
    }

    #[test]
    fn test_parse_date_only_is_utc_midnight() {
        let parsed = parse_timestamp("2026-03-01").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-03-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_naive_datetime_uses_local_clock() {
        let parsed = parse_timestamp("2026-03-01T12:30:00").unwrap();
        let expected = Local
            .with_ymd_and_hms(2026, 3, 1, 12, 30, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_garbage_is_invalid() {
        assert!(parse_timestamp("mañana").is_none());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2026-13-45").is_none());
    }
}
