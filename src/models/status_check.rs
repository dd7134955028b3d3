//! # Status Check Types
//!
//! This module defines the StatusCheck record returned by the API and the
//! request body used to create one. Records are immutable once built.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, UtcOffset};
use uuid::Uuid;

/// A single client check-in.
///
/// The `id` and `timestamp` are always generated server-side. The timestamp
/// is kept in UTC at millisecond precision, which is what the document store
/// can represent, so a record reads back exactly as it was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl StatusCheck {
    /// Builds a new record for `client_name` stamped at `now`.
    ///
    /// A fresh UUID v4 is assigned. `now` is normalized to UTC and truncated
    /// to whole milliseconds.
    pub fn new(client_name: impl Into<String>, now: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: truncate_to_millis(now.to_offset(UtcOffset::UTC)),
        }
    }
}

/// Request payload for creating a status check
///
/// `client_name` must be present; any string, including the empty string, is accepted.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// Drops sub-millisecond precision from `instant`.
fn truncate_to_millis(instant: OffsetDateTime) -> OffsetDateTime {
    let excess_nanos = instant.nanosecond() % 1_000_000;
    instant - Duration::nanoseconds(i64::from(excess_nanos))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn new_assigns_uuid_and_keeps_name_verbatim() {
        let now = datetime!(2024-05-01 12:00:00 UTC);
        let record = StatusCheck::new("  acme  ", now);

        assert_eq!(record.client_name, "  acme  ");
        assert!(Uuid::parse_str(&record.id).is_ok());
        assert_eq!(record.timestamp, now);
    }

    #[test]
    fn new_generates_distinct_ids() {
        let now = datetime!(2024-05-01 12:00:00 UTC);
        let a = StatusCheck::new("acme", now);
        let b = StatusCheck::new("acme", now);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn timestamp_is_normalized_to_utc_milliseconds() {
        let now = datetime!(2024-05-01 14:00:00.123_456_789 +02:00);
        let record = StatusCheck::new("acme", now);

        assert_eq!(record.timestamp, datetime!(2024-05-01 12:00:00.123 UTC));
        assert_eq!(record.timestamp.offset(), UtcOffset::UTC);
    }

    #[test]
    fn serializes_timestamp_as_rfc3339_with_z_suffix() {
        let mut record = StatusCheck::new("acme", datetime!(2024-05-01 12:00:00.5 UTC));
        record.id = "fixed-id".to_string();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "fixed-id");
        assert_eq!(json["client_name"], "acme");
        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(timestamp.starts_with("2024-05-01T12:00:00.5"));
        assert!(timestamp.ends_with('Z'));
    }

    #[test]
    fn create_payload_accepts_empty_name_and_rejects_missing_field() {
        let payload: StatusCheckCreate = serde_json::from_str(r#"{"client_name": ""}"#).unwrap();
        assert_eq!(payload.client_name, "");

        assert!(serde_json::from_str::<StatusCheckCreate>("{}").is_err());
        assert!(serde_json::from_str::<StatusCheckCreate>(r#"{"client_name": null}"#).is_err());
    }
}
