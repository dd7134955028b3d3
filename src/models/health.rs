use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

/// Body of `GET /api/health`.
///
/// `status` reports that the process is up and is always `"ok"`. Store
/// reachability is reported separately in `mongo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub mongo: bool,
}

impl HealthReport {
    pub fn new(store_reachable: bool, now: OffsetDateTime) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: now.to_offset(UtcOffset::UTC),
            mongo: store_reachable,
        }
    }
}
