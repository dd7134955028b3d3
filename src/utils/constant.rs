//! # Application Constants
//!
//! This module defines configuration constants used throughout the Beacon service.
//! These constants control result limits, probe timeouts, and configuration defaults.

use std::time::Duration;

/// Maximum number of status checks returned by `GET /api/status`
///
/// Listing is not paginated; the newest records up to this cap are returned.
pub const STATUS_LIST_LIMIT: i64 = 100;

/// Name of the document collection holding status checks
pub const STATUS_CHECK_COLLECTION: &str = "status_checks";

/// Maximum number of URLs accepted by a single `POST /api/status/check`
pub const MAX_URLS_PER_CHECK: u64 = 50;

/// Timeout applied to each outbound URL probe
pub const URL_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default store connection URL when `MONGO_URL` is unset
pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";

/// Default database name when `DB_NAME` is unset
pub const DEFAULT_DB_NAME: &str = "app";

/// Default listen address when `BIND_ADDRESS` is unset
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8090";

/// Wildcard value for `CORS_ALLOW_ORIGINS`
pub const CORS_WILDCARD: &str = "*";
