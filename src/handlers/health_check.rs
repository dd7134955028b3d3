//! # Health Check Handler
//!
//! Health endpoint for monitoring application availability. It can be used by
//! load balancers, monitoring systems, or deployment tools to verify that the
//! application is running.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::{debug, instrument};

use crate::models::{AppState, HealthReport};

/// Health check endpoint.
///
/// GET /api/health
///
/// Pings the record store and reports the outcome in `mongo`. The top-level
/// `status` signals that the process is up, so it is `"ok"` even when the
/// store is unreachable.
///
/// # Returns
///
/// Always returns `200 OK` with a [`HealthReport`].
#[instrument(skip_all)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    debug!("Health check endpoint accessed");
    Json(state.status_service.health_check().await)
}
