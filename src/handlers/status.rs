//! # Status Check Handlers
//!
//! This module implements the status check endpoints: recording a client
//! check-in, listing recent check-ins, and probing a list of URLs.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, instrument};
use validator::Validate;

use crate::error::AppResult;
use crate::models::{AppState, StatusCheck, StatusCheckCreate, UrlCheckRequest, UrlStatus};
use crate::services::probe::check_urls;

/// Records a check-in for the named client.
///
/// POST /api/status StatusCheckCreate
///
/// The server assigns the record's `id` and `timestamp`. An empty `client_name`
/// is accepted.
///
/// # Returns
///
/// - `200 OK` with the created [`StatusCheck`]
/// - `422 Unprocessable Entity` - Body not declared as JSON, malformed JSON, or missing `client_name`
/// - `500 Internal Server Error` - Database error
#[instrument(
    skip_all,
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn create_status_check(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StatusCheckCreate>, JsonRejection>,
) -> AppResult<Json<StatusCheck>> {
    let Json(payload) = payload?;
    debug!(client_name = %payload.client_name, "Processing status check creation");

    let record = state
        .status_service
        .create_status_check(payload.client_name)
        .await?;

    Ok(Json(record))
}

/// Lists recent check-ins.
///
/// GET /api/status
///
/// # Returns
///
/// - `200 OK` with up to 100 [`StatusCheck`] records, newest first
/// - `500 Internal Server Error` - Database error
#[instrument(
    skip_all,
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn list_status_checks(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<StatusCheck>>> {
    debug!("Processing status check listing");
    let records = state.status_service.list_status_checks().await?;
    Ok(Json(records))
}

/// Probes each URL and reports whether it responded.
///
/// POST /api/status/check UrlCheckRequest
///
/// Unreachable URLs do not fail the request; they are reported with
/// `status_code` 0.
///
/// # Returns
///
/// - `200 OK` with one [`UrlStatus`] per URL, in request order
/// - `422 Unprocessable Entity` - Malformed body or too many URLs
#[instrument(
    skip_all,
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn check_url_statuses(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UrlCheckRequest>, JsonRejection>,
) -> AppResult<Json<Vec<UrlStatus>>> {
    let Json(payload) = payload?;
    payload.validate()?;
    debug!(count = payload.urls.len(), "Processing URL check request");

    let results = check_urls(state.url_prober.as_ref(), &payload.urls).await;
    Ok(Json(results))
}
