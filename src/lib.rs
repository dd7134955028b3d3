//! # Beacon - Status Check Service
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the `/api` endpoints
//! - [`middleware`] - CORS policy and other cross-cutting layers
//! - [`models`] - Records, request/response bodies, and shared application state
//! - [`services`] - Business logic services (record store, status checks, URL probes)
//! - [`utils`] - Configuration and constants

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    check_url_statuses, create_status_check, health_check, list_status_checks, root,
};
use crate::middleware::cors_layer;
use crate::models::AppState;
use crate::services::probe::UrlProber;
use crate::services::store::RecordStore;
use crate::utils::config::CorsSettings;

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `store` - Record store shared by all requests; owned by the caller's process lifecycle
/// * `url_prober` - Prober used by `POST /api/status/check`
/// * `cors` - Cross-origin policy applied to every route
///
/// # Returns
///
/// A configured Axum router with all routes under `/api`
pub fn app(
    store: Arc<dyn RecordStore>,
    url_prober: Arc<dyn UrlProber>,
    cors: &CorsSettings,
) -> Router {
    let state = Arc::new(AppState::new(store, url_prober));

    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/status", post(create_status_check).get(list_status_checks))
        .route("/api/status/check", post(check_url_statuses))
        .route("/api/health", get(health_check))
        .with_state(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}
