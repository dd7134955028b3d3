use std::sync::Arc;

use tracing::info;

use crate::services::probe::UrlProber;
use crate::services::status::StatusCheckService;
use crate::services::store::RecordStore;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Status check business logic over the shared record store.
    pub status_service: StatusCheckService,
    /// Prober used by the URL check endpoint.
    pub url_prober: Arc<dyn UrlProber>,
}

impl AppState {
    /// Creates a new application state with the provided services.
    ///
    /// # Arguments
    ///
    /// * `store` - Record store shared by all requests
    /// * `url_prober` - Service for outbound URL checks
    pub fn new(store: Arc<dyn RecordStore>, url_prober: Arc<dyn UrlProber>) -> Self {
        info!("Initializing application state");

        Self {
            status_service: StatusCheckService::new(store),
            url_prober,
        }
    }
}
