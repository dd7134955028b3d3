//! # Status Check Service
//!
//! Business logic for creating and listing status checks and reporting health.
//! The service holds no state of its own; it is a thin layer over an injected
//! [`RecordStore`].

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::models::{HealthReport, StatusCheck};
use crate::services::store::{RecordStore, StoreError};
use crate::utils::constant::STATUS_LIST_LIMIT;

#[derive(Clone)]
pub struct StatusCheckService {
    store: Arc<dyn RecordStore>,
}

impl StatusCheckService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Creates and persists a status check for `client_name`.
    ///
    /// # Errors
    ///
    /// Propagates the [`StoreError`] from the insert unchanged.
    #[instrument(skip(self))]
    pub async fn create_status_check(
        &self,
        client_name: String,
    ) -> Result<StatusCheck, StoreError> {
        let record = StatusCheck::new(client_name, OffsetDateTime::now_utc());
        self.store.insert(&record).await?;

        info!(id = %record.id, "Status check created");
        Ok(record)
    }

    /// Returns the most recent status checks, newest first, at most [`STATUS_LIST_LIMIT`].
    ///
    /// # Errors
    ///
    /// Propagates the [`StoreError`] from the read unchanged.
    #[instrument(skip(self))]
    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, StoreError> {
        let records = self.store.find_recent(STATUS_LIST_LIMIT).await?;
        debug!(count = records.len(), "Listed status checks");
        Ok(records)
    }

    /// Reports process health along with store reachability.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> HealthReport {
        let store_reachable = self.store.ping().await;
        debug!(store_reachable, "Health check performed");
        HealthReport::new(store_reachable, OffsetDateTime::now_utc())
    }
}
