//! # Record Store
//!
//! This module provides persistence for status checks behind the [`RecordStore`]
//! trait, so the service layer never touches a database driver directly.
//!
//! ## Implementations
//!
//! - [`MongoStore`] - Production implementation backed by a MongoDB collection
//! - [`MemoryStore`] - In-process implementation for tests and local development
//!
//! Every call on [`MongoStore`] performs network I/O; nothing is cached locally.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{self, doc},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::models::StatusCheck;
use crate::utils::constant::STATUS_CHECK_COLLECTION;

/// Errors that can occur while talking to the record store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to record store: {0}")]
    Connection(String),

    #[error("failed to write record: {0}")]
    Write(String),

    #[error("failed to read records: {0}")]
    Read(String),

    #[error("stored record could not be decoded: {0}")]
    Decode(String),
}

/// Trait for status check persistence
///
/// Records are insert-only; there is no update or delete.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists a single record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on connection or write failure.
    async fn insert(&self, record: &StatusCheck) -> Result<(), StoreError>;

    /// Returns up to `limit` records, newest `timestamp` first. Records with
    /// equal timestamps come back latest insert first.
    ///
    /// An empty store yields an empty vector, not an error.
    async fn find_recent(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError>;

    /// Reports whether the store is reachable. Never fails.
    async fn ping(&self) -> bool;

    /// Releases the underlying connection. Called once at shutdown.
    async fn close(&self) {}
}

/// Storage shape of a status check.
///
/// Fields outside this allow-list (such as Mongo's `_id`) are ignored on read.
#[derive(Debug, Serialize, Deserialize)]
struct StatusCheckDocument {
    id: String,
    client_name: String,
    timestamp: bson::DateTime,
}

impl StatusCheckDocument {
    fn from_record(record: &StatusCheck) -> Self {
        let millis = record.timestamp.unix_timestamp_nanos() / 1_000_000;
        Self {
            id: record.id.clone(),
            client_name: record.client_name.clone(),
            timestamp: bson::DateTime::from_millis(millis as i64),
        }
    }

    fn into_record(self) -> Result<StatusCheck, StoreError> {
        let nanos = i128::from(self.timestamp.timestamp_millis()) * 1_000_000;
        let timestamp = OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        Ok(StatusCheck {
            id: self.id,
            client_name: self.client_name,
            timestamp,
        })
    }
}

/// MongoDB-backed record store
///
/// Holds one long-lived client for the lifetime of the process. The driver
/// manages its own connection pool, so a single instance is shared by all requests.
pub struct MongoStore {
    client: Client,
    database: Database,
    collection: Collection<StatusCheckDocument>,
}

impl MongoStore {
    /// Creates the client for `url` and selects database `db_name`.
    ///
    /// The driver connects lazily, so an unreachable server does not fail here;
    /// it shows up later through [`RecordStore::ping`] or a failed request.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL cannot be parsed or resolved.
    #[instrument(skip(url))]
    pub async fn connect(url: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let database = client.database(db_name);
        let collection = database.collection::<StatusCheckDocument>(STATUS_CHECK_COLLECTION);

        info!(
            collection = STATUS_CHECK_COLLECTION,
            "Record store client initialized"
        );

        Ok(Self {
            client,
            database,
            collection,
        })
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    #[instrument(skip_all, fields(id = %record.id))]
    async fn insert(&self, record: &StatusCheck) -> Result<(), StoreError> {
        self.collection
            .insert_one(StatusCheckDocument::from_record(record))
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        debug!("Status check persisted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_recent(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            // ObjectIds grow with insertion order, breaking same-millisecond ties
            .sort(doc! { "timestamp": -1, "_id": -1 })
            .limit(limit)
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;

        let documents: Vec<StatusCheckDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;

        debug!(count = documents.len(), "Fetched recent status checks");

        documents
            .into_iter()
            .map(StatusCheckDocument::into_record)
            .collect()
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> bool {
        match self.database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Record store ping failed");
                false
            }
        }
    }

    async fn close(&self) {
        info!("Closing record store client");
        self.client.clone().shutdown().await;
    }
}

/// In-process record store
///
/// Keeps records in memory with the same ordering contract as [`MongoStore`].
/// It can be switched into an unreachable state to exercise failure paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<StatusCheck>>,
    unreachable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call behave as if the store were down.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    fn is_unreachable(&self) -> bool {
        self.unreachable.load(Ordering::SeqCst)
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, record: &StatusCheck) -> Result<(), StoreError> {
        if self.is_unreachable() {
            error!("Memory store is marked unreachable");
            return Err(StoreError::Connection("store unreachable".to_string()));
        }

        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        if self.is_unreachable() {
            return Err(StoreError::Connection("store unreachable".to_string()));
        }

        let mut records = self.records.read().await.clone();
        // stable sort keeps insertion order for equal timestamps; reverse puts the latest insert first
        records.reverse();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(records)
    }

    async fn ping(&self) -> bool {
        !self.is_unreachable()
    }
}
