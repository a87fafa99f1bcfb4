//! Repository layer: the remote `points/` collection and the visitor store

pub mod firebase;
pub mod memory;
pub mod visitor_store;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    config::{DatabaseBackend, DatabaseConfig, StoreConfig},
    error::AppResult,
    models::location_point::{PointFields, UpdateLocationPoint},
    seed,
};

pub use visitor_store::{VisitorStore, VisitorStoreHandle};

/// Raw children of the collection keyed by database key, in key order
pub type PointsSnapshot = IndexMap<String, Value>;

/// Key-value access to the location point collection
#[async_trait]
pub trait PointsBackend: Send + Sync {
    /// Read the whole collection
    async fn snapshot(&self) -> AppResult<PointsSnapshot>;

    /// Append a child under a generated key and return the key
    async fn push(&self, fields: &PointFields) -> AppResult<String>;

    /// Overwrite only the fields present in `fields`
    async fn update(&self, key: &str, fields: &UpdateLocationPoint) -> AppResult<()>;

    /// Remove a child
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Main repository struct holding the points backend and the visitor store
#[derive(Clone)]
pub struct Repository {
    pub points: Arc<dyn PointsBackend>,
    pub visitors: VisitorStoreHandle,
}

impl Repository {
    /// Create a repository for the configured backend
    pub fn new(database: &DatabaseConfig, store: &StoreConfig) -> AppResult<Self> {
        let points: Arc<dyn PointsBackend> = match database.backend {
            DatabaseBackend::Firebase => Arc::new(firebase::FirebasePoints::new(database)?),
            DatabaseBackend::Memory => Arc::new(memory::MemoryPoints::default()),
        };
        let visitors = if store.preload_demo {
            VisitorStore::with_visitors(seed::demo_visitors())
        } else {
            VisitorStore::new()
        };
        Ok(Self {
            points,
            visitors: VisitorStoreHandle::new(visitors),
        })
    }

    /// Repository over a process-local collection and an empty store
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(memory::MemoryPoints::default()))
    }

    pub fn with_backend(points: Arc<dyn PointsBackend>) -> Self {
        Self {
            points,
            visitors: VisitorStoreHandle::default(),
        }
    }
}
