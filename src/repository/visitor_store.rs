//! In-memory visitor store
//!
//! Check-ins recorded during this process live here, newest first. Nothing
//! is persisted: the store starts empty (or with the demo preload) on every
//! start.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::visitor::{NewVisitor, Visitor};

#[derive(Debug, Default)]
pub struct VisitorStore {
    visitors: VecDeque<Visitor>,
}

impl VisitorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records, given newest first
    pub fn with_visitors(visitors: impl IntoIterator<Item = Visitor>) -> Self {
        Self {
            visitors: visitors.into_iter().collect(),
        }
    }

    /// Record a check-in under a fresh identifier and put it at the front.
    /// No validation happens here.
    pub fn add(&mut self, data: NewVisitor) -> Visitor {
        let visitor = Visitor::with_id(Uuid::new_v4().to_string(), data);
        self.visitors.push_front(visitor.clone());
        visitor
    }

    /// All recorded visitors, most recently added first
    pub fn list(&self) -> Vec<Visitor> {
        self.visitors.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

/// Shared handle to the store. `add` and `list` are the only capabilities.
#[derive(Debug, Clone, Default)]
pub struct VisitorStoreHandle {
    inner: Arc<RwLock<VisitorStore>>,
}

impl VisitorStoreHandle {
    pub fn new(store: VisitorStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn add(&self, data: NewVisitor) -> Visitor {
        let visitor = self.inner.write().await.add(data);
        tracing::info!(id = %visitor.id, beach = %visitor.beach, "Visitor recorded");
        visitor
    }

    pub async fn list(&self) -> Vec<Visitor> {
        self.inner.read().await.list()
    }
}
