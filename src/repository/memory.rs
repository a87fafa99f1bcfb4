//! Process-local points collection

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{PointsBackend, PointsSnapshot};
use crate::{
    error::{AppError, AppResult},
    models::location_point::{PointFields, UpdateLocationPoint},
};

#[derive(Default)]
pub struct MemoryPoints {
    children: RwLock<PointsSnapshot>,
}

impl MemoryPoints {
    /// Seed with raw children, e.g. records that did not pass validation
    pub fn with_children(children: PointsSnapshot) -> Self {
        Self {
            children: RwLock::new(children),
        }
    }
}

#[async_trait]
impl PointsBackend for MemoryPoints {
    async fn snapshot(&self) -> AppResult<PointsSnapshot> {
        Ok(self.children.read().await.clone())
    }

    async fn push(&self, fields: &PointFields) -> AppResult<String> {
        let key = format!("-{}", Uuid::new_v4().simple());
        let value = serde_json::to_value(fields).map_err(|e| AppError::Internal(e.to_string()))?;
        self.children.write().await.insert(key.clone(), value);
        Ok(key)
    }

    async fn update(&self, key: &str, fields: &UpdateLocationPoint) -> AppResult<()> {
        let mut children = self.children.write().await;
        let child = children
            .get_mut(key)
            .ok_or_else(|| AppError::NotFound(format!("Point {} not found", key)))?;

        if !child.is_object() {
            *child = json!({});
        }
        if let (Value::Object(target), Value::Object(patch)) = (
            child,
            serde_json::to_value(fields).map_err(|e| AppError::Internal(e.to_string()))?,
        ) {
            target.extend(patch);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.children
            .write()
            .await
            .shift_remove(key)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Point {} not found", key)))
    }
}
