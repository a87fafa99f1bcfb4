//! Location points service
//!
//! Reads and writes go straight to the configured backend. Every successful
//! write re-reads the collection and broadcasts the marker list to live
//! subscribers.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::location_point::{
        CreateLocationPoint, LocationPoint, MapMarker, UpdateLocationPoint,
    },
    repository::Repository,
};

/// Marker list shared by every subscriber of one broadcast
pub type MarkerSnapshot = Arc<Vec<MapMarker>>;

const FEED_CAPACITY: usize = 16;

/// Keep only points whose coordinates parse; the rest are logged and skipped
pub fn parse_markers(points: &[LocationPoint]) -> Vec<MapMarker> {
    points
        .iter()
        .filter_map(|point| {
            let marker = MapMarker::from_point(point);
            if marker.is_none() {
                tracing::warn!(
                    "Invalid coordinates for point {}: {:?}",
                    point.id,
                    point.coordinates
                );
            }
            marker
        })
        .collect()
}

/// Reject keys that are blank or could leave the `points/` collection.
/// Forbidden are Firebase's reserved key characters, `?` and control
/// characters.
pub fn validate_point_key(key: &str) -> AppResult<()> {
    if key.trim().is_empty() {
        return Err(AppError::Validation("Point id is required".to_string()));
    }
    if key
        .chars()
        .any(|c| matches!(c, '.' | '$' | '#' | '[' | ']' | '/' | '?') || c.is_control())
    {
        return Err(AppError::Validation(format!(
            "Invalid point id '{}'",
            key.escape_debug()
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct PointsService {
    repository: Repository,
    feed: broadcast::Sender<MarkerSnapshot>,
    last_sent: Arc<Mutex<Option<MarkerSnapshot>>>,
}

impl PointsService {
    pub fn new(repository: Repository) -> Self {
        let (feed, _) = broadcast::channel(FEED_CAPACITY);
        Self {
            repository,
            feed,
            last_sent: Arc::new(Mutex::new(None)),
        }
    }

    /// All points, including ones with unusable coordinates
    pub async fn list(&self) -> AppResult<Vec<LocationPoint>> {
        let snapshot = self.repository.points.snapshot().await?;
        Ok(snapshot
            .iter()
            .map(|(key, value)| LocationPoint::from_json(key, value))
            .collect())
    }

    /// Points that can be drawn on the map
    pub async fn markers(&self) -> AppResult<Vec<MapMarker>> {
        Ok(parse_markers(&self.list().await?))
    }

    /// Create a point under a generated key
    pub async fn create(&self, data: CreateLocationPoint) -> AppResult<LocationPoint> {
        let data = data.trimmed();
        data.validate()?;

        let fields = data.into_fields();
        let key = self.repository.points.push(&fields).await?;
        tracing::info!("Location point {} created: {}", key, fields.name);

        self.publish().await;
        Ok(LocationPoint::new(
            key,
            fields.name,
            fields.coordinates,
            fields.accuration,
        ))
    }

    /// Update the given fields of an existing point
    pub async fn update(&self, id: &str, data: UpdateLocationPoint) -> AppResult<()> {
        validate_point_key(id)?;
        let data = data.trimmed();
        data.validate()?;
        if data.is_empty() {
            return Err(AppError::BadRequest("Nothing to update".to_string()));
        }

        self.repository.points.update(id, &data).await?;
        tracing::info!("Location point {} updated", id);

        self.publish().await;
        Ok(())
    }

    /// Delete a point
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        validate_point_key(id)?;
        self.repository.points.remove(id).await?;
        tracing::info!("Location point {} deleted", id);

        self.publish().await;
        Ok(())
    }

    /// Receive a marker list after every change. Dropping the receiver ends
    /// the subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<MarkerSnapshot> {
        self.feed.subscribe()
    }

    /// Re-read the collection and broadcast it after a local write
    pub async fn publish(&self) {
        self.broadcast(false).await;
    }

    /// Re-read the collection and broadcast it only if the marker list
    /// differs from the last one sent. Returns whether anything was sent.
    pub async fn refresh(&self) -> bool {
        self.broadcast(true).await
    }

    /// Read failures are logged; subscribers keep their previous list.
    async fn broadcast(&self, only_changes: bool) -> bool {
        if self.feed.receiver_count() == 0 {
            return false;
        }
        let markers = match self.markers().await {
            Ok(markers) => markers,
            Err(e) => {
                tracing::error!("Failed to refresh location points: {}", e);
                return false;
            }
        };

        let mut last_sent = self.last_sent.lock().await;
        if only_changes && last_sent.as_deref() == Some(&markers) {
            return false;
        }
        let snapshot = Arc::new(markers);
        *last_sent = Some(snapshot.clone());
        let _ = self.feed.send(snapshot);
        true
    }

    /// Poll the backend so changes made by other clients reach subscribers
    pub fn spawn_refresh(&self, interval: Duration) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if service.refresh().await {
                    tracing::debug!("Location points changed remotely");
                }
            }
        })
    }
}
