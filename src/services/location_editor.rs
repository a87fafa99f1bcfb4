//! Add/edit location form state
//!
//! Keeps the coordinate text and the draggable marker in agreement. The
//! text field is authoritative: whatever it holds is what gets saved, and
//! when it parses the map recentres on it. A drag or a device fix rewrites
//! the text.

use async_trait::async_trait;

use super::points::PointsService;
use crate::{
    config::MapConfig,
    error::{AppError, AppResult},
    models::location_point::{
        Coordinates, CreateLocationPoint, LocationPoint, MapRegion, UpdateLocationPoint,
    },
};

/// Position reported by the device
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy radius in meters
    pub accuracy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Device location service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceLocation: Send + Sync {
    async fn request_permission(&self) -> PermissionStatus;

    async fn current_position(&self) -> AppResult<DevicePosition>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Edit { id: String },
}

#[derive(Debug, Clone)]
pub struct LocationEditor {
    mode: EditorMode,
    name: String,
    coordinates: String,
    accuration: String,
    region: MapRegion,
    fix_delta: f64,
    loading: bool,
}

impl LocationEditor {
    /// Empty form centred on the default add-screen region
    pub fn for_new(map: &MapConfig) -> Self {
        Self {
            mode: EditorMode::Add,
            name: String::new(),
            coordinates: String::new(),
            accuration: String::new(),
            region: MapRegion::centered(
                Coordinates::new(map.add_latitude, map.add_longitude),
                map.add_delta,
            ),
            fix_delta: map.device_fix_delta,
            loading: false,
        }
    }

    /// Form prefilled from an existing point; the region follows its
    /// coordinates when they parse
    pub fn for_existing(point: &LocationPoint, map: &MapConfig) -> Self {
        let default_center = Coordinates::new(map.edit_latitude, map.edit_longitude);
        let center = point.parsed_coordinates().unwrap_or(default_center);
        Self {
            mode: EditorMode::Edit {
                id: point.id.clone(),
            },
            name: point.name.clone(),
            coordinates: point.coordinates.clone(),
            accuration: point.accuration.clone(),
            region: MapRegion::centered(center, map.edit_delta),
            fix_delta: map.device_fix_delta,
            loading: false,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> &str {
        &self.coordinates
    }

    pub fn accuration(&self) -> &str {
        &self.accuration
    }

    pub fn region(&self) -> MapRegion {
        self.region
    }

    /// Marker position, always the region centre
    pub fn marker(&self) -> Coordinates {
        self.region.center()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_accuration(&mut self, accuration: impl Into<String>) {
        self.accuration = accuration.into();
    }

    /// Manual edit of the coordinate field
    pub fn set_coordinates_text(&mut self, text: impl Into<String>) {
        self.coordinates = text.into();
        if let Some(center) = Coordinates::parse(&self.coordinates) {
            self.region = self.region.recentered(center);
        }
    }

    /// Marker released at a new position
    pub fn on_marker_drag_end(&mut self, latitude: f64, longitude: f64) {
        let center = Coordinates::new(latitude, longitude);
        self.coordinates = center.to_string();
        self.region = self.region.recentered(center);
    }

    /// Fill coordinates and accuracy from the device. On denial or failure
    /// the form fields are left as they were.
    pub async fn use_current_location(&mut self, device: &dyn DeviceLocation) -> AppResult<()> {
        self.loading = true;
        let result = Self::fetch_fix(device).await;
        self.loading = false;

        let fix = result?;
        let center = Coordinates::new(fix.latitude, fix.longitude);
        self.coordinates = center.to_string();
        self.accuration = format!("{} m", fix.accuracy);
        self.region = MapRegion::centered(center, self.fix_delta);
        Ok(())
    }

    async fn fetch_fix(device: &dyn DeviceLocation) -> AppResult<DevicePosition> {
        if device.request_permission().await == PermissionStatus::Denied {
            return Err(AppError::PermissionDenied(
                "Location permission is required".to_string(),
            ));
        }

        let fix = device.current_position().await.map_err(|e| {
            tracing::warn!("Failed to get current position: {}", e);
            e
        })?;
        if !fix.latitude.is_finite() || !fix.longitude.is_finite() {
            return Err(AppError::LocationUnavailable(
                "Device reported an invalid position".to_string(),
            ));
        }
        Ok(fix)
    }

    /// Write the form through the points service: create in add mode,
    /// field update in edit mode. Returns the point id.
    pub async fn save(&self, points: &PointsService) -> AppResult<String> {
        let name = self.name.trim();
        let coordinates = self.coordinates.trim();
        if name.is_empty() || coordinates.is_empty() {
            return Err(AppError::Validation(
                "Name and coordinates are required".to_string(),
            ));
        }

        match &self.mode {
            EditorMode::Add => {
                let point = points
                    .create(CreateLocationPoint {
                        name: name.to_string(),
                        coordinates: coordinates.to_string(),
                        accuration: Some(self.accuration.clone()),
                    })
                    .await?;
                Ok(point.id)
            }
            EditorMode::Edit { id } => {
                points
                    .update(
                        id,
                        UpdateLocationPoint {
                            name: Some(name.to_string()),
                            coordinates: Some(coordinates.to_string()),
                            accuration: Some(self.accuration.clone()),
                        },
                    )
                    .await?;
                Ok(id.clone())
            }
        }
    }
}
