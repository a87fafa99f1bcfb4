//! Location point (map marker) model
//!
//! Points live in the remote `points/` collection as
//! `{name, coordinates, accuration}` where `coordinates` is the text
//! `"<lat>,<lon>"`. Reads are lenient: a record whose coordinates do not
//! parse is still listed but never becomes a [`MapMarker`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// A parsed `"<lat>,<lon>"` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Parse the database text form. Exactly two finite numeric components
    /// are required; anything else yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split(',');
        let lat = parts.next()?.trim().parse::<f64>().ok()?;
        let lon = parts.next()?.trim().parse::<f64>().ok()?;
        if parts.next().is_some() || !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        Some(Self::new(lat, lon))
    }
}

/// Google Maps search link built from the first two trimmed components of
/// the coordinate text, as entered. Text without two non-empty components
/// has no link.
pub fn maps_url(coordinates: &str) -> Option<String> {
    let mut parts = coordinates.split(',').map(str::trim);
    let lat = parts.next().filter(|p| !p.is_empty())?;
    let lon = parts.next().filter(|p| !p.is_empty())?;
    Some(format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        lat, lon
    ))
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Location point as listed to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationPoint {
    /// Key assigned by the database
    pub id: String,
    pub name: String,
    /// `"<lat>,<lon>"`, possibly malformed
    pub coordinates: String,
    /// Accuracy text, usually `"<meters> m"`
    pub accuration: String,
    /// Google Maps link when the coordinate text has two components
    pub maps_url: Option<String>,
}

impl LocationPoint {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinates: impl Into<String>,
        accuration: impl Into<String>,
    ) -> Self {
        let coordinates = coordinates.into();
        let maps_url = maps_url(&coordinates);
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
            accuration: accuration.into(),
            maps_url,
        }
    }

    /// Build from a raw database child. Missing or mistyped fields become
    /// empty strings; a numeric accuracy is rendered as text.
    pub fn from_json(key: &str, value: &Value) -> Self {
        let text = |field: &str| match value.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let coordinates = match value.get("coordinates") {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        };
        Self::new(key, text("name"), coordinates, text("accuration"))
    }

    pub fn parsed_coordinates(&self) -> Option<Coordinates> {
        Coordinates::parse(&self.coordinates)
    }
}

/// Parsed marker ready for map rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapMarker {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl MapMarker {
    pub fn from_point(point: &LocationPoint) -> Option<Self> {
        let coords = point.parsed_coordinates()?;
        Some(Self {
            id: point.id.clone(),
            name: point.name.clone(),
            latitude: coords.latitude,
            longitude: coords.longitude,
        })
    }
}

/// Visible map area: centre plus zoom spans
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn centered(center: Coordinates, delta: f64) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta: delta,
            longitude_delta: delta,
        }
    }

    /// Same zoom, new centre
    pub fn recentered(&self, center: Coordinates) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            ..*self
        }
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Record body written to the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointFields {
    pub name: String,
    pub coordinates: String,
    pub accuration: String,
}

/// Create location point request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateLocationPoint {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Coordinates are required"))]
    pub coordinates: String,
    #[serde(default)]
    pub accuration: Option<String>,
}

impl CreateLocationPoint {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            coordinates: self.coordinates.trim().to_string(),
            accuration: self.accuration.map(|a| a.trim().to_string()),
        }
    }

    pub fn into_fields(self) -> PointFields {
        PointFields {
            name: self.name,
            coordinates: self.coordinates,
            accuration: self.accuration.unwrap_or_default(),
        }
    }
}

/// Targeted field update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateLocationPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Coordinates cannot be empty"))]
    pub coordinates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuration: Option<String>,
}

impl UpdateLocationPoint {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.map(|s| s.trim().to_string()),
            coordinates: self.coordinates.map(|s| s.trim().to_string()),
            accuration: self.accuration.map(|s| s.trim().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.coordinates.is_none() && self.accuration.is_none()
    }
}
