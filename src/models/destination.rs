//! Beach destination model

use serde::Serialize;
use utoipa::ToSchema;

use super::enums::Beach;

/// Coastal zone grouping for the destination list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    East,
    Central,
    West,
}

impl Zone {
    pub fn title(&self) -> &'static str {
        match self {
            Zone::East => "Wilayah Timur (Zona Populer)",
            Zone::Central => "Wilayah Tengah (Zona Cemara)",
            Zone::West => "Wilayah Barat (Zona Muara)",
        }
    }
}

/// A beach destination with ticketing and crowd information
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Destination {
    pub id: String,
    pub beach: Beach,
    pub zone: Zone,
    pub opening_hours: String,
    /// Ticket price in rupiah
    pub price: u32,
    pub capacity: u32,
    /// Current visitors on site
    pub visitors: u32,
    pub image: String,
}

impl Destination {
    /// Share of capacity in use, 0 when capacity is unknown
    pub fn occupancy_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.visitors) / f64::from(self.capacity) * 100.0
    }
}

/// Destination with derived display values
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DestinationView {
    #[serde(flatten)]
    pub destination: Destination,
    pub occupancy_percent: f64,
    /// Price formatted for display, e.g. `Rp 10.000`
    pub price_label: String,
}

/// Destinations of one zone
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DestinationSection {
    pub zone: Zone,
    pub title: String,
    pub destinations: Vec<DestinationView>,
}
