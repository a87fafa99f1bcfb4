//! Data models for Banara

pub mod destination;
pub mod enums;
pub mod location_point;
pub mod visitor;

// Re-export commonly used types
pub use destination::{Destination, DestinationSection, DestinationView, Zone};
pub use enums::{Beach, BeachFilter, SortOrder};
pub use location_point::{
    Coordinates, CreateLocationPoint, LocationPoint, MapMarker, MapRegion, PointFields,
    UpdateLocationPoint,
};
pub use visitor::{CreateVisitor, NewVisitor, Visitor, VisitorQuery};
