//! Business logic services

pub mod destinations;
pub mod filter_selection;
pub mod location_editor;
pub mod points;
pub mod visitor_query;
pub mod visitors;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub visitors: visitors::VisitorsService,
    pub points: points::PointsService,
    pub destinations: destinations::DestinationsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            visitors: visitors::VisitorsService::new(repository.clone()),
            points: points::PointsService::new(repository),
            destinations: destinations::DestinationsService::new(),
        }
    }
}
