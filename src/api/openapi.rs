//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{destinations, health, points, visitors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Banara API",
        version = "0.1.0",
        description = "Beach Tourism Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Visitors
        visitors::list_visitors,
        visitors::list_added_visitors,
        visitors::create_visitor,
        // Destinations
        destinations::list_beaches,
        destinations::list_destinations,
        destinations::get_destination,
        // Location points
        points::list_points,
        points::list_markers,
        points::create_point,
        points::update_point,
        points::delete_point,
        points::stream_markers,
    ),
    components(
        schemas(
            // Visitors
            crate::models::visitor::Visitor,
            crate::models::visitor::CreateVisitor,
            crate::models::enums::Beach,
            crate::models::enums::SortOrder,
            // Destinations
            crate::models::destination::Zone,
            crate::models::destination::Destination,
            crate::models::destination::DestinationView,
            crate::models::destination::DestinationSection,
            // Location points
            crate::models::location_point::LocationPoint,
            crate::models::location_point::MapMarker,
            crate::models::location_point::CreateLocationPoint,
            crate::models::location_point::UpdateLocationPoint,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "visitors", description = "Visitor check-ins"),
        (name = "destinations", description = "Beach destinations"),
        (name = "points", description = "Map location points")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
