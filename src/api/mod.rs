//! API handlers for Banara REST endpoints

pub mod destinations;
pub mod health;
pub mod openapi;
pub mod points;
pub mod visitors;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Visitors
        .route(
            "/visitors",
            get(visitors::list_visitors).post(visitors::create_visitor),
        )
        .route("/visitors/added", get(visitors::list_added_visitors))
        // Destinations
        .route("/beaches", get(destinations::list_beaches))
        .route("/destinations", get(destinations::list_destinations))
        .route("/destinations/:beach", get(destinations::get_destination))
        // Location points
        .route("/points", get(points::list_points).post(points::create_point))
        .route("/points/markers", get(points::list_markers))
        .route("/points/stream", get(points::stream_markers))
        .route(
            "/points/:id",
            patch(points::update_point).delete(points::delete_point),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
