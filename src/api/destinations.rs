//! Destination and beach API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        destination::{DestinationSection, DestinationView},
        enums::Beach,
    },
};

/// Beach names accepted by the visitor form and filters
#[utoipa::path(
    get,
    path = "/beaches",
    tag = "destinations",
    responses(
        (status = 200, description = "Beach list", body = Vec<Beach>)
    )
)]
pub async fn list_beaches() -> Json<Vec<Beach>> {
    Json(Beach::ALL.to_vec())
}

/// Destination catalog grouped by zone
#[utoipa::path(
    get,
    path = "/destinations",
    tag = "destinations",
    responses(
        (status = 200, description = "Destinations by zone", body = Vec<DestinationSection>)
    )
)]
pub async fn list_destinations(
    State(state): State<crate::AppState>,
) -> Json<Vec<DestinationSection>> {
    Json(state.services.destinations.sections())
}

/// One destination by beach name
#[utoipa::path(
    get,
    path = "/destinations/{beach}",
    tag = "destinations",
    params(("beach" = String, Path, description = "Beach name, e.g. Pantai Depok")),
    responses(
        (status = 200, description = "Destination", body = DestinationView),
        (status = 404, description = "Unknown beach", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_destination(
    State(state): State<crate::AppState>,
    Path(beach): Path<String>,
) -> AppResult<Json<DestinationView>> {
    let beach: Beach = beach.parse().map_err(AppError::NotFound)?;
    state
        .services
        .destinations
        .get(beach)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No destination for {}", beach)))
}
