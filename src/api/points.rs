//! Location point API endpoints

use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use tokio_stream::{
    wrappers::{errors::BroadcastStreamRecvError, BroadcastStream},
    Stream, StreamExt,
};

use crate::{
    error::AppResult,
    models::location_point::{CreateLocationPoint, LocationPoint, MapMarker, UpdateLocationPoint},
};

/// List all location points
#[utoipa::path(
    get,
    path = "/points",
    tag = "points",
    responses(
        (status = 200, description = "Location points", body = Vec<LocationPoint>)
    )
)]
pub async fn list_points(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LocationPoint>>> {
    let points = state.services.points.list().await?;
    Ok(Json(points))
}

/// Map markers for points with usable coordinates
#[utoipa::path(
    get,
    path = "/points/markers",
    tag = "points",
    responses(
        (status = 200, description = "Map markers", body = Vec<MapMarker>)
    )
)]
pub async fn list_markers(State(state): State<crate::AppState>) -> AppResult<Json<Vec<MapMarker>>> {
    let markers = state.services.points.markers().await?;
    Ok(Json(markers))
}

/// Create a location point
#[utoipa::path(
    post,
    path = "/points",
    tag = "points",
    request_body = CreateLocationPoint,
    responses(
        (status = 201, description = "Location point created", body = LocationPoint),
        (status = 400, description = "Name or coordinates missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_point(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateLocationPoint>,
) -> AppResult<(StatusCode, Json<LocationPoint>)> {
    let point = state.services.points.create(data).await?;
    Ok((StatusCode::CREATED, Json(point)))
}

/// Update fields of a location point
#[utoipa::path(
    patch,
    path = "/points/{id}",
    tag = "points",
    params(("id" = String, Path, description = "Point key")),
    request_body = UpdateLocationPoint,
    responses(
        (status = 204, description = "Location point updated")
    )
)]
pub async fn update_point(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateLocationPoint>,
) -> AppResult<StatusCode> {
    state.services.points.update(&id, data).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a location point
#[utoipa::path(
    delete,
    path = "/points/{id}",
    tag = "points",
    params(("id" = String, Path, description = "Point key")),
    responses(
        (status = 204, description = "Location point deleted")
    )
)]
pub async fn delete_point(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.points.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Live marker list as server-sent events: the current list first, then a
/// new list after every change
#[utoipa::path(
    get,
    path = "/points/stream",
    tag = "points",
    responses(
        (status = 200, description = "`markers` events carrying Vec<MapMarker>", content_type = "text/event-stream")
    )
)]
pub async fn stream_markers(
    State(state): State<crate::AppState>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, axum::Error>>>> {
    // Subscribe before the first read so no change falls in between
    let rx = state.services.points.subscribe();
    let initial = state.services.points.markers().await?;

    let updates = BroadcastStream::new(rx).filter_map(|msg| match msg {
        Ok(markers) => Some(markers),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!("Marker subscriber lagged, skipped {} updates", skipped);
            None
        }
    });

    let stream = tokio_stream::once(Arc::new(initial))
        .chain(updates)
        .map(|markers| Event::default().event("markers").json_data(&*markers));

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(30))
            .text("keep-alive"),
    ))
}
