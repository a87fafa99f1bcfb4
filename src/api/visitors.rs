//! Visitor check-in API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{BeachFilter, SortOrder},
        visitor::{CreateVisitor, Visitor, VisitorQuery},
    },
    services::filter_selection::Selection,
};

/// Visitor list: live check-ins plus the reference set, filtered and sorted
#[utoipa::path(
    get,
    path = "/visitors",
    tag = "visitors",
    params(VisitorQuery),
    responses(
        (status = 200, description = "Visitor list", body = Vec<Visitor>),
        (status = 400, description = "Unknown beach or sort order", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_visitors(
    State(state): State<crate::AppState>,
    Query(query): Query<VisitorQuery>,
) -> AppResult<Json<Vec<Visitor>>> {
    let beach_filter = match query.beach.as_deref().map(str::trim) {
        None | Some("") => BeachFilter::All,
        Some(beach) => beach.parse().map_err(AppError::BadRequest)?,
    };
    let sort_order = match query.sort.as_deref().map(str::trim) {
        None | Some("") => SortOrder::default(),
        Some(sort) => sort.parse().map_err(AppError::BadRequest)?,
    };
    let selection = Selection {
        sort_order,
        beach_filter,
    };

    let visitors = state
        .services
        .visitors
        .query(selection, query.search.as_deref().unwrap_or(""))
        .await;
    Ok(Json(visitors))
}

/// Visitors recorded since the server started, newest first
#[utoipa::path(
    get,
    path = "/visitors/added",
    tag = "visitors",
    responses(
        (status = 200, description = "Recorded visitors", body = Vec<Visitor>)
    )
)]
pub async fn list_added_visitors(State(state): State<crate::AppState>) -> Json<Vec<Visitor>> {
    Json(state.services.visitors.list_added().await)
}

/// Record a visitor check-in
#[utoipa::path(
    post,
    path = "/visitors",
    tag = "visitors",
    request_body = CreateVisitor,
    responses(
        (status = 201, description = "Visitor recorded", body = Visitor),
        (status = 400, description = "Missing or invalid field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_visitor(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateVisitor>,
) -> AppResult<(StatusCode, Json<Visitor>)> {
    let visitor = state.services.visitors.create(data).await?;
    Ok((StatusCode::CREATED, Json(visitor)))
}
