//! Presence endpoints (attendance recording, listing, occupancy)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        analytics::OccupancySnapshot,
        presence::{CreatePresence, OccupancyQuery, Presence, PresenceDetails, PresenceQuery, UpdatePresence},
    },
};

/// Record attendance for today
#[utoipa::path(
    post,
    path = "/presences",
    tag = "presences",
    request_body = CreatePresence,
    responses(
        (status = 201, description = "Presence recorded", body = Presence),
        (status = 400, description = "Invalid request or presence already recorded today", body = crate::error::ErrorResponse),
        (status = 404, description = "Classroom or user not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_presence(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePresence>,
) -> AppResult<(StatusCode, Json<Presence>)> {
    let presence = state.services.presences.record(&data).await?;
    Ok((StatusCode::CREATED, Json(presence)))
}

/// List presences with filters
#[utoipa::path(
    get,
    path = "/presences",
    tag = "presences",
    params(PresenceQuery),
    responses(
        (status = 200, description = "Presences list", body = Vec<PresenceDetails>),
        (status = 400, description = "Invalid filter", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_presences(
    State(state): State<crate::AppState>,
    Query(query): Query<PresenceQuery>,
) -> AppResult<Json<Vec<PresenceDetails>>> {
    let presences = state.services.presences.list(&query).await?;
    Ok(Json(presences))
}

/// Get presence by ID
#[utoipa::path(
    get,
    path = "/presences/{id}",
    tag = "presences",
    params(("id" = i32, Path, description = "Presence ID")),
    responses(
        (status = 200, description = "Presence details", body = PresenceDetails),
        (status = 404, description = "Presence not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_presence(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PresenceDetails>> {
    let presence = state.services.presences.get(id).await?;
    Ok(Json(presence))
}

/// Update a presence
#[utoipa::path(
    put,
    path = "/presences/{id}",
    tag = "presences",
    params(("id" = i32, Path, description = "Presence ID")),
    request_body = UpdatePresence,
    responses(
        (status = 200, description = "Presence updated", body = Presence),
        (status = 404, description = "Presence, classroom or user not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_presence(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdatePresence>,
) -> AppResult<Json<Presence>> {
    let presence = state.services.presences.update(id, &data).await?;
    Ok(Json(presence))
}

/// Delete a presence
#[utoipa::path(
    delete,
    path = "/presences/{id}",
    tag = "presences",
    params(("id" = i32, Path, description = "Presence ID")),
    responses(
        (status = 204, description = "Presence deleted"),
        (status = 404, description = "Presence not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_presence(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.presences.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Occupancy of a classroom on a day
#[utoipa::path(
    get,
    path = "/presences/classroom/{id}/occupancy",
    tag = "presences",
    params(
        ("id" = i32, Path, description = "Classroom ID"),
        OccupancyQuery
    ),
    responses(
        (status = 200, description = "Occupancy snapshot", body = OccupancySnapshot),
        (status = 404, description = "Classroom not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_classroom_occupancy(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Query(query): Query<OccupancyQuery>,
) -> AppResult<Json<OccupancySnapshot>> {
    let snapshot = state.services.presences.occupancy(id, &query).await?;
    Ok(Json(snapshot))
}

/// Presence history of a user, newest first
#[utoipa::path(
    get,
    path = "/presences/user/{id}/history",
    tag = "presences",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Presence history", body = Vec<PresenceDetails>),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user_history(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<PresenceDetails>>> {
    let history = state.services.presences.history(id).await?;
    Ok(Json(history))
}
