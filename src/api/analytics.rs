//! Attendance analytics endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::analytics::{
        AffluenceOverview, OverviewQuery, PeakTimesQuery, PeakTimesReport, RealTimeSnapshot,
        TrendReport, TrendsQuery,
    },
};

/// Affluence overview over a date range
#[utoipa::path(
    get,
    path = "/presences/analytics/overview",
    tag = "analytics",
    params(OverviewQuery),
    responses(
        (status = 200, description = "Affluence overview", body = AffluenceOverview),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_overview(
    State(state): State<crate::AppState>,
    Query(query): Query<OverviewQuery>,
) -> AppResult<Json<AffluenceOverview>> {
    let overview = state.services.analytics.overview(&query).await?;
    Ok(Json(overview))
}

/// Daily trend and peak hours of a classroom
#[utoipa::path(
    get,
    path = "/presences/analytics/classroom/{id}/trends",
    tag = "analytics",
    params(
        ("id" = i32, Path, description = "Classroom ID"),
        TrendsQuery
    ),
    responses(
        (status = 200, description = "Classroom trends", body = TrendReport),
        (status = 400, description = "Invalid window", body = crate::error::ErrorResponse),
        (status = 404, description = "Classroom not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_classroom_trends(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Query(query): Query<TrendsQuery>,
) -> AppResult<Json<TrendReport>> {
    let report = state.services.analytics.classroom_trends(id, &query).await?;
    Ok(Json(report))
}

/// Today's occupancy across all classrooms
#[utoipa::path(
    get,
    path = "/presences/analytics/real-time",
    tag = "analytics",
    responses(
        (status = 200, description = "Real-time snapshot", body = RealTimeSnapshot)
    )
)]
pub async fn get_real_time(State(state): State<crate::AppState>) -> AppResult<Json<RealTimeSnapshot>> {
    let snapshot = state.services.analytics.real_time().await?;
    Ok(Json(snapshot))
}

/// Attendance per hour-of-day
#[utoipa::path(
    get,
    path = "/presences/analytics/peak-times",
    tag = "analytics",
    params(PeakTimesQuery),
    responses(
        (status = 200, description = "Peak times", body = PeakTimesReport),
        (status = 400, description = "Invalid window", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_peak_times(
    State(state): State<crate::AppState>,
    Query(query): Query<PeakTimesQuery>,
) -> AppResult<Json<PeakTimesReport>> {
    let report = state.services.analytics.peak_times(&query).await?;
    Ok(Json(report))
}
