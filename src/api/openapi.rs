//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{analytics, health, presences};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Life API",
        version = "1.0.0",
        description = "Classroom attendance and occupancy analytics REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Presences
        presences::create_presence,
        presences::list_presences,
        presences::get_presence,
        presences::update_presence,
        presences::delete_presence,
        presences::get_classroom_occupancy,
        presences::get_user_history,
        // Analytics
        analytics::get_overview,
        analytics::get_classroom_trends,
        analytics::get_real_time,
        analytics::get_peak_times,
    ),
    components(
        schemas(
            // Presences
            crate::models::presence::Presence,
            crate::models::presence::PresenceDetails,
            crate::models::presence::CreatePresence,
            crate::models::presence::UpdatePresence,
            crate::models::presence::PresenceQuery,
            crate::models::presence::OccupancyQuery,
            // Analytics
            crate::models::analytics::OccupancySnapshot,
            crate::models::analytics::AffluenceOverview,
            crate::models::analytics::DailyCount,
            crate::models::analytics::ClassroomCount,
            crate::models::analytics::TrendReport,
            crate::models::analytics::DailyTrend,
            crate::models::analytics::HourCount,
            crate::models::analytics::RealTimeSnapshot,
            crate::models::analytics::ClassroomOccupancy,
            crate::models::analytics::PeakTimesReport,
            crate::models::analytics::PeakHour,
            crate::models::analytics::OverviewQuery,
            crate::models::analytics::TrendsQuery,
            crate::models::analytics::PeakTimesQuery,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "presences", description = "Attendance recording and occupancy"),
        (name = "analytics", description = "Affluence, trends and peak times")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
