//! API handlers for campus presence REST endpoints

pub mod analytics;
pub mod health;
pub mod openapi;
pub mod presences;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
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
        // Presences
        .route(
            "/presences",
            post(presences::create_presence).get(presences::list_presences),
        )
        .route(
            "/presences/:id",
            get(presences::get_presence)
                .put(presences::update_presence)
                .delete(presences::delete_presence),
        )
        .route(
            "/presences/classroom/:id/occupancy",
            get(presences::get_classroom_occupancy),
        )
        .route("/presences/user/:id/history", get(presences::get_user_history))
        // Analytics
        .route("/presences/analytics/overview", get(analytics::get_overview))
        .route(
            "/presences/analytics/classroom/:id/trends",
            get(analytics::get_classroom_trends),
        )
        .route("/presences/analytics/real-time", get(analytics::get_real_time))
        .route("/presences/analytics/peak-times", get(analytics::get_peak_times))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
