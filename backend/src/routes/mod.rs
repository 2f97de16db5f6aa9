//! Route definitions for the Weather Tourism Recommender

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Station ranking for a region, month and preference pair
        .route("/recommendations", get(handlers::get_recommendations))
        // Map feed: stations with coordinates and records
        .route("/stations", get(handlers::list_stations))
        // Region codes for the preference form
        .route("/regions", get(handlers::list_regions))
}
