//! API route definitions
//!
//! Read-only surface over the tracking engine:
//! - /api/health - liveness probe
//! - /api/satellites, /api/satellite/:id, /api/satellite/:id/details
//! - /api/propagate/:id - forward ground track
//! - /api/risk/:id, /api/conjunction - risk scoring and screening
//! - /api/search - provider catalog search
//! - /api/analytics/:id, /api/stats - trend synthesis and fleet stats

use axum::routing::get;
use axum::Router;

use super::handlers::{self, TrackerState};

/// Create all /api routes
pub fn api_routes(state: TrackerState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        // Catalog
        .route("/satellites", get(handlers::get_satellites))
        .route("/satellite/:norad_id", get(handlers::get_satellite))
        .route(
            "/satellite/:norad_id/details",
            get(handlers::get_satellite_details),
        )
        .route("/search", get(handlers::search_satellites))
        // Orbital mechanics
        .route("/propagate/:norad_id", get(handlers::propagate_orbit))
        .route("/risk/:norad_id", get(handlers::calculate_risk))
        .route("/conjunction", get(handlers::check_conjunction))
        // Analytics
        .route("/analytics/:norad_id", get(handlers::get_analytics))
        .route("/stats", get(handlers::get_global_stats))
        .with_state(state)
}

/// Root banner outside the /api prefix
pub fn root_routes() -> Router {
    Router::new().route("/", get(handlers::get_root))
}
