//! REST API module using Axum
//!
//! Thin HTTP read surface over the tracking engine:
//! - /api endpoints for catalog, propagation, risk, and analytics data
//! - root banner for uptime checks
//! - tracing, compression, and permissive CORS as tower layers

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::TrackerState;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the complete application router.
///
/// CORS is wide open: the dashboard is served from a different origin and
/// every endpoint is a read-only projection.
pub fn create_app(state: TrackerState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes(state))
        .merge(routes::root_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
