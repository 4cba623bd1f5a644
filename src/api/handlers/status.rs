//! Service banner and health endpoints

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Root banner response
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}

/// GET / - Platform banner for uptime checks
pub async fn get_root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "ORCAS Orbital Risk Platform Active",
    })
}

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

/// GET /api/health - Liveness probe
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
