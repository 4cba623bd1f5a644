//! Trend analytics and fleet statistics endpoints

use axum::extract::{Path, Query};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::analytics;
use crate::types::{GlobalStats, SatelliteAnalytics};

/// Analytics query parameters
#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    /// Days of history to synthesize (default: 7)
    #[serde(default)]
    pub days: Option<i64>,
}

/// GET /api/analytics/:norad_id - Synthesized daily risk trend
pub async fn get_analytics(
    Path(norad_id): Path<String>,
    Query(query): Query<AnalyticsQuery>,
) -> Json<SatelliteAnalytics> {
    Json(analytics::risk_trend(
        &norad_id,
        query.days.unwrap_or(7),
        Utc::now(),
    ))
}

/// GET /api/stats - Fleet-wide aggregates
pub async fn get_global_stats() -> Json<GlobalStats> {
    Json(analytics::global_stats(Utc::now()))
}
