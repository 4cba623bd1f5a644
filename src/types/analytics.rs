//! Trend history and fleet-wide statistics records

use serde::Serialize;

/// One day of synthesized risk history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RiskTrendPoint {
    /// Calendar day label, `YYYY-MM-DD`
    pub timestamp: String,
    pub risk_score: f64,
}

/// Per-object trend with headline aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct SatelliteAnalytics {
    pub norad_id: String,
    /// Oldest to newest, ending on the current day
    pub trend_data: Vec<RiskTrendPoint>,
    pub forecast_summary: String,
    pub avg_altitude: f64,
    /// 100 minus five times the trend's standard deviation, floored at 0
    pub stability_index: f64,
}

/// Fleet-wide aggregates for the stats endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GlobalStats {
    pub total_tracked: u32,
    pub high_risk_count: u32,
    pub conjunctions_24h: u32,
    pub system_health: String,
    /// RFC 3339 timestamp of this snapshot
    pub last_update: String,
}
