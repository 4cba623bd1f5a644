//! Conjunction screening report

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::RiskLevel;

/// Closest approach found between two objects over a search window.
#[derive(Debug, Clone, Serialize)]
pub struct ConjunctionReport {
    pub sat1_id: String,
    pub sat2_id: String,
    /// Minimum separation over the window (km, 2 decimals)
    pub min_distance_km: f64,
    /// Instant of minimum separation
    pub time_of_closest_approach: DateTime<Utc>,
    pub risk_level: RiskLevel,
}
