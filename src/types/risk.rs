//! Risk classification types shared by the scorer, the conjunction
//! screener, and satellite summaries

use serde::{Deserialize, Serialize};

// ============================================================================
// Risk Level (numeric scores and conjunction screening)
// ============================================================================

/// Three-band classification used by the heuristic scorer and the
/// conjunction screener.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Band for an additive risk score.
    ///
    /// Boundaries are inclusive on the lower band: 40 is still `Low`,
    /// 70 is still `Medium`.
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            RiskLevel::High
        } else if score > 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

// ============================================================================
// Dashboard Rating
// ============================================================================

/// Four-step qualitative rating used by satellite summaries.
///
/// Distinct from [`RiskLevel`]: summaries rate instantaneous orbit
/// geometry with `Safe` as the quiet default rather than banding a score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskRating {
    Safe,
    Low,
    Medium,
    High,
}

impl RiskRating {
    /// Rate an orbit from its instantaneous geometry.
    ///
    /// Below 400 km rates `High`. Polar orbits (inclination above 80 deg)
    /// below 1000 km rate `Medium`. Everything else rates `Safe`; `Low`
    /// only appears in curated entries.
    pub fn from_orbit_geometry(altitude_km: f64, inclination_deg: f64) -> Self {
        if altitude_km < 400.0 {
            RiskRating::High
        } else if altitude_km < 1000.0 && inclination_deg > 80.0 {
            RiskRating::Medium
        } else {
            RiskRating::Safe
        }
    }
}

impl std::fmt::Display for RiskRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskRating::Safe => write!(f, "Safe"),
            RiskRating::Low => write!(f, "Low"),
            RiskRating::Medium => write!(f, "Medium"),
            RiskRating::High => write!(f, "High"),
        }
    }
}

// ============================================================================
// Orbit Class
// ============================================================================

/// Coarse orbit regime by geometric altitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrbitClass {
    Leo,
    Meo,
    Geo,
}

impl OrbitClass {
    /// Classify by altitude: LEO up to 2000 km, MEO up to 35000 km,
    /// GEO above that.
    pub fn from_altitude_km(altitude_km: f64) -> Self {
        if altitude_km > 35_000.0 {
            OrbitClass::Geo
        } else if altitude_km > 2_000.0 {
            OrbitClass::Meo
        } else {
            OrbitClass::Leo
        }
    }
}

// ============================================================================
// Assessments and Summaries
// ============================================================================

/// Heuristic risk assessment for one object.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub norad_id: String,
    pub risk_score: u8,
    pub level: RiskLevel,
    pub factors: Vec<String>,
}

/// Dashboard-facing satellite summary.
///
/// Produced live by [`crate::risk::detail_summary`] and statically by the
/// curated dashboard list. Optional fields serialize as `null` when absent.
#[derive(Debug, Clone, Serialize)]
pub struct SatelliteSummary {
    pub name: String,
    pub norad_id: String,
    pub altitude_km: f64,
    pub velocity_kms: f64,
    pub risk_level: RiskRating,
    pub description: String,
    pub orbit_type: OrbitClass,
    pub period_min: f64,
    pub inclination_deg: f64,
    pub apogee_km: f64,
    pub perigee_km: f64,
    /// Simulated congestion severity in percent, not a measured
    /// collision probability
    pub collision_probability: f64,
    /// Simulated close-approach distance (km), present when the
    /// probability crosses the alert threshold
    pub close_approach_dist: Option<f64>,
    pub close_approach_time: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub data_source: String,
}
