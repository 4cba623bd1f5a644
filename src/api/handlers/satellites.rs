//! Satellite catalog endpoints: dashboard list, element-set record, detail
//! summary

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::api::envelope::ApiError;
use crate::propagation::Satellite;
use crate::risk;
use crate::types::{OrbitClass, RiskRating, SatelliteSummary};

use super::TrackerState;

// ============================================================================
// Dashboard List
// ============================================================================

/// GET /api/satellites - Curated list for the main dashboard
pub async fn get_satellites() -> Json<Vec<SatelliteSummary>> {
    Json(dashboard_data())
}

/// Showcase objects with hand-picked summary values. Live numbers for
/// these come from the per-object detail endpoint instead.
fn dashboard_data() -> Vec<SatelliteSummary> {
    vec![
        SatelliteSummary {
            name: "ISS (ZARYA)".to_string(),
            norad_id: "25544".to_string(),
            altitude_km: 418.5,
            velocity_kms: 7.66,
            risk_level: RiskRating::Safe,
            description: "International Space Station. Manned laboratory in LEO.".to_string(),
            orbit_type: OrbitClass::Leo,
            period_min: 92.68,
            inclination_deg: 51.64,
            apogee_km: 422.0,
            perigee_km: 415.0,
            collision_probability: 1.2,
            close_approach_dist: Some(3.5),
            close_approach_time: Some("Today, 14:30".to_string()),
            latitude: None,
            longitude: None,
            data_source: "NASA".to_string(),
        },
        SatelliteSummary {
            name: "HST (HUBBLE)".to_string(),
            norad_id: "20580".to_string(),
            altitude_km: 535.2,
            velocity_kms: 7.59,
            risk_level: RiskRating::Low,
            description: "Hubble Space Telescope. Deep space observation.".to_string(),
            orbit_type: OrbitClass::Leo,
            period_min: 95.42,
            inclination_deg: 28.47,
            apogee_km: 537.0,
            perigee_km: 533.4,
            collision_probability: 0.4,
            close_approach_dist: None,
            close_approach_time: None,
            latitude: None,
            longitude: None,
            data_source: "NASA/ESA".to_string(),
        },
        SatelliteSummary {
            name: "STARLINK-30159".to_string(),
            norad_id: "54231".to_string(),
            altitude_km: 550.1,
            velocity_kms: 7.50,
            risk_level: RiskRating::Medium,
            description: "Starlink Gen2. High density constellation member.".to_string(),
            orbit_type: OrbitClass::Leo,
            period_min: 95.8,
            inclination_deg: 53.2,
            apogee_km: 555.0,
            perigee_km: 545.0,
            collision_probability: 2.8,
            close_approach_dist: Some(0.8),
            close_approach_time: Some("Today, 19:45".to_string()),
            latitude: None,
            longitude: None,
            data_source: "SpaceX".to_string(),
        },
        SatelliteSummary {
            name: "SENTINEL-1A".to_string(),
            norad_id: "39634".to_string(),
            altitude_km: 693.0,
            velocity_kms: 7.50,
            risk_level: RiskRating::Safe,
            description: "ESA Earth Observation Satellite. SAR Radar imaging.".to_string(),
            orbit_type: OrbitClass::Leo,
            period_min: 98.7,
            inclination_deg: 98.1,
            apogee_km: 695.0,
            perigee_km: 691.0,
            collision_probability: 0.0,
            close_approach_dist: None,
            close_approach_time: None,
            latitude: None,
            longitude: None,
            data_source: "ESA".to_string(),
        },
        SatelliteSummary {
            name: "NOAA 19".to_string(),
            norad_id: "33591".to_string(),
            altitude_km: 850.5,
            velocity_kms: 7.42,
            risk_level: RiskRating::Low,
            description: "Weather satellite in sun-synchronous orbit.".to_string(),
            orbit_type: OrbitClass::Leo,
            period_min: 102.1,
            inclination_deg: 98.7,
            apogee_km: 866.0,
            perigee_km: 846.0,
            collision_probability: 0.0,
            close_approach_dist: None,
            close_approach_time: None,
            latitude: None,
            longitude: None,
            data_source: "NOAA".to_string(),
        },
        SatelliteSummary {
            name: "GOES 16".to_string(),
            norad_id: "41866".to_string(),
            altitude_km: 35786.0,
            velocity_kms: 3.07,
            risk_level: RiskRating::Safe,
            description: "Geostationary Operational Environmental Satellite.".to_string(),
            orbit_type: OrbitClass::Geo,
            period_min: 1436.1,
            inclination_deg: 0.04,
            apogee_km: 35790.0,
            perigee_km: 35780.0,
            collision_probability: 0.0,
            close_approach_dist: None,
            close_approach_time: None,
            latitude: None,
            longitude: None,
            data_source: "NOAA/NASA".to_string(),
        },
    ]
}

// ============================================================================
// Per-Object Endpoints
// ============================================================================

/// Raw element-set record for one object
#[derive(Debug, Serialize)]
pub struct SatelliteRecord {
    pub norad_id: String,
    pub name: String,
    pub tle_line1: String,
    pub tle_line2: String,
}

/// GET /api/satellite/:norad_id - Element-set record as acquired
pub async fn get_satellite(
    State(state): State<TrackerState>,
    Path(norad_id): Path<String>,
) -> Result<Json<SatelliteRecord>, ApiError> {
    let set = state
        .service
        .acquire(&norad_id)
        .await
        .map_err(|_| ApiError::not_found("Satellite not found or TLE unavailable"))?;

    Ok(Json(SatelliteRecord {
        norad_id,
        name: set.name,
        tle_line1: set.line1,
        tle_line2: set.line2,
    }))
}

/// GET /api/satellite/:norad_id/details - Live detail summary, propagated
/// to now
pub async fn get_satellite_details(
    State(state): State<TrackerState>,
    Path(norad_id): Path<String>,
) -> Result<Json<SatelliteSummary>, ApiError> {
    let set = state
        .service
        .acquire(&norad_id)
        .await
        .map_err(|_| ApiError::not_found("Satellite not found"))?;
    let satellite = Satellite::from_element_set(&set)?;
    let summary = risk::detail_summary(&satellite, Utc::now())?;
    Ok(Json(summary))
}
