//! Per-object detail summaries.
//!
//! Builds the full operator-facing record for one tracked object: the
//! propagated state at the requested instant, derived orbital elements and
//! apsides, a geometry-based risk rating, and simulated congestion fields
//! (collision probability plus an optional close-approach alert).

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::propagation::{sub_satellite_point, PropagationError, Satellite};
use crate::types::{OrbitClass, RiskRating, SatelliteSummary};

/// Altitude band (km, exclusive) of the crowded Starlink shell.
const STARLINK_SHELL_KM: (f64, f64) = (400.0, 600.0);

/// Altitude band (km, exclusive) of the Iridium/Cosmos debris belt.
const DEBRIS_BELT_KM: (f64, f64) = (750.0, 850.0);

/// Collision probabilities saturate here (percent).
const COLLISION_PROBABILITY_CAP: f64 = 99.9;

/// Probability above which a close-approach alert is attached.
const CLOSE_APPROACH_ALERT_THRESHOLD: f64 = 1.0;

/// Builds a detail summary using a thread-local RNG for the simulated
/// congestion fields.
pub fn detail_summary(
    satellite: &Satellite,
    at: DateTime<Utc>,
) -> Result<SatelliteSummary, PropagationError> {
    detail_summary_with_rng(satellite, at, &mut rand::thread_rng())
}

/// Builds a detail summary with a caller-supplied RNG.
///
/// Every physical field (altitude, velocity, elements, apsides, ground
/// track) is deterministic for a given element set and instant; only the
/// collision probability and close-approach fields consume the RNG.
pub fn detail_summary_with_rng<R: Rng>(
    satellite: &Satellite,
    at: DateTime<Utc>,
    rng: &mut R,
) -> Result<SatelliteSummary, PropagationError> {
    let state = satellite.state_at(at)?;
    let altitude_km = state.altitude_km();
    let elements = satellite.orbital_elements();

    let risk_level = RiskRating::from_orbit_geometry(altitude_km, elements.inclination_deg);
    let orbit_type = OrbitClass::from_altitude_km(altitude_km);
    let (latitude, longitude) = sub_satellite_point(&state.position, at);

    let mut collision_probability: f64 = 0.0;
    if altitude_km > STARLINK_SHELL_KM.0 && altitude_km < STARLINK_SHELL_KM.1 {
        collision_probability += rng.gen_range(0.5..2.5);
    }
    if altitude_km > DEBRIS_BELT_KM.0 && altitude_km < DEBRIS_BELT_KM.1 {
        collision_probability += rng.gen_range(1.0..3.0);
    }
    if risk_level == RiskRating::High {
        collision_probability += 2.0;
    }
    let collision_probability = round2(collision_probability.min(COLLISION_PROBABILITY_CAP));

    let (close_approach_dist, close_approach_time) =
        if collision_probability > CLOSE_APPROACH_ALERT_THRESHOLD {
            let dist = round2(rng.gen_range(0.5..5.0));
            let event_at = at + Duration::minutes(rng.gen_range(10..1400));
            (Some(dist), Some(event_at.format("%d %b %H:%M").to_string()))
        } else {
            (None, None)
        };

    Ok(SatelliteSummary {
        name: satellite.name().to_string(),
        norad_id: satellite.norad_id().to_string(),
        altitude_km: round1(altitude_km),
        velocity_kms: round2(state.speed_kms()),
        risk_level,
        description: format!("Tracked Object {}", satellite.norad_id()),
        orbit_type,
        period_min: elements.period_min,
        inclination_deg: elements.inclination_deg,
        apogee_km: round1(satellite.apogee_km()),
        perigee_km: round1(satellite.perigee_km()),
        collision_probability,
        close_approach_dist,
        close_approach_time,
        latitude: Some(round2(latitude)),
        longitude: Some(round2(longitude)),
        data_source: "CelesTrak/NORAD".to_string(),
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Tests
// ============================================================================
