//! SGP4 propagation adapter
//!
//! Wraps a parsed element set together with its initialized SGP4 model.
//! All epoch arithmetic lives here: callers hand in wall-clock instants
//! and get TEME state vectors back, or a typed error when the propagator
//! rejects the elements or the instant (decayed orbits report errors
//! rather than positions).

use chrono::{DateTime, Duration, Timelike, Utc};
use nalgebra::Vector3;
use thiserror::Error;
use tracing::debug;

use crate::types::{
    ElementSet, OrbitalElements, StateVector, TrajectoryPoint, EARTH_RADIUS_KM, MU_EARTH_KM3_S2,
};

/// Propagation failures, split by phase.
#[derive(Debug, Error)]
pub enum PropagationError {
    /// The element lines could not be parsed or initialized as an SGP4
    /// model.
    #[error("element set rejected by propagator: {0}")]
    InvalidElements(String),

    /// The propagator reported an error state at the requested instant.
    #[error("propagation failed at {at}: {detail}")]
    Failed { at: DateTime<Utc>, detail: String },
}

// ============================================================================
// Satellite
// ============================================================================

/// A satellite ready to propagate: parsed elements plus the SGP4 constants
/// initialized from them.
#[derive(Debug, Clone)]
pub struct Satellite {
    name: String,
    norad_id: u64,
    epoch: DateTime<Utc>,
    elements: sgp4::Elements,
    constants: sgp4::Constants,
}

impl Satellite {
    /// Parse an element set and initialize its SGP4 model.
    pub fn from_element_set(set: &ElementSet) -> Result<Self, PropagationError> {
        let tle = format!("{}\n{}", set.line1.trim(), set.line2.trim());
        let parsed = sgp4::parse_2les(&tle)
            .map_err(|e| PropagationError::InvalidElements(format!("{e:?}")))?;
        let elements = parsed
            .into_iter()
            .next()
            .ok_or_else(|| PropagationError::InvalidElements("no element rows".to_string()))?;
        let constants = sgp4::Constants::from_elements(&elements)
            .map_err(|e| PropagationError::InvalidElements(format!("{e:?}")))?;
        let epoch = elements.datetime.and_utc();

        Ok(Self {
            name: set.name.clone(),
            norad_id: elements.norad_id,
            epoch,
            elements,
            constants,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn norad_id(&self) -> u64 {
        self.norad_id
    }

    /// Element epoch as a UTC instant.
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// Mean motion in revolutions per day.
    pub fn mean_motion(&self) -> f64 {
        self.elements.mean_motion
    }

    /// Inclination in degrees.
    pub fn inclination_deg(&self) -> f64 {
        self.elements.inclination
    }

    pub fn eccentricity(&self) -> f64 {
        self.elements.eccentricity
    }

    /// TEME state at a wall-clock instant.
    pub fn state_at(&self, at: DateTime<Utc>) -> Result<StateVector, PropagationError> {
        let minutes = (at - self.epoch).num_milliseconds() as f64 / 60_000.0;
        let prediction = self
            .constants
            .propagate(sgp4::MinutesSinceEpoch(minutes))
            .map_err(|e| PropagationError::Failed {
                at,
                detail: format!("{e:?}"),
            })?;

        Ok(StateVector {
            position: Vector3::new(
                prediction.position[0],
                prediction.position[1],
                prediction.position[2],
            ),
            velocity: Vector3::new(
                prediction.velocity[0],
                prediction.velocity[1],
                prediction.velocity[2],
            ),
        })
    }

    /// Elements at epoch, pre-rounded to reporting precision.
    pub fn orbital_elements(&self) -> OrbitalElements {
        let period_min = 1440.0 / self.elements.mean_motion;
        OrbitalElements {
            period_min: round2(period_min),
            inclination_deg: round2(self.elements.inclination),
            eccentricity: self.elements.eccentricity,
        }
    }

    /// Semi-major axis from the mean motion (km).
    pub fn semi_major_axis_km(&self) -> f64 {
        let n_rad_s = self.elements.mean_motion * std::f64::consts::TAU / 86_400.0;
        (MU_EARTH_KM3_S2 / (n_rad_s * n_rad_s)).cbrt()
    }

    /// Apogee altitude above the mean Earth radius (km).
    pub fn apogee_km(&self) -> f64 {
        self.semi_major_axis_km() * (1.0 + self.elements.eccentricity) - EARTH_RADIUS_KM
    }

    /// Perigee altitude above the mean Earth radius (km).
    pub fn perigee_km(&self) -> f64 {
        self.semi_major_axis_km() * (1.0 - self.elements.eccentricity) - EARTH_RADIUS_KM
    }
}

// ============================================================================
// Ground Track
// ============================================================================

/// Sub-satellite point (latitude, longitude in degrees) for a TEME
/// position at an instant.
///
/// Longitude rotates the inertial frame by a civil-time hour angle
/// (15 deg/hour) instead of true sidereal time. That keeps ground tracks
/// moving plausibly for display but drifts roughly a degree per day; do
/// not use it for geodesy.
pub fn sub_satellite_point(position: &Vector3<f64>, at: DateTime<Utc>) -> (f64, f64) {
    let r = position.norm();
    let lat = (position.z / r).asin().to_degrees();

    let rotation_deg = f64::from(at.hour()) * 15.0 + f64::from(at.minute()) * 0.25;
    let lon_raw = position.y.atan2(position.x).to_degrees() - rotation_deg;
    let lon = (lon_raw + 180.0).rem_euclid(360.0) - 180.0;

    (lat, lon)
}

/// Sample a trajectory from `start`, spanning `minutes` in `steps` equal
/// intervals.
///
/// Instants the propagator rejects are skipped rather than failing the
/// whole sweep, so the result can be shorter than `steps`.
pub fn trajectory(
    sat: &Satellite,
    start: DateTime<Utc>,
    minutes: u32,
    steps: u32,
) -> Vec<TrajectoryPoint> {
    let step_min = f64::from(minutes) / f64::from(steps.max(1));
    let mut points = Vec::with_capacity(steps as usize);

    for i in 0..steps {
        let offset_ms = (f64::from(i) * step_min * 60_000.0).round() as i64;
        let at = start + Duration::milliseconds(offset_ms);
        let state = match sat.state_at(at) {
            Ok(state) => state,
            Err(e) => {
                debug!(norad_id = sat.norad_id(), error = %e, "Skipping trajectory sample");
                continue;
            }
        };
        let (lat, lon) = sub_satellite_point(&state.position, at);
        points.push(TrajectoryPoint {
            x: state.position.x,
            y: state.position.y,
            z: state.position.z,
            lat: round4(lat),
            lon: round4(lon),
            time: at.to_rfc3339(),
        });
    }

    points
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
