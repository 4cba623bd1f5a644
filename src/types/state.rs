//! Propagation products: inertial state vectors and derived elements

use nalgebra::Vector3;
use serde::Serialize;

/// Mean Earth radius used for altitude and ground-track math (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geocentric gravitational constant (km^3/s^2).
pub const MU_EARTH_KM3_S2: f64 = 398_600.441_8;

// ============================================================================
// State Vector
// ============================================================================

/// Inertial (TEME) state of an object at one instant.
///
/// Position in kilometers, velocity in kilometers per second, in the frame
/// the propagator emits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl StateVector {
    /// Geometric altitude above the mean Earth radius (km).
    pub fn altitude_km(&self) -> f64 {
        self.position.norm() - EARTH_RADIUS_KM
    }

    /// Magnitude of the inertial velocity (km/s).
    pub fn speed_kms(&self) -> f64 {
        self.velocity.norm()
    }
}

// ============================================================================
// Orbital Elements
// ============================================================================

/// Elements read off an SGP4 model at its epoch.
///
/// Period and inclination are pre-rounded to two decimals, the precision
/// the read surface reports them at.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct OrbitalElements {
    pub period_min: f64,
    pub inclination_deg: f64,
    pub eccentricity: f64,
}

// ============================================================================
// Trajectory
// ============================================================================

/// One sampled instant of a propagated trajectory.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryPoint {
    /// TEME position components (km), unrounded
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Sub-satellite latitude (deg, 4 decimals)
    pub lat: f64,
    /// Sub-satellite longitude (deg, 4 decimals)
    pub lon: f64,
    /// RFC 3339 timestamp of the sample
    pub time: String,
}
