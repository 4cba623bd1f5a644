//! Heuristic risk scoring.
//!
//! Real conjunction screening works from CDMs; this scorer is a coarse
//! stand-in that reads risk off the orbit geometry itself. Two terms are
//! deterministic (crowded LEO shell, polar inclination band) and one is a
//! simulated solar-flux draw, so repeated calls for the same object can
//! differ by the flux contribution alone.

use rand::Rng;

use crate::propagation::Satellite;
use crate::types::{RiskAssessment, RiskLevel};

// ============================================================================
// Scoring constants
// ============================================================================

/// Mean motion (rev/day) above which an orbit sits in the crowded LEO
/// shells. 11.25 rev/day corresponds to a period of 128 minutes.
pub const CROWDED_LEO_MEAN_MOTION: f64 = 11.25;

/// Points contributed by the crowded-LEO term.
const CROWDED_LEO_POINTS: u8 = 40;

/// Inclination band (degrees, exclusive) treated as polar. Polar orbits
/// cross most other orbital planes twice per revolution.
const POLAR_INCLINATION_MIN_DEG: f64 = 80.0;
const POLAR_INCLINATION_MAX_DEG: f64 = 100.0;

/// Points contributed by the polar-orbit term.
const POLAR_ORBIT_POINTS: u8 = 30;

/// Simulated solar flux is drawn uniformly from `0..SOLAR_FLUX_CEILING`
/// and contributes its own value when it exceeds [`SOLAR_FLUX_THRESHOLD`].
const SOLAR_FLUX_CEILING: u8 = 20;
const SOLAR_FLUX_THRESHOLD: u8 = 10;

/// Scores saturate here.
const SCORE_CAP: u8 = 100;

// ============================================================================
// Scoring
// ============================================================================

/// Scores a satellite using a thread-local RNG for the flux term.
pub fn score(satellite: &Satellite) -> RiskAssessment {
    score_with_rng(satellite, &mut rand::thread_rng())
}

/// Scores a satellite with a caller-supplied RNG.
///
/// The deterministic terms depend only on the element set, so two calls
/// with identically seeded RNGs produce identical assessments.
pub fn score_with_rng<R: Rng>(satellite: &Satellite, rng: &mut R) -> RiskAssessment {
    let mut score: u8 = 0;
    let mut factors = Vec::new();

    if satellite.mean_motion() > CROWDED_LEO_MEAN_MOTION {
        score = score.saturating_add(CROWDED_LEO_POINTS);
        factors.push("Orbit inside crowded LEO zone".to_string());
    }

    let inclination = satellite.inclination_deg();
    if inclination > POLAR_INCLINATION_MIN_DEG && inclination < POLAR_INCLINATION_MAX_DEG {
        score = score.saturating_add(POLAR_ORBIT_POINTS);
        factors.push("Polar orbit (high intersection probability)".to_string());
    }

    let solar_flux = rng.gen_range(0..SOLAR_FLUX_CEILING);
    if solar_flux > SOLAR_FLUX_THRESHOLD {
        score = score.saturating_add(solar_flux);
        factors.push("High Solar Flux (Increased Atmospheric Drag)".to_string());
    }

    let score = score.min(SCORE_CAP);

    RiskAssessment {
        norad_id: satellite.norad_id().to_string(),
        risk_score: score,
        level: RiskLevel::from_score(score),
        factors,
    }
}

// ============================================================================
// Tests
// ============================================================================
