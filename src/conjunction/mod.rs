//! Time-stepped conjunction screening
//!
//! Propagates two objects across a forward window on a fixed sampling
//! grid and reports the minimum separation. This is a screening tool: it
//! samples, it does not solve for the true minimum between samples.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::debug;

use crate::propagation::Satellite;
use crate::types::{ConjunctionReport, RiskLevel};

/// Separation below this bands HIGH (km).
const HIGH_RISK_SEPARATION_KM: f64 = 100.0;

/// Separation below this bands MEDIUM (km).
const MEDIUM_RISK_SEPARATION_KM: f64 = 1000.0;

#[derive(Debug, Error)]
pub enum ConjunctionError {
    /// Every instant in the window failed to propagate for at least one
    /// of the two objects.
    #[error("no valid samples in the search window")]
    NoValidSamples,
}

/// Band a separation distance. Screening bands are deliberately wide.
pub fn classify_separation(distance_km: f64) -> RiskLevel {
    if distance_km < HIGH_RISK_SEPARATION_KM {
        RiskLevel::High
    } else if distance_km < MEDIUM_RISK_SEPARATION_KM {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Find the closest approach between two objects.
///
/// Samples every `step_seconds` from `start` across `window_minutes`,
/// first instant at `start` itself. Instants where either object fails to
/// propagate are skipped; ties keep the earliest instant. Errors only
/// when no instant in the window was valid for both objects.
pub fn closest_approach(
    sat1: &Satellite,
    sat2: &Satellite,
    start: DateTime<Utc>,
    window_minutes: u32,
    step_seconds: u32,
) -> Result<ConjunctionReport, ConjunctionError> {
    let step = u64::from(step_seconds.max(1));
    let samples = u64::from(window_minutes) * 60 / step;

    let mut min_distance = f64::INFINITY;
    let mut closest_at: Option<DateTime<Utc>> = None;
    let mut skipped = 0u64;

    for i in 0..samples {
        let at = start + Duration::seconds((i * step) as i64);
        let (Ok(s1), Ok(s2)) = (sat1.state_at(at), sat2.state_at(at)) else {
            skipped += 1;
            continue;
        };
        let distance = (s1.position - s2.position).norm();
        if distance < min_distance {
            min_distance = distance;
            closest_at = Some(at);
        }
    }

    if skipped > 0 {
        debug!(
            skipped,
            samples, "Conjunction sweep skipped unpropagatable instants"
        );
    }

    let time_of_closest_approach = closest_at.ok_or(ConjunctionError::NoValidSamples)?;

    Ok(ConjunctionReport {
        sat1_id: sat1.norad_id().to_string(),
        sat2_id: sat2.norad_id().to_string(),
        min_distance_km: round2(min_distance),
        time_of_closest_approach,
        risk_level: classify_separation(min_distance),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
