//! Trajectory propagation endpoint

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiError;
use crate::propagation::{self, Satellite};
use crate::types::TrajectoryPoint;

use super::TrackerState;

/// Ceiling on requested sample counts; protects the propagation loop from
/// absurd query values.
const MAX_TRAJECTORY_STEPS: u32 = 10_000;

/// Trajectory query parameters
#[derive(Debug, Deserialize)]
pub struct TrajectoryQuery {
    /// Projection window in minutes (default: 90)
    #[serde(default)]
    pub minutes: Option<u32>,
    /// Number of samples across the window (default: 100)
    #[serde(default)]
    pub steps: Option<u32>,
}

/// Projected ground track response
#[derive(Debug, Serialize)]
pub struct TrajectoryResponse {
    pub trajectory: Vec<TrajectoryPoint>,
    pub norad_id: String,
    pub name: String,
}

/// GET /api/propagate/:norad_id - Project the orbit forward from now
pub async fn propagate_orbit(
    State(state): State<TrackerState>,
    Path(norad_id): Path<String>,
    Query(query): Query<TrajectoryQuery>,
) -> Result<Json<TrajectoryResponse>, ApiError> {
    let minutes = query.minutes.unwrap_or(90);
    let steps = query.steps.unwrap_or(100).min(MAX_TRAJECTORY_STEPS);

    let set = state
        .service
        .acquire(&norad_id)
        .await
        .map_err(|_| ApiError::not_found("Satellite data not found"))?;
    let satellite = Satellite::from_element_set(&set)?;
    let trajectory = propagation::trajectory(&satellite, Utc::now(), minutes, steps);

    Ok(Json(TrajectoryResponse {
        trajectory,
        norad_id,
        name: set.name,
    }))
}
