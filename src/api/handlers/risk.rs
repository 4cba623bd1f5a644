//! Risk scoring and conjunction screening endpoints

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::api::envelope::ApiError;
use crate::propagation::Satellite;
use crate::types::{ConjunctionReport, RiskAssessment};
use crate::{config, conjunction, risk};

use super::TrackerState;

/// Ceiling on the requested search window; together with the one-second
/// step floor this bounds the sweep against absurd query values.
const MAX_CONJUNCTION_WINDOW_MINUTES: u32 = 1_440;

/// GET /api/risk/:norad_id - Heuristic risk assessment
pub async fn calculate_risk(
    State(state): State<TrackerState>,
    Path(norad_id): Path<String>,
) -> Result<Json<RiskAssessment>, ApiError> {
    let set = state
        .service
        .acquire(&norad_id)
        .await
        .map_err(|_| ApiError::not_found("Satellite not found"))?;
    let satellite = Satellite::from_element_set(&set)?;
    Ok(Json(risk::score(&satellite)))
}

/// Conjunction query parameters
#[derive(Debug, Deserialize)]
pub struct ConjunctionQuery {
    pub id1: String,
    pub id2: String,
    /// Forward search window in minutes (default: configured value)
    #[serde(default)]
    pub window_minutes: Option<u32>,
    /// Sampling step in seconds (default: configured value)
    #[serde(default)]
    pub step_seconds: Option<u32>,
}

/// GET /api/conjunction - Minimum separation between two objects over the
/// search window
pub async fn check_conjunction(
    State(state): State<TrackerState>,
    Query(query): Query<ConjunctionQuery>,
) -> Result<Json<ConjunctionReport>, ApiError> {
    let defaults = &config::get().conjunction;
    let window_minutes = query
        .window_minutes
        .unwrap_or(defaults.window_minutes)
        .clamp(1, MAX_CONJUNCTION_WINDOW_MINUTES);
    let step_seconds = query.step_seconds.unwrap_or(defaults.step_seconds).max(1);

    let first = state.service.acquire(&query.id1).await;
    let second = state.service.acquire(&query.id2).await;
    let (Ok(set1), Ok(set2)) = (first, second) else {
        return Err(ApiError::not_found("One or both satellites not found"));
    };

    let sat1 = Satellite::from_element_set(&set1)?;
    let sat2 = Satellite::from_element_set(&set2)?;
    let report =
        conjunction::closest_approach(&sat1, &sat2, Utc::now(), window_minutes, step_seconds)?;
    Ok(Json(report))
}
