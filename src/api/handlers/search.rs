//! Catalog search endpoint

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::types::SearchHit;

use super::TrackerState;

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Name fragment, or a catalog number if all digits
    pub q: String,
}

/// GET /api/search - Look up objects at the provider by name or catalog
/// number. Degrades to an empty list when the provider is unavailable.
pub async fn search_satellites(
    State(state): State<TrackerState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<SearchHit>> {
    Json(state.service.search(&params.q).await)
}
