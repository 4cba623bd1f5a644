//! HTTP request handlers
//!
//! Thin projections over the engine: acquire an element set, hand it to
//! the propagation/risk/conjunction code, marshal the result. No business
//! logic lives here.

mod analytics;
mod risk;
mod satellites;
mod search;
mod status;
mod trajectory;

pub use analytics::*;
pub use risk::*;
pub use satellites::*;
pub use search::*;
pub use status::*;
pub use trajectory::*;

use std::sync::Arc;

use crate::acquisition::AcquisitionService;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct TrackerState {
    /// Element-set acquisition (network, fallback table, disk cache)
    pub service: Arc<AcquisitionService>,
}

impl TrackerState {
    pub fn new(service: Arc<AcquisitionService>) -> Self {
        Self { service }
    }
}
