//! ORCAS: Orbital Risk & Conjunction Analytics System
//!
//! Tracks orbiting objects and produces risk indicators for collision and
//! debris concerns.
//!
//! ## Architecture
//!
//! - **Acquisition**: multi-tier element-set pipeline (provider with
//!   retry/backoff, built-in fallback table, disk cache)
//! - **Propagation**: SGP4 adapter producing state vectors, derived
//!   elements, and ground tracks
//! - **Conjunction**: time-stepped minimum-separation screening between
//!   two objects
//! - **Risk / Analytics**: heuristic scoring, detail summaries, and
//!   synthesized trend history
//! - **API**: thin axum read surface over the engine

pub mod acquisition;
pub mod analytics;
pub mod api;
pub mod config;
pub mod conjunction;
pub mod propagation;
pub mod risk;
pub mod types;

// Re-export tracker configuration
pub use config::TrackerConfig;

// Re-export commonly used types
pub use types::{
    ConjunctionReport, ElementSet, GlobalStats, OrbitClass, RiskAssessment, RiskLevel,
    RiskRating, SatelliteAnalytics, SatelliteSummary, SearchHit, StateVector, TrajectoryPoint,
};

// Re-export the engine entry points
pub use acquisition::{AcquireError, AcquisitionService, CelesTrakClient, ElementSetCache};
pub use propagation::Satellite;
