//! Shared domain types for orbital tracking and risk analytics
//!
//! This module defines the types that flow between the engine layers:
//! - Acquisition: ElementSet (named TLE line pair), SearchHit
//! - Propagation: StateVector, OrbitalElements, TrajectoryPoint
//! - Risk: RiskLevel, RiskRating, OrbitClass, RiskAssessment, SatelliteSummary
//! - Conjunction: ConjunctionReport
//! - Analytics: RiskTrendPoint, SatelliteAnalytics, GlobalStats

mod analytics;
mod conjunction;
mod element_set;
mod risk;
mod state;

pub use analytics::{GlobalStats, RiskTrendPoint, SatelliteAnalytics};
pub use conjunction::ConjunctionReport;
pub use element_set::{ElementSet, SearchHit};
pub use risk::{OrbitClass, RiskAssessment, RiskLevel, RiskRating, SatelliteSummary};
pub use state::{OrbitalElements, StateVector, TrajectoryPoint, EARTH_RADIUS_KM, MU_EARTH_KM3_S2};
