//! Risk assessment for tracked objects.
//!
//! Two surfaces live here. The scorer produces a compact heuristic score
//! with the factors that drove it, and the summary builder assembles the
//! full per-object detail record served to operators. Both blend
//! deterministic orbit geometry with simulated environment terms, so
//! callers that need reproducible output inject their own RNG.

mod scorer;
mod summary;

pub use scorer::{score, score_with_rng, CROWDED_LEO_MEAN_MOTION};
pub use summary::{detail_summary, detail_summary_with_rng};
