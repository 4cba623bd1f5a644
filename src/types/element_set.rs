//! Element set records: the unit of acquisition
//!
//! An element set is a named pair of TLE lines keyed by the NORAD catalog
//! identifier it was requested under. The acquisition layer treats the
//! lines as opaque text (line count is the only structural check); parsing
//! into an SGP4 model happens in the propagation layer.

use serde::{Deserialize, Serialize};

// ============================================================================
// Element Set
// ============================================================================

/// A two-line element set with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSet {
    /// NORAD catalog identifier the set was requested under (decimal string)
    pub norad_id: String,
    /// Object name as reported by the provider
    pub name: String,
    /// TLE line 1
    pub line1: String,
    /// TLE line 2
    pub line2: String,
}

impl ElementSet {
    pub fn new(norad_id: &str, name: &str, line1: &str, line2: &str) -> Self {
        Self {
            norad_id: norad_id.to_string(),
            name: name.to_string(),
            line1: line1.to_string(),
            line2: line2.to_string(),
        }
    }
}

impl std::fmt::Display for ElementSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.norad_id)
    }
}

// ============================================================================
// Catalog Search
// ============================================================================

/// One catalog search hit, projected from the provider's GP JSON rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    pub name: String,
    pub norad_id: u64,
    #[serde(rename = "type")]
    pub object_type: String,
}
