//! On-disk element-set cache
//!
//! A single JSON document mapping catalog ids to their last successfully
//! fetched TLE lines. The whole document is read at the start of each
//! acquisition and rewritten after each network success. Missing or
//! corrupt files degrade to an empty cache; a cache problem must never
//! fail an acquisition.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::ElementSet;

/// One cached element set, keyed externally by catalog id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheEntry {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl CacheEntry {
    pub fn to_element_set(&self, norad_id: &str) -> ElementSet {
        ElementSet::new(norad_id, &self.name, &self.line1, &self.line2)
    }
}

impl From<&ElementSet> for CacheEntry {
    fn from(set: &ElementSet) -> Self {
        Self {
            name: set.name.clone(),
            line1: set.line1.clone(),
            line2: set.line2.clone(),
        }
    }
}

/// Handle to the cache file.
///
/// Holds only the path; every read loads the file fresh, so restarts and
/// concurrent processes see each other's writes.
#[derive(Debug, Clone)]
pub struct ElementSetCache {
    path: PathBuf,
}

impl ElementSetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole cache document. Missing or corrupt files yield an
    /// empty map.
    pub fn load(&self) -> HashMap<String, CacheEntry> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read element-set cache");
                return HashMap::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt element-set cache, treating as empty");
                HashMap::new()
            }
        }
    }

    /// Rewrite the whole cache document. Failures are logged and
    /// swallowed: an acquisition that already succeeded must not fail on
    /// a cache write.
    pub fn save(&self, entries: &HashMap<String, CacheEntry>) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }
        let json = match serde_json::to_vec(entries) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to serialize element-set cache");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "Failed to write element-set cache");
        } else {
            debug!(path = %self.path.display(), entries = entries.len(), "Element-set cache written");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> ElementSet {
        ElementSet::new(
            "25544",
            "ISS (ZARYA)",
            "1 25544U 98067A   24046.55184560  .00016024  00000-0  28919-3 0  9995",
            "2 25544  51.6416 179.3142 0001713  97.0425  83.7431 15.49673964439816",
        )
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ElementSetCache::new(dir.path().join("tle_cache.json"));

        let set = sample_set();
        let mut entries = HashMap::new();
        entries.insert(set.norad_id.clone(), CacheEntry::from(&set));
        cache.save(&entries);

        let loaded = cache.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded["25544"].to_element_set("25544"), set);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ElementSetCache::new(dir.path().join("never_written.json"));
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tle_cache.json");
        fs::write(&path, b"{ not json").unwrap();
        let cache = ElementSetCache::new(&path);
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/tle_cache.json");
        let cache = ElementSetCache::new(&path);

        let set = sample_set();
        let mut entries = HashMap::new();
        entries.insert(set.norad_id.clone(), CacheEntry::from(&set));
        cache.save(&entries);

        assert!(path.exists());
        assert_eq!(cache.load().len(), 1);
    }
}
