//! Tracker Configuration Module
//!
//! Provides service configuration loaded from TOML files, replacing all
//! hardcoded endpoints, paths, and sweep parameters with tunable values.
//!
//! ## Loading Order
//!
//! 1. `ORCAS_CONFIG` environment variable (path to TOML file)
//! 2. `orcas.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(TrackerConfig::load());
//!
//! // Anywhere in the codebase:
//! let window = config::get().conjunction.window_minutes;
//! ```

mod tracker_config;

pub use tracker_config::*;

use std::sync::OnceLock;

/// Global tracker configuration, initialized once at startup.
static TRACKER_CONFIG: OnceLock<TrackerConfig> = OnceLock::new();

/// Initialize the global tracker configuration.
///
/// Must be called exactly once before any calls to `get()`.
pub fn init(config: TrackerConfig) {
    if TRACKER_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once — ignoring");
    }
}

/// Get a reference to the global tracker configuration.
///
/// Panics if `init()` has not been called. A missing config is a fatal
/// startup error, not a recoverable condition.
pub fn get() -> &'static TrackerConfig {
    TRACKER_CONFIG
        .get()
        .expect("config::get() called before config::init() — this is a startup bug")
}

/// Check whether the config has been initialized.
///
/// Useful for tests and optional config paths.
pub fn is_initialized() -> bool {
    TRACKER_CONFIG.get().is_some()
}
