//! Tracker Configuration - endpoints, paths, and sweep parameters as
//! operator-tunable TOML values
//!
//! Each struct implements `Default` with production-ready values, so a
//! deployment with no config file runs with sensible settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a tracker deployment.
///
/// Load with `TrackerConfig::load()` which searches:
/// 1. `$ORCAS_CONFIG` env var
/// 2. `./orcas.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackerConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Element-set acquisition (provider endpoint, cache, timeouts)
    #[serde(default)]
    pub acquisition: AcquisitionConfig,

    /// Conjunction sweep defaults
    #[serde(default)]
    pub conjunction: ConjunctionConfig,
}

impl TrackerConfig {
    /// Load configuration using the standard search order:
    /// 1. `$ORCAS_CONFIG` environment variable
    /// 2. `./orcas.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var("ORCAS_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded tracker config from ORCAS_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from ORCAS_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "ORCAS_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./orcas.toml
        let local = PathBuf::from("orcas.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded tracker config from ./orcas.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./orcas.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No orcas.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for internal consistency.
    ///
    /// Rules:
    /// - Bind address and provider base URL must be non-empty
    /// - Request timeout must be at least one second
    /// - The conjunction window must admit at least one sample
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.server.addr.trim().is_empty() {
            errors.push("server.addr must not be empty".to_string());
        }
        if self.acquisition.base_url.trim().is_empty() {
            errors.push("acquisition.base_url must not be empty".to_string());
        }
        if self.acquisition.request_timeout_secs == 0 {
            errors.push("acquisition.request_timeout_secs must be at least 1".to_string());
        }
        if self.conjunction.step_seconds == 0 {
            errors.push("conjunction.step_seconds must be at least 1".to_string());
        }
        if u64::from(self.conjunction.window_minutes) * 60
            < u64::from(self.conjunction.step_seconds)
        {
            errors.push(format!(
                "conjunction window ({} min) is shorter than one step ({} s)",
                self.conjunction.window_minutes, self.conjunction.step_seconds
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP API
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

fn default_server_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Element-set acquisition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    /// Base URL of the element-set provider (no trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the on-disk element-set cache (JSON)
    #[serde(default = "default_cache_path")]
    pub cache_path: String,

    /// Per-attempt request deadline in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cache_path: default_cache_path(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://celestrak.org/NORAD/elements".to_string()
}

fn default_cache_path() -> String {
    "./data/tle_cache.json".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Conjunction sweep defaults, overridable per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConjunctionConfig {
    /// Forward search window in minutes
    #[serde(default = "default_window_minutes")]
    pub window_minutes: u32,

    /// Sampling interval in seconds
    #[serde(default = "default_step_seconds")]
    pub step_seconds: u32,
}

impl Default for ConjunctionConfig {
    fn default() -> Self {
        Self {
            window_minutes: default_window_minutes(),
            step_seconds: default_step_seconds(),
        }
    }
}

fn default_window_minutes() -> u32 {
    90
}

fn default_step_seconds() -> u32 {
    30
}

// ============================================================================
// Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}
