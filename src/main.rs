//! ORCAS - Orbital Risk & Conjunction Analytics System
//!
//! Tracking server: acquires element sets from the provider (with retry,
//! fallback table, and disk cache), propagates orbits, and serves the
//! risk/conjunction/analytics endpoints for the dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (0.0.0.0:8080, ./data/tle_cache.json)
//! cargo run --release
//!
//! # Point at a config file and raise verbosity
//! cargo run --release -- --config orcas.toml --log-level debug
//! ```
//!
//! # Environment Variables
//!
//! - `ORCAS_CONFIG`: Path to the TOML config (when `--config` is absent)
//! - `RUST_LOG`: Logging filter (overrides `--log-level`)

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use orcas::acquisition::{AcquisitionService, CelesTrakClient, ElementSetCache};
use orcas::api::{create_app, TrackerState};
use orcas::config::{self, TrackerConfig};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "orcas")]
#[command(about = "ORCAS Orbital Risk & Conjunction Analytics System")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to a TOML config file (default: $ORCAS_CONFIG, then ./orcas.toml)
    #[arg(long)]
    config: Option<String>,

    /// Override the element-set cache path
    #[arg(long)]
    cache: Option<String>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_target(false)
        .init();

    // Load configuration, apply CLI overrides, and lock it in
    let mut tracker_config = match &args.config {
        Some(path) => TrackerConfig::load_from_file(std::path::Path::new(path))
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => TrackerConfig::load(),
    };
    if let Some(addr) = args.addr {
        tracker_config.server.addr = addr;
    }
    if let Some(cache) = args.cache {
        tracker_config.acquisition.cache_path = cache;
    }
    tracker_config.validate().context("Invalid configuration")?;
    config::init(tracker_config);
    let cfg = config::get();

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  ORCAS - Orbital Risk & Conjunction Analytics System");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("");

    // Engine wiring: provider -> acquisition service -> HTTP state
    let provider = CelesTrakClient::new(
        &cfg.acquisition.base_url,
        Duration::from_secs(cfg.acquisition.request_timeout_secs),
    );
    let cache = ElementSetCache::new(&cfg.acquisition.cache_path);
    let service = Arc::new(AcquisitionService::new(provider, cache));
    info!(
        provider = %cfg.acquisition.base_url,
        cache = %service.cache_path().display(),
        "✓ Acquisition service ready"
    );

    let app = create_app(TrackerState::new(service));

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("🛑 Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    let listener = tokio::net::TcpListener::bind(&cfg.server.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", cfg.server.addr))?;
    info!("🌐 HTTP server listening on {}", cfg.server.addr);
    info!("");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
            info!("Received shutdown signal");
        })
        .await
        .context("HTTP server error")?;

    info!("✓ ORCAS shutdown complete");
    Ok(())
}
