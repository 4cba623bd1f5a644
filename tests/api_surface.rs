//! API Surface Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! every endpoint with `tower::ServiceExt::oneshot()`. The provider is a
//! stub that always fails, so acquisition exercises the fallback table and
//! a tempdir-backed disk cache; no network, no port binding.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Datelike, Timelike, Utc};
use tempfile::TempDir;
use tower::ServiceExt;

use orcas::acquisition::{
    AcquisitionService, CacheEntry, ElementSetCache, ElementsProvider, ProviderError, SearchQuery,
};
use orcas::api::{create_app, TrackerState};
use orcas::config::{self, TrackerConfig};
use orcas::types::{ElementSet, SearchHit};

// ============================================================================
// Harness
// ============================================================================

fn ensure_config() {
    if !config::is_initialized() {
        config::init(TrackerConfig::default());
    }
}

struct OfflineProvider;

#[async_trait]
impl ElementsProvider for OfflineProvider {
    async fn fetch_tle(&self, _norad_id: &str) -> Result<ElementSet, ProviderError> {
        Err(ProviderError::Unreachable("offline test provider".into()))
    }

    async fn search(&self, _query: &SearchQuery) -> Result<Vec<SearchHit>, ProviderError> {
        Err(ProviderError::Unreachable("offline test provider".into()))
    }
}

/// App wired to the offline provider, with `sets` preloaded into the disk
/// cache (the tier consulted after the fallback table misses).
fn offline_app(dir: &TempDir, sets: &[ElementSet]) -> axum::Router {
    ensure_config();
    let cache = ElementSetCache::new(dir.path().join("tle_cache.json"));
    if !sets.is_empty() {
        let entries: HashMap<String, CacheEntry> = sets
            .iter()
            .map(|s| (s.norad_id.clone(), CacheEntry::from(s)))
            .collect();
        cache.save(&entries);
    }
    let service = Arc::new(AcquisitionService::new(OfflineProvider, cache));
    create_app(TrackerState::new(service))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

fn tle_checksum(line: &str) -> u32 {
    line.chars()
        .take(68)
        .map(|c| match c {
            '0'..='9' => c.to_digit(10).unwrap_or(0),
            '-' => 1,
            _ => 0,
        })
        .sum::<u32>()
        % 10
}

/// Builds a parseable circular-LEO element set (~420 km, 51.6 deg) with
/// its epoch at `epoch`, so propagation near "now" is always in range.
fn synthetic_element_set(norad_id: u32, epoch: DateTime<Utc>) -> ElementSet {
    let yy = epoch.year() % 100;
    let day_frac =
        f64::from(epoch.ordinal()) + f64::from(epoch.num_seconds_from_midnight()) / 86_400.0;
    let base1 = format!(
        "1 {norad_id:05}U 24001A   {yy:02}{day_frac:012.8}  .00000000  00000-0  00000-0 0  999"
    );
    let base2 =
        format!("2 {norad_id:05}  51.6000 100.0000 0001000  90.0000 270.0000 15.49500000    1");
    let line1 = format!("{base1}{}", tle_checksum(&base1));
    let line2 = format!("{base2}{}", tle_checksum(&base2));
    ElementSet::new(&norad_id.to_string(), "TESTSAT", &line1, &line2)
}

// ============================================================================
// Read-only endpoints
// ============================================================================

/// Endpoints that need no element-set acquisition always return 200.
#[tokio::test]
async fn test_static_get_endpoints_return_200() {
    let endpoints = ["/", "/api/health", "/api/satellites", "/api/stats"];

    for endpoint in &endpoints {
        let dir = tempfile::tempdir().unwrap();
        let (status, _) = get_json(offline_app(&dir, &[]), endpoint).await;
        assert_eq!(status, StatusCode::OK, "GET {endpoint} returned {status}");
    }
}

#[tokio::test]
async fn test_health_contract() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(offline_app(&dir, &[]), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["status"], "ok");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
    let ts = v["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok());
}

#[tokio::test]
async fn test_dashboard_list_contract() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(offline_app(&dir, &[]), "/api/satellites").await;

    assert_eq!(status, StatusCode::OK);
    let list = v.as_array().unwrap();
    assert_eq!(list.len(), 6);

    let iss = &list[0];
    assert_eq!(iss["name"], "ISS (ZARYA)");
    assert_eq!(iss["norad_id"], "25544");
    assert_eq!(iss["risk_level"], "Safe");
    assert_eq!(iss["orbit_type"], "LEO");
    assert_eq!(iss["collision_probability"], 1.2);
    assert_eq!(iss["close_approach_dist"], 3.5);
    assert!(iss["latitude"].is_null());

    // Entries without an alert carry nulls, not missing keys.
    let sentinel = &list[3];
    assert_eq!(sentinel["collision_probability"], 0.0);
    assert!(sentinel["close_approach_dist"].is_null());
    assert!(sentinel["close_approach_time"].is_null());
}

#[tokio::test]
async fn test_stats_contract() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(offline_app(&dir, &[]), "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["total_tracked"], 27_432);
    assert_eq!(v["high_risk_count"], 142);
    assert_eq!(v["conjunctions_24h"], 854);
    assert_eq!(v["system_health"], "Optimal");
    let ts = v["last_update"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok());
}

// ============================================================================
// Acquisition-backed endpoints (offline: fallback table + cache tiers)
// ============================================================================

#[tokio::test]
async fn test_satellite_record_served_from_fallback_table() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(offline_app(&dir, &[]), "/api/satellite/25544").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["norad_id"], "25544");
    assert_eq!(v["name"], "ISS (ZARYA)");
    let expected = orcas::acquisition::fallback::lookup("25544").unwrap();
    assert_eq!(v["tle_line1"], expected.line1);
    assert_eq!(v["tle_line2"], expected.line2);
}

#[tokio::test]
async fn test_unknown_satellite_returns_404_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(offline_app(&dir, &[]), "/api/satellite/4").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["error"]["code"], "NOT_FOUND");
    assert_eq!(v["error"]["message"], "Satellite not found or TLE unavailable");
}

#[tokio::test]
async fn test_details_served_from_cached_element_set() {
    let dir = tempfile::tempdir().unwrap();
    let set = synthetic_element_set(90210, Utc::now());
    let (status, v) = get_json(
        offline_app(&dir, &[set]),
        "/api/satellite/90210/details",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["name"], "TESTSAT");
    assert_eq!(v["norad_id"], "90210");
    assert_eq!(v["description"], "Tracked Object 90210");
    assert_eq!(v["data_source"], "CelesTrak/NORAD");
    assert_eq!(v["orbit_type"], "LEO");
    assert_eq!(v["risk_level"], "Safe");

    let altitude = v["altitude_km"].as_f64().unwrap();
    assert!((350.0..500.0).contains(&altitude), "altitude {altitude}");
    let velocity = v["velocity_kms"].as_f64().unwrap();
    assert!((7.4..7.8).contains(&velocity), "velocity {velocity}");
    let period = v["period_min"].as_f64().unwrap();
    assert!((85.0..100.0).contains(&period), "period {period}");

    let lat = v["latitude"].as_f64().unwrap();
    assert!((-90.0..=90.0).contains(&lat));
    let lon = v["longitude"].as_f64().unwrap();
    assert!((-180.0..180.0).contains(&lon));

    // ~420 km sits inside the crowded shell, so a probability is drawn.
    let prob = v["collision_probability"].as_f64().unwrap();
    assert!((0.5..=2.5).contains(&prob), "probability {prob}");
    let alerted = prob > 1.0;
    assert_eq!(!v["close_approach_dist"].is_null(), alerted);
    assert_eq!(!v["close_approach_time"].is_null(), alerted);
}

#[tokio::test]
async fn test_propagate_contract() {
    let dir = tempfile::tempdir().unwrap();
    let set = synthetic_element_set(90210, Utc::now());
    let (status, v) = get_json(
        offline_app(&dir, &[set]),
        "/api/propagate/90210?minutes=90&steps=10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["norad_id"], "90210");
    assert_eq!(v["name"], "TESTSAT");

    let trajectory = v["trajectory"].as_array().unwrap();
    assert_eq!(trajectory.len(), 10);
    for point in trajectory {
        let lat = point["lat"].as_f64().unwrap();
        assert!((-90.0..=90.0).contains(&lat));
        let lon = point["lon"].as_f64().unwrap();
        assert!((-180.0..180.0).contains(&lon));
        assert!(point["x"].is_number());
        assert!(point["time"].is_string());
    }

    let times: Vec<DateTime<chrono::FixedOffset>> = trajectory
        .iter()
        .map(|p| DateTime::parse_from_rfc3339(p["time"].as_str().unwrap()).unwrap())
        .collect();
    for pair in times.windows(2) {
        assert!(pair[0] < pair[1], "samples out of order: {pair:?}");
    }
}

#[tokio::test]
async fn test_risk_contract_for_fallback_object() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(offline_app(&dir, &[]), "/api/risk/25544").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["norad_id"], "25544");
    assert_eq!(v["factors"][0], "Orbit inside crowded LEO zone");

    let score = v["risk_score"].as_u64().unwrap();
    assert!(score == 40 || (51..=59).contains(&score), "score {score}");
    if score == 40 {
        assert_eq!(v["level"], "LOW");
    } else {
        assert_eq!(v["level"], "MEDIUM");
    }
}

#[tokio::test]
async fn test_conjunction_of_identical_orbits_is_high() {
    let dir = tempfile::tempdir().unwrap();
    let now = Utc::now();
    let sets = [
        synthetic_element_set(90210, now),
        synthetic_element_set(90211, now),
    ];
    let (status, v) = get_json(
        offline_app(&dir, &sets),
        "/api/conjunction?id1=90210&id2=90211&window_minutes=10&step_seconds=60",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["sat1_id"], "90210");
    assert_eq!(v["sat2_id"], "90211");
    assert_eq!(v["risk_level"], "HIGH");
    let dist = v["min_distance_km"].as_f64().unwrap();
    assert!(dist < 1.0, "identical orbits separated by {dist} km");
    let ts = v["time_of_closest_approach"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok());
}

#[tokio::test]
async fn test_conjunction_with_missing_object_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(
        offline_app(&dir, &[]),
        "/api/conjunction?id1=25544&id2=4",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["error"]["message"], "One or both satellites not found");
}

#[tokio::test]
async fn test_conjunction_window_override_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let now = Utc::now();
    let sets = [
        synthetic_element_set(90210, now),
        synthetic_element_set(90211, now),
    ];
    // The handler caps the window at one day before sampling, so even the
    // largest representable window answers promptly.
    let (status, v) = get_json(
        offline_app(&dir, &sets),
        "/api/conjunction?id1=90210&id2=90211&window_minutes=4294967295&step_seconds=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["sat1_id"], "90210");
    assert_eq!(v["risk_level"], "HIGH");
    let ts = v["time_of_closest_approach"].as_str().unwrap();
    let tca = DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc);
    assert!(tca - now <= chrono::Duration::days(1), "approach at {tca}");
}

// ============================================================================
// Analytics and search
// ============================================================================

#[tokio::test]
async fn test_analytics_is_deterministic_per_object() {
    let dir = tempfile::tempdir().unwrap();
    let (status, first) = get_json(offline_app(&dir, &[]), "/api/analytics/25544?days=5").await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = get_json(offline_app(&dir, &[]), "/api/analytics/25544?days=5").await;

    assert_eq!(first, second);
    assert_eq!(first["norad_id"], "25544");
    assert_eq!(first["trend_data"].as_array().unwrap().len(), 5);
    for point in first["trend_data"].as_array().unwrap() {
        let score = point["risk_score"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&score));
    }
}

#[tokio::test]
async fn test_search_degrades_to_empty_when_offline() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(offline_app(&dir, &[]), "/api/search?q=ISS").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v.as_array().unwrap().len(), 0);
}
