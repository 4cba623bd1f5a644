//! Trend synthesis and fleet statistics.
//!
//! No position history is persisted yet, so the trend endpoint synthesizes
//! a plausible per-object history instead: the RNG is seeded from the
//! catalog number, which keeps the curve stable across requests for the
//! same object while still varying between objects. Fleet statistics are
//! curated placeholder values until a live aggregation pipeline exists.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::types::{GlobalStats, RiskTrendPoint, SatelliteAnalytics};

/// Day-to-day volatility of the synthesized risk curve (sigma, points).
const DAILY_VOLATILITY_SIGMA: f64 = 5.0;

/// Upward drift applied per day (points).
const DAILY_DRIFT: f64 = 0.5;

/// Seeds repeat past this many distinct catalog numbers.
const SEED_BUCKETS: u64 = 100;

const FORECAST_SUMMARY: &str =
    "The orbital path remains stable with a slight upward trend in local debris density.";

/// Synthesizes a daily risk trend ending on the day of `now`.
///
/// `days` is clamped to at least one sample. Catalog numbers that fail to
/// parse all share the zero seed.
pub fn risk_trend(norad_id: &str, days: i64, now: DateTime<Utc>) -> SatelliteAnalytics {
    let days = days.max(1);
    let seed = norad_id
        .parse::<u64>()
        .map(|n| n % SEED_BUCKETS)
        .unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);
    let volatility =
        Normal::new(0.0, DAILY_VOLATILITY_SIGMA).expect("volatility sigma is positive");

    let base_risk = rng.gen_range(10.0..50.0);

    let mut trend = Vec::with_capacity(days as usize);
    for i in 0..days {
        let day = now - Duration::days(days - 1 - i);
        let variation = volatility.sample(&mut rng);
        let score = (base_risk + variation + i as f64 * DAILY_DRIFT).clamp(0.0, 100.0);
        trend.push(RiskTrendPoint {
            timestamp: day.format("%Y-%m-%d").to_string(),
            risk_score: round2(score),
        });
    }

    let stability = 100.0 - population_stdev(&trend) * 5.0;

    SatelliteAnalytics {
        norad_id: norad_id.to_string(),
        trend_data: trend,
        forecast_summary: FORECAST_SUMMARY.to_string(),
        avg_altitude: round1(rng.gen_range(400.0..800.0)),
        stability_index: round2(stability.max(0.0)),
    }
}

/// Fleet-wide aggregates. Counts are curated placeholders; the timestamp
/// is live.
pub fn global_stats(now: DateTime<Utc>) -> GlobalStats {
    GlobalStats {
        total_tracked: 27_432,
        high_risk_count: 142,
        conjunctions_24h: 854,
        system_health: "Optimal".to_string(),
        last_update: now.to_rfc3339(),
    }
}

fn population_stdev(trend: &[RiskTrendPoint]) -> f64 {
    let n = trend.len() as f64;
    let mean = trend.iter().map(|p| p.risk_score).sum::<f64>() / n;
    let variance = trend
        .iter()
        .map(|p| (p.risk_score - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 15, 13, 14, 15).unwrap()
    }

    #[test]
    fn test_trend_is_stable_across_calls() {
        let a = risk_trend("25544", 7, fixed_now());
        let b = risk_trend("25544", 7, fixed_now());
        assert_eq!(a.trend_data, b.trend_data);
        assert_eq!(a.stability_index, b.stability_index);
        assert_eq!(a.avg_altitude, b.avg_altitude);
    }

    #[test]
    fn test_trend_differs_between_objects() {
        let a = risk_trend("25544", 7, fixed_now());
        let b = risk_trend("20580", 7, fixed_now());
        assert_ne!(a.trend_data, b.trend_data);
    }

    #[test]
    fn test_labels_are_consecutive_days_ending_today() {
        let analytics = risk_trend("25544", 7, fixed_now());
        let labels: Vec<&str> = analytics
            .trend_data
            .iter()
            .map(|p| p.timestamp.as_str())
            .collect();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], "2024-02-09");
        assert_eq!(labels[6], "2024-02-15");
        for pair in analytics.trend_data.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn test_scores_and_aggregates_stay_in_range() {
        for id in ["25544", "33591", "43013", "90001"] {
            let analytics = risk_trend(id, 30, fixed_now());
            for point in &analytics.trend_data {
                assert!((0.0..=100.0).contains(&point.risk_score), "{id}: {point:?}");
            }
            assert!((0.0..=100.0).contains(&analytics.stability_index));
            assert!((400.0..=800.0).contains(&analytics.avg_altitude));
            assert_eq!(analytics.norad_id, id);
            assert_eq!(analytics.forecast_summary, FORECAST_SUMMARY);
        }
    }

    #[test]
    fn test_day_count_is_clamped_to_one() {
        assert_eq!(risk_trend("25544", 0, fixed_now()).trend_data.len(), 1);
        assert_eq!(risk_trend("25544", -5, fixed_now()).trend_data.len(), 1);
        assert_eq!(risk_trend("25544", 14, fixed_now()).trend_data.len(), 14);
    }

    #[test]
    fn test_non_numeric_ids_share_the_zero_seed() {
        let a = risk_trend("STARLINK", 7, fixed_now());
        let b = risk_trend("HUBBLE", 7, fixed_now());
        assert_eq!(a.trend_data, b.trend_data);
        // Seeds wrap modulo the bucket count, so 100 aliases 0.
        let c = risk_trend("100", 7, fixed_now());
        assert_eq!(a.trend_data, c.trend_data);
    }

    #[test]
    fn test_catalog_numbers_a_hundred_apart_share_a_seed() {
        let a = risk_trend("42", 7, fixed_now());
        let b = risk_trend("142", 7, fixed_now());
        assert_eq!(a.trend_data, b.trend_data);
        assert_eq!(a.stability_index, b.stability_index);
        // The id itself is still echoed verbatim.
        assert_eq!(a.norad_id, "42");
        assert_eq!(b.norad_id, "142");
    }

    #[test]
    fn test_global_stats_snapshot() {
        let stats = global_stats(fixed_now());
        assert_eq!(stats.total_tracked, 27_432);
        assert_eq!(stats.high_risk_count, 142);
        assert_eq!(stats.conjunctions_24h, 854);
        assert_eq!(stats.system_health, "Optimal");
        assert_eq!(stats.last_update, "2024-02-15T13:14:15+00:00");
    }
}
