//! Acquisition service: retry ladder over provider, fallback table, and
//! disk cache
//!
//! The retry policy is an explicit state machine. [`next_state`] is a pure
//! transition function from (attempt number, failure class) to the next
//! [`FetchState`]; all sleeping and I/O happen in the driver loop of
//! [`AcquisitionService::acquire`]. Only timeouts are retried, and the
//! final timeout falls through without a trailing backoff sleep.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::types::{ElementSet, SearchHit};

use super::cache::{CacheEntry, ElementSetCache};
use super::celestrak::{ElementsProvider, ProviderError, SearchQuery};
use super::fallback;

/// Network attempts per acquisition before falling through to the
/// offline tiers.
const MAX_FETCH_ATTEMPTS: u32 = 3;

// ============================================================================
// Fetch State Machine
// ============================================================================

/// Position in the acquisition ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FetchState {
    /// Run network attempt `attempt` (0-based).
    Attempting { attempt: u32 },
    /// Sleep `delay`, then run network attempt `next_attempt`.
    Backoff { next_attempt: u32, delay: Duration },
    /// Consult the built-in fallback table.
    FallbackTable,
    /// Consult the on-disk cache.
    FallbackCache,
    /// Every tier missed.
    NotFound,
}

/// Decide the state after a failed network attempt.
///
/// Timeouts back off exponentially (1s, 2s, ...) until the attempt budget
/// is spent. Every other failure class is structural: more attempts cannot
/// help, so the ladder moves straight to the fallback tiers.
fn next_state(attempt: u32, failure: &ProviderError) -> FetchState {
    match failure {
        ProviderError::Timeout if attempt + 1 < MAX_FETCH_ATTEMPTS => FetchState::Backoff {
            next_attempt: attempt + 1,
            delay: Duration::from_secs(2u64.saturating_pow(attempt)),
        },
        _ => FetchState::FallbackTable,
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failure of a whole acquisition, after every tier has been consulted.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// No element set from the network, the fallback table, or the cache.
    #[error("no element set available for catalog id {norad_id}")]
    NotFound { norad_id: String },
}

// ============================================================================
// Acquisition Service
// ============================================================================

/// Resolves catalog ids to element sets through the acquisition ladder
/// and serves catalog searches with the same retry schedule.
pub struct AcquisitionService {
    provider: Box<dyn ElementsProvider>,
    cache: ElementSetCache,
}

impl AcquisitionService {
    pub fn new(provider: impl ElementsProvider + 'static, cache: ElementSetCache) -> Self {
        Self {
            provider: Box::new(provider),
            cache,
        }
    }

    /// Resolve one catalog id.
    ///
    /// Walks the ladder: network (with retry policy), then fallback table,
    /// then disk cache. A network success rewrites the cache document
    /// before returning.
    pub async fn acquire(&self, norad_id: &str) -> Result<ElementSet, AcquireError> {
        let mut cached = self.cache.load();
        let mut state = FetchState::Attempting { attempt: 0 };

        loop {
            state = match state {
                FetchState::Attempting { attempt } => {
                    match self.provider.fetch_tle(norad_id).await {
                        Ok(set) => {
                            debug!(norad_id = %norad_id, name = %set.name, "Element set fetched from provider");
                            cached.insert(set.norad_id.clone(), CacheEntry::from(&set));
                            self.cache.save(&cached);
                            return Ok(set);
                        }
                        Err(e) => {
                            warn!(
                                norad_id = %norad_id,
                                attempt = attempt + 1,
                                max_attempts = MAX_FETCH_ATTEMPTS,
                                error = %e,
                                "Element set fetch failed"
                            );
                            next_state(attempt, &e)
                        }
                    }
                }
                FetchState::Backoff {
                    next_attempt,
                    delay,
                } => {
                    debug!(norad_id = %norad_id, delay_secs = delay.as_secs(), "Backing off before retry");
                    tokio::time::sleep(delay).await;
                    FetchState::Attempting {
                        attempt: next_attempt,
                    }
                }
                FetchState::FallbackTable => match fallback::lookup(norad_id) {
                    Some(set) => {
                        info!(norad_id = %norad_id, "Serving element set from built-in fallback table");
                        return Ok(set);
                    }
                    None => FetchState::FallbackCache,
                },
                FetchState::FallbackCache => match cached.get(norad_id) {
                    Some(entry) => {
                        info!(norad_id = %norad_id, "Serving element set from disk cache");
                        return Ok(entry.to_element_set(norad_id));
                    }
                    None => FetchState::NotFound,
                },
                FetchState::NotFound => {
                    warn!(norad_id = %norad_id, "Element set not found in any tier");
                    return Err(AcquireError::NotFound {
                        norad_id: norad_id.to_string(),
                    });
                }
            };
        }
    }

    /// Search the catalog by name or id.
    ///
    /// Applies the same retry schedule as [`acquire`](Self::acquire), but
    /// there is no offline tier for searches: any non-retryable failure
    /// yields an empty result list, never an error.
    pub async fn search(&self, raw_query: &str) -> Vec<SearchHit> {
        let query = SearchQuery::parse(raw_query);
        let mut attempt = 0;

        loop {
            match self.provider.search(&query).await {
                Ok(hits) => {
                    debug!(query = %raw_query, hits = hits.len(), "Catalog search complete");
                    return hits;
                }
                Err(e) => {
                    warn!(
                        query = %raw_query,
                        attempt = attempt + 1,
                        max_attempts = MAX_FETCH_ATTEMPTS,
                        error = %e,
                        "Catalog search failed"
                    );
                    match next_state(attempt, &e) {
                        FetchState::Backoff {
                            next_attempt,
                            delay,
                        } => {
                            tokio::time::sleep(delay).await;
                            attempt = next_attempt;
                        }
                        _ => return Vec::new(),
                    }
                }
            }
        }
    }

    /// Path of the underlying cache file.
    pub fn cache_path(&self) -> &std::path::Path {
        self.cache.path()
    }
}
