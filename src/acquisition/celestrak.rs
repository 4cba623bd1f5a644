//! CelesTrak GP interface: provider abstraction, HTTP client, and
//! response parsing
//!
//! The GP endpoint serves both TLE text (`FORMAT=tle`) and catalog JSON
//! (`FORMAT=json`). Failures are classified into [`ProviderError`] so the
//! retry policy in the service layer can decide between backing off and
//! falling through to the offline tiers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::types::{ElementSet, SearchHit};

/// Browser user agent sent on every provider request. The provider
/// throttles default library agents aggressively.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Name used when a TLE response carries no title line.
const UNKNOWN_OBJECT_NAME: &str = "Unknown";

/// Object type used when a catalog row omits one.
const DEFAULT_OBJECT_TYPE: &str = "PAYLOAD";

/// Catalog rows returned per search.
const SEARCH_RESULT_LIMIT: usize = 5;

// ============================================================================
// Errors
// ============================================================================

/// Classified failure of a single provider request.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request exceeded its deadline. The only retryable failure.
    #[error("provider request timed out")]
    Timeout,

    /// Connection refused or host unreachable. Structural, not retried.
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP {0}")]
    Status(u16),

    /// A 2xx body that could not be parsed as TLE lines or catalog JSON.
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ProviderError {
    fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_connect() {
            ProviderError::Unreachable(e.to_string())
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}

// ============================================================================
// Search Queries
// ============================================================================

/// Routed catalog search query.
///
/// All-digit text is routed to the provider's catalog-number parameter,
/// anything else to the name parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    CatalogNumber(String),
    Name(String),
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            SearchQuery::CatalogNumber(raw.to_string())
        } else {
            SearchQuery::Name(raw.to_string())
        }
    }

    /// Query-string key/value pair for the GP endpoint.
    pub fn param(&self) -> (&'static str, &str) {
        match self {
            SearchQuery::CatalogNumber(v) => ("CATNR", v),
            SearchQuery::Name(v) => ("NAME", v),
        }
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Upstream source of element sets and catalog rows.
///
/// The production implementation is [`CelesTrakClient`]; tests substitute
/// scripted providers to drive the retry ladder.
#[async_trait]
pub trait ElementsProvider: Send + Sync {
    /// Fetch the current element set for one catalog id.
    async fn fetch_tle(&self, norad_id: &str) -> Result<ElementSet, ProviderError>;

    /// Search the catalog by id or name.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, ProviderError>;
}

// ============================================================================
// CelesTrak Client
// ============================================================================

/// HTTP client for the CelesTrak GP endpoint.
#[derive(Debug, Clone)]
pub struct CelesTrakClient {
    http: Client,
    base_url: String,
}

impl CelesTrakClient {
    /// Build a client against `base_url` (no trailing slash needed) with a
    /// per-request deadline.
    pub fn new(base_url: &str, request_timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(request_timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn gp_url(&self) -> String {
        format!("{}/gp.php", self.base_url)
    }
}

#[async_trait]
impl ElementsProvider for CelesTrakClient {
    async fn fetch_tle(&self, norad_id: &str) -> Result<ElementSet, ProviderError> {
        let response = self
            .http
            .get(self.gp_url())
            .query(&[("CATNR", norad_id), ("FORMAT", "tle")])
            .send()
            .await
            .map_err(ProviderError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(ProviderError::from_transport)?;
        parse_tle_body(norad_id, &body)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, ProviderError> {
        let (key, value) = query.param();
        let response = self
            .http
            .get(self.gp_url())
            .query(&[(key, value), ("FORMAT", "json")])
            .send()
            .await
            .map_err(ProviderError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let rows: Vec<GpRecord> = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        Ok(rows
            .into_iter()
            .take(SEARCH_RESULT_LIMIT)
            .filter_map(GpRecord::into_hit)
            .collect())
    }
}

// ============================================================================
// Response Parsing
// ============================================================================

/// Parse a TLE text body.
///
/// Three or more lines are read as title + line pair; exactly two lines
/// as an unnamed line pair. Anything shorter is malformed. Checksums are
/// deliberately not validated here; that is the propagator's concern.
fn parse_tle_body(norad_id: &str, body: &str) -> Result<ElementSet, ProviderError> {
    let lines: Vec<&str> = body.trim().lines().collect();
    match lines.len() {
        n if n >= 3 => Ok(ElementSet::new(
            norad_id,
            lines[0].trim(),
            lines[1].trim(),
            lines[2].trim(),
        )),
        2 => Ok(ElementSet::new(
            norad_id,
            UNKNOWN_OBJECT_NAME,
            lines[0].trim(),
            lines[1].trim(),
        )),
        n => Err(ProviderError::Malformed(format!(
            "expected 2 or 3 TLE lines, got {n}"
        ))),
    }
}

/// One row of the GP endpoint's JSON catalog output.
#[derive(Debug, Deserialize)]
struct GpRecord {
    #[serde(rename = "OBJECT_NAME")]
    object_name: Option<String>,
    #[serde(rename = "NORAD_CAT_ID")]
    norad_cat_id: Option<u64>,
    #[serde(rename = "OBJECT_TYPE")]
    object_type: Option<String>,
}

impl GpRecord {
    /// Project to a [`SearchHit`], dropping rows without a usable catalog id.
    fn into_hit(self) -> Option<SearchHit> {
        let norad_id = self.norad_cat_id.filter(|id| *id != 0)?;
        Some(SearchHit {
            name: self
                .object_name
                .unwrap_or_else(|| UNKNOWN_OBJECT_NAME.to_string()),
            norad_id,
            object_type: self
                .object_type
                .unwrap_or_else(|| DEFAULT_OBJECT_TYPE.to_string()),
        })
    }
}
