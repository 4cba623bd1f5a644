//! Element-set acquisition: network fetch, retry policy, and fallback tiers
//!
//! Acquisition resolves a NORAD catalog id to an [`crate::types::ElementSet`]
//! through a fixed ladder:
//!
//! 1. Network fetch from the provider, up to three attempts with
//!    exponential backoff between timed-out attempts
//! 2. Built-in fallback table of well-known objects
//! 3. On-disk cache of previously fetched sets
//!
//! Only when all three tiers miss does the caller see
//! [`AcquireError::NotFound`]. Callers never retry on top of this ladder.

mod cache;
mod celestrak;
pub mod fallback;
mod service;

pub use cache::{CacheEntry, ElementSetCache};
pub use celestrak::{CelesTrakClient, ElementsProvider, ProviderError, SearchQuery};
pub use service::{AcquireError, AcquisitionService};
