//! Optional in-memory cache for assembled answers.
//!
//! Keyed by the normalised query plus the result bound, with a TTL taken
//! from config. Only successfully assembled answers are cached — fallback
//! responses are intentionally random and never stored. Disabled entirely
//! when `cache_ttl_seconds` is 0 (the default).

use std::sync::OnceLock;
use std::time::Duration;

use moka::future::Cache;

/// Maximum number of cached answers.
const MAX_CACHE_ENTRIES: u64 = 100;

/// Global process-wide answer cache.
///
/// Lazily initialised on first access. TTL is fixed at first creation and
/// cannot be changed afterwards.
static CACHE: OnceLock<Cache<AnswerKey, String>> = OnceLock::new();

/// Composite cache key: normalised query + result bound.
///
/// `max_results` is part of the key because it changes both the body and
/// the source list of the assembled answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnswerKey {
    query: String,
    max_results: usize,
}

impl AnswerKey {
    /// Build a deterministic key. The query is trimmed and lowercased so
    /// trivially re-phrased duplicates hit the same entry.
    pub fn new(query: &str, max_results: usize) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            max_results,
        }
    }
}

fn get_or_init_cache(ttl_seconds: u64) -> &'static Cache<AnswerKey, String> {
    CACHE.get_or_init(|| {
        Cache::builder()
            .max_capacity(MAX_CACHE_ENTRIES)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build()
    })
}

/// Look up a cached answer. Returns `None` on miss.
pub async fn get(key: &AnswerKey, ttl_seconds: u64) -> Option<String> {
    let cache = get_or_init_cache(ttl_seconds);
    cache.get(key).await
}

/// Store an assembled answer.
pub async fn insert(key: AnswerKey, answer: String, ttl_seconds: u64) {
    let cache = get_or_init_cache(ttl_seconds);
    cache.insert(key, answer).await;
}
