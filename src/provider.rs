//! Trait definition for pluggable search result providers.
//!
//! The pipeline only depends on this seam, so the scraping provider in
//! [`crate::providers::google`] can be swapped for a stable search API
//! without touching the rest of the pipeline.

use crate::error::FetchError;
use crate::types::SearchResult;

/// A source of ranked search results for a free-text query.
///
/// Implementors own URL construction, the outbound request, and parsing.
/// Two distinct failure modes matter to the pipeline:
///
/// - transport failure → `Err(FetchError)` (aborts the enrichment attempt)
/// - markup/layout drift → `Ok(vec![])` (treated as "no results", a normal
///   outcome that routes to the fallback path)
///
/// All implementations must be `Send + Sync`.
pub trait SearchProvider: Send + Sync {
    /// Run a search and return up to `max_results` parsed results, in the
    /// engine's ranking order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] only for transport-level failures. Parse
    /// failures must degrade to an empty vec, never an error.
    fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, FetchError>> + Send;
}
