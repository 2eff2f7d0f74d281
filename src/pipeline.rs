//! Pipeline orchestrator: search, fetch, extract, score, assemble.
//!
//! The only entry point the chat layer consumes. Sequences the whole
//! enrichment run and owns error containment: every failure inside the
//! pipeline collapses to a fallback string, so [`Pipeline::answer`] can
//! never fail and never panics on the happy paths either.

use crate::assemble::assemble;
use crate::cache::{self, AnswerKey};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::extract::extract_text;
use crate::fallback::fallback;
use crate::fetch::{Fetch, HttpFetcher};
use crate::provider::SearchProvider;
use crate::providers::GoogleProvider;
use crate::score::score_and_select;

/// Prefix attached to fallback answers taken after a failed enrichment
/// attempt, so the user can tell "search was off" from "search came up dry".
pub const FALLBACK_PREFIX: &str = "I couldn't find anything current on that. ";

/// How many scored segments to keep per fetched page.
const TOP_SEGMENTS_PER_PAGE: usize = 3;

/// The answer pipeline, generic over its network seams so tests run fully
/// offline with canned bodies.
pub struct Pipeline<P: SearchProvider, F: Fetch> {
    provider: P,
    fetcher: F,
    config: PipelineConfig,
}

impl Pipeline<GoogleProvider<HttpFetcher>, HttpFetcher> {
    /// Build the production pipeline: Google scraping provider plus a real
    /// HTTP fetcher, both honouring the config's timeout and client identity.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Config`] for invalid configuration, or a
    /// fetch error if the HTTP client cannot be constructed.
    pub fn from_config(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        let fetcher = HttpFetcher::new(&config)?;
        let provider = GoogleProvider::new(fetcher.clone());
        Ok(Self {
            provider,
            fetcher,
            config,
        })
    }
}

impl<P: SearchProvider, F: Fetch> Pipeline<P, F> {
    /// Assemble a pipeline from explicit parts. Used by tests to inject
    /// canned providers and fetchers.
    pub fn with_parts(provider: P, fetcher: F, config: PipelineConfig) -> Self {
        Self {
            provider,
            fetcher,
            config,
        }
    }

    /// Answer a query. Infallible by contract: any internal failure routes
    /// to the fallback generator, with a recognisable prefix when an
    /// enrichment attempt was made and failed.
    pub async fn answer(&self, query: &str) -> String {
        if !self.config.search_enabled {
            return fallback(query);
        }

        let ttl = self.config.cache_ttl_seconds;
        let key = AnswerKey::new(query, self.config.max_results);
        if ttl > 0 {
            if let Some(hit) = cache::get(&key, ttl).await {
                tracing::trace!(query, "answer cache hit");
                return hit;
            }
        }

        match self.enrich(query).await {
            Ok(answer) => {
                if ttl > 0 {
                    cache::insert(key, answer.clone(), ttl).await;
                }
                answer
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "pipeline degraded to fallback");
                degraded(query)
            }
        }
    }

    /// The enrichment run: search, fetch pages, extract, score, assemble.
    async fn enrich(&self, query: &str) -> Result<String, PipelineError> {
        let results = self
            .provider
            .search(query, self.config.max_results)
            .await?;
        if results.is_empty() {
            return Err(PipelineError::NoResults);
        }

        tracing::debug!(query, count = results.len(), "fetching result pages");

        // Page fetches are independent; run them concurrently. join_all
        // returns outputs in input order, which keeps the source ordering
        // guarantee in the merge below.
        let fetches = results.iter().map(|result| self.fetcher.fetch(&result.url));
        let bodies = futures::future::join_all(fetches).await;

        let mut collected = String::new();
        for (result, body) in results.iter().zip(bodies) {
            match body {
                Ok(html) => {
                    let page = extract_text(&html);
                    let selected = score_and_select(&page, query, TOP_SEGMENTS_PER_PAGE);
                    if !selected.is_empty() {
                        collected.push_str(&format!(
                            "{}. {} {} ",
                            result.title, result.snippet, selected
                        ));
                    }
                }
                Err(err) => {
                    // Non-fatal: the source stays in the citation list, it
                    // just contributes no content.
                    tracing::debug!(url = %result.url, error = %err, "page fetch failed, skipping content");
                }
            }
        }

        Ok(assemble(query, &results, &collected))
    }
}

/// The fallback-with-prefix path for a failed enrichment attempt.
pub(crate) fn degraded(query: &str) -> String {
    format!("{FALLBACK_PREFIX}{}", fallback(query))
}
