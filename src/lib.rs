//! # webanswer
//!
//! Retrieval-augmented answer assembly, without a model in the loop.
//!
//! Given a free-text query, this crate scrapes a web search results page,
//! fetches the candidate pages, extracts the passages most relevant to the
//! query, and assembles a single coherent answer with cited sources. When
//! search, fetch, or parsing yields nothing usable it degrades to a canned
//! keyword-flavoured response — the pipeline always returns *some* string
//! and never surfaces an error to its caller.
//!
//! ## Design
//!
//! - One pipeline invocation per chat turn; no shared mutable state
//! - Candidate pages fetched concurrently, merged back in engine order
//! - Relevance is pure keyword-overlap counting — extractive, not generative
//! - The search provider sits behind a trait so the scraper can be swapped
//!   for a stable search API without touching the rest of the pipeline
//! - Every failure is absorbed at the orchestrator boundary
//!
//! ## Security
//!
//! - No API keys or secrets to leak
//! - No network listeners — this is a library, not a server
//! - Queries are logged only at trace level

pub mod assemble;
pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod fetch;
pub mod pipeline;
pub mod provider;
pub mod providers;
pub mod score;
pub mod types;

pub use config::PipelineConfig;
pub use error::{FetchError, PipelineError, Result};
pub use fetch::Fetch;
pub use pipeline::{Pipeline, FALLBACK_PREFIX};
pub use provider::SearchProvider;
pub use types::{PageText, ScoredSegment, SearchResult};

/// Answer a query with the production pipeline.
///
/// Builds a [`Pipeline`] from `config` and runs one enrichment pass.
/// Infallible by contract: invalid configuration or any internal failure
/// collapses to a fallback response.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// let config = webanswer::PipelineConfig::default();
/// let answer = webanswer::answer("capital of France", &config).await;
/// println!("{answer}");
/// # }
/// ```
pub async fn answer(query: &str, config: &PipelineConfig) -> String {
    match Pipeline::from_config(config.clone()) {
        Ok(pipeline) => pipeline.answer(query).await,
        Err(err) => {
            tracing::warn!(error = %err, "could not build pipeline, answering from fallback");
            pipeline::degraded(query)
        }
    }
}

/// Answer a query with default configuration.
///
/// Convenience wrapper around [`answer`] using [`PipelineConfig::default()`].
pub async fn answer_default(query: &str) -> String {
    answer(query, &PipelineConfig::default()).await
}
