//! Error types for the webanswer pipeline.
//!
//! Failures are absorbed before they reach the pipeline's public contract:
//! the orchestrator collapses every error into a fallback string. These
//! types exist so tests and logs can still distinguish failure causes.

/// Errors from a single outbound page or search fetch.
///
/// Callers only distinguish timeout from everything else; the original
/// failure kind (DNS, connect, HTTP status, body read) is preserved in the
/// message for logging.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("fetch timed out: {0}")]
    Timeout(String),

    /// Connection failure, DNS failure, non-2xx status, or malformed response.
    #[error("fetch unavailable: {0}")]
    Unavailable(String),
}

/// Internal pipeline failures, caught at the orchestrator boundary and
/// converted to the fallback response. Never surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The search-page fetch failed; the whole enrichment attempt aborts.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The results page parsed to zero result blocks.
    #[error("search returned no parseable results")]
    NoResults,

    /// Invalid pipeline configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for webanswer results.
pub type Result<T> = std::result::Result<T, PipelineError>;
