//! Pipeline configuration with sensible defaults.
//!
//! [`PipelineConfig`] is the whole configuration surface the core needs:
//! timeout, result bound, client identity, and the optional answer cache.

use crate::error::PipelineError;

/// Configuration for one answer pipeline.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Whether to attempt web search at all. When `false`, every query is
    /// answered straight from the fallback pool.
    pub search_enabled: bool,
    /// Maximum number of search results to fetch and cite per query.
    pub max_results: usize,
    /// Per-fetch HTTP timeout in seconds (applies to the results page and
    /// to each candidate page independently).
    pub timeout_seconds: u64,
    /// How long to cache assembled answers in seconds. 0 disables caching.
    pub cache_ttl_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            search_enabled: true,
            max_results: 3,
            timeout_seconds: 8,
            cache_ttl_seconds: 0,
            user_agent: None,
        }
    }
}

impl PipelineConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.max_results == 0 {
            return Err(PipelineError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(PipelineError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
