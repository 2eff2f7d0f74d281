//! HTTP fetching with a spoofed browser identity and bounded timeout.
//!
//! [`Fetch`] is the seam between the pipeline and the network: the real
//! [`HttpFetcher`] wraps a configured [`reqwest::Client`], and tests inject
//! canned-body fetchers instead. One fetch is one GET — no retries.

use crate::config::PipelineConfig;
use crate::error::FetchError;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, one chosen per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// A source of page bodies for absolute URLs.
///
/// Implementors must be `Send + Sync`; page fetches for different results
/// run concurrently.
pub trait Fetch: Send + Sync {
    /// GET `url` and return the response body as text.
    ///
    /// # Errors
    ///
    /// [`FetchError::Timeout`] if the configured deadline passes first,
    /// [`FetchError::Unavailable`] for every other failure (connection, DNS,
    /// non-2xx status, unreadable body).
    fn fetch(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, FetchError>> + Send;
}

/// The production fetcher: a [`reqwest::Client`] with browser-like identity.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from pipeline configuration.
    ///
    /// The client has cookie support, the configured timeout, a random
    /// User-Agent from the rotation list (or the configured override), and
    /// a bounded redirect policy.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unavailable`] if the client cannot be constructed.
    pub fn new(config: &PipelineConfig) -> Result<Self, FetchError> {
        let ua = match config.user_agent {
            Some(ref custom) => custom.clone(),
            None => random_user_agent().to_owned(),
        };

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(ua)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| FetchError::Unavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::trace!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(classify_send_error)?
            .error_for_status()
            .map_err(|e| FetchError::Unavailable(format!("HTTP status error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Unavailable(format!("response read failed: {e}")))?;

        tracing::trace!(url, bytes = body.len(), "page fetched");
        Ok(body)
    }
}

/// Map a reqwest send failure onto the fetch error taxonomy.
fn classify_send_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(err.to_string())
    } else {
        FetchError::Unavailable(err.to_string())
    }
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // USER_AGENTS is a non-empty const array; choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}
