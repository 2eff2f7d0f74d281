//! Google results-page scraper.
//!
//! Scrapes the classic HTML results page with CSS selectors. The markup is
//! an external, unversioned format: when Google shifts its layout the
//! selectors silently match nothing and the provider returns an empty
//! result set, which the pipeline treats as "no results" and answers from
//! the fallback pool. That degrade path is the accepted behaviour, not a
//! defect to harden against.

use crate::error::FetchError;
use crate::fetch::Fetch;
use crate::provider::SearchProvider;
use crate::types::SearchResult;
use scraper::{Html, Selector};
use url::Url;

/// Google HTML search scraper.
///
/// Carries its own fetcher so the whole provider can be exercised offline
/// with canned response bodies.
pub struct GoogleProvider<F: Fetch> {
    fetcher: F,
}

impl<F: Fetch> GoogleProvider<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

impl<F: Fetch> SearchProvider for GoogleProvider<F> {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, FetchError> {
        tracing::trace!(query, "Google search");

        let url = results_page_url(query, max_results);
        let html = self.fetcher.fetch(&url).await?;

        tracing::trace!(bytes = html.len(), "Google response received");
        Ok(parse_results(&html, max_results))
    }
}

/// Build the encoded results-page URL for a query.
///
/// Public so offline tests can key canned bodies by the exact URL the
/// provider will request.
pub fn results_page_url(query: &str, max_results: usize) -> String {
    let num = max_results.to_string();
    let params = [("q", query), ("num", num.as_str())];
    // The base is a valid literal URL, so parse_with_params cannot fail on it.
    match Url::parse_with_params("https://www.google.com/search", params) {
        Ok(url) => url.into(),
        Err(_) => "https://www.google.com/search".to_owned(),
    }
}

/// Parse a Google results page into structured results.
///
/// Result blocks live in `div.g` containers; each contributes a title
/// (`h3`), a link (first anchor href, redirect wrapper unwrapped), and a
/// snippet. A block missing any of the three is skipped entirely — no
/// partial results. Output is capped at `max_results` in page order.
///
/// Never fails: structural drift in the markup yields an empty vec.
pub fn parse_results(html: &str, max_results: usize) -> Vec<SearchResult> {
    let document = Html::parse_document(html);

    // Selector strings are literals; parse failure would be a programming
    // error, but layout drift must never raise, so degrade to empty anyway.
    let Ok(block_sel) = Selector::parse("div.g") else {
        return Vec::new();
    };
    let Ok(title_sel) = Selector::parse("h3") else {
        return Vec::new();
    };
    let Ok(anchor_sel) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    let Ok(snippet_sel) = Selector::parse("div.VwiC3b, span.aCOpRe, span.st") else {
        return Vec::new();
    };

    let mut results = Vec::new();

    for block in document.select(&block_sel) {
        let title = match block.select(&title_sel).next() {
            Some(el) => el.text().collect::<String>().trim().to_owned(),
            None => continue,
        };
        if title.is_empty() {
            continue;
        }

        let href = match block
            .select(&anchor_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
        {
            Some(h) => h,
            None => continue,
        };
        let url = match resolve_href(href) {
            Some(u) => u,
            None => continue,
        };

        let snippet = match block.select(&snippet_sel).next() {
            Some(el) => el.text().collect::<String>().trim().to_owned(),
            None => continue,
        };
        if snippet.is_empty() {
            continue;
        }

        results.push(SearchResult {
            title,
            url,
            snippet,
        });

        if results.len() >= max_results {
            break;
        }
    }

    tracing::debug!(count = results.len(), "Google results parsed");
    results
}

/// Resolve a result anchor href to an absolute target URL.
///
/// Google wraps organic links as `/url?q=<target>&sa=...`; the `q`
/// parameter holds the real destination. Plain hrefs are used as-is.
/// Anything that is not an absolute http(s) URL after unwrapping (internal
/// `/search?...` links, fragments, javascript:) is rejected.
fn resolve_href(href: &str) -> Option<String> {
    if let Some(wrapped) = href.strip_prefix("/url?") {
        let wrapper = Url::parse(&format!("https://www.google.com/url?{wrapped}")).ok()?;
        let target = wrapper
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())?;
        return absolute_http(&target);
    }
    absolute_http(href)
}

/// Keep `candidate` only if it parses as an absolute http(s) URL.
fn absolute_http(candidate: &str) -> Option<String> {
    let parsed = Url::parse(candidate).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| candidate.to_owned())
}
