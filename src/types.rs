//! Core types flowing through the answer pipeline.

use serde::{Deserialize, Serialize};

/// A single structured result parsed from a search engine results page.
///
/// Immutable once constructed. Ordering among results is the engine's
/// ranking order and is preserved end-to-end through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// The absolute URL of the result. Redirect wrappers from the results
    /// page are unwrapped at parse time, so this is always safe to fetch.
    pub url: String,
    /// A text snippet summarising the page content.
    pub snippet: String,
}

/// Normalized text extracted from one fetched page.
///
/// A sequence of non-empty trimmed lines whose joined length is capped at
/// [`crate::extract::MAX_PAGE_CHARS`] characters. Ephemeral — lives only for
/// the duration of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    text: String,
}

impl PageText {
    /// Wrap already-normalized, already-capped text. Lines are separated by
    /// single newlines; the extractor guarantees no line is empty.
    pub(crate) fn from_normalized(text: String) -> Self {
        Self { text }
    }

    /// The normalized text, lines joined with `\n`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterate over the normalized lines.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }

    /// Total character count of the joined text (the capped quantity).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A candidate text segment with its keyword-overlap score for the current
/// query. Transient: recomputed per query, never cached across queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSegment {
    /// Keyword-overlap count (multiplicity counted). Always ≥ 0.
    pub score: usize,
    /// The segment text, verbatim from the page.
    pub text: String,
}
