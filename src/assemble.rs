//! Response assembly: merge collected text into one cited answer.
//!
//! Takes the accumulated per-source text, picks the sentences most relevant
//! to the query, and renders a header, a synthesized body, and a numbered
//! source list. Fully deterministic — identical inputs yield byte-identical
//! output.

use crate::score::{keyword_set, score_segment};
use crate::types::SearchResult;

/// Sentences shorter than this (after trimming) are discarded as noise.
const MIN_SENTENCE_CHARS: usize = 20;

/// Relevant-sentence count below which the body is backfilled from the
/// remaining pool.
const MIN_RELEVANT_SENTENCES: usize = 3;

/// Upper bound on sentences in the assembled body.
const MAX_BODY_SENTENCES: usize = 5;

/// Fixed body used when no sentence survives selection. Kept as a stable
/// literal so callers and tests can recognise it.
pub const NO_INFO_NOTICE: &str = "could not find detailed information";

/// Assemble the final answer from collected page text and the source list.
///
/// `collected_info` is split on sentence-terminal punctuation (`.` `!` `?`);
/// sentences shorter than [`MIN_SENTENCE_CHARS`] are dropped. Sentences
/// containing at least one query keyword come first; if fewer than
/// [`MIN_RELEVANT_SENTENCES`] are relevant, the rest backfill in original
/// order until [`MAX_BODY_SENTENCES`] are collected or the pool runs out.
/// The body always ends with a period. Sources are listed as
/// `"<index>. <title> - <url>"` in the original result order.
pub fn assemble(query: &str, results: &[SearchResult], collected_info: &str) -> String {
    let sentences: Vec<&str> = collected_info
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() >= MIN_SENTENCE_CHARS)
        .collect();

    let keywords = keyword_set(query);
    let mut relevant: Vec<&str> = Vec::new();
    let mut remainder: Vec<&str> = Vec::new();
    for &sentence in &sentences {
        if score_segment(sentence, &keywords) > 0 {
            relevant.push(sentence);
        } else {
            remainder.push(sentence);
        }
    }

    let mut selected = relevant;
    if selected.len() < MIN_RELEVANT_SENTENCES {
        for sentence in remainder {
            if selected.len() >= MAX_BODY_SENTENCES {
                break;
            }
            selected.push(sentence);
        }
    }
    selected.truncate(MAX_BODY_SENTENCES);

    let body = if selected.is_empty() {
        format!("I {NO_INFO_NOTICE} on this topic.")
    } else {
        let mut joined = selected.join(". ");
        if !joined.ends_with('.') {
            joined.push('.');
        }
        joined
    };

    let mut answer = format!("Here is what I found about \"{query}\":\n\n{body}");

    if !results.is_empty() {
        let sources: Vec<String> = results
            .iter()
            .enumerate()
            .map(|(i, result)| format!("{}. {} - {}", i + 1, result.title, result.url))
            .collect();
        answer.push_str("\n\nSources:\n");
        answer.push_str(&sources.join("\n"));
    }

    answer
}
