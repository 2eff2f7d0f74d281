//! Relevance scoring: rank page lines against query keywords.
//!
//! Pure term-overlap counting — no embeddings, no stemming. Lines shorter
//! than [`MIN_SEGMENT_CHARS`] are navigation noise and are excluded from
//! scoring entirely, not merely down-ranked.

use crate::extract::truncate_chars;
use crate::types::{PageText, ScoredSegment};
use std::collections::HashSet;

/// Minimum line length (chars) for a line to count as a candidate segment.
pub const MIN_SEGMENT_CHARS: usize = 20;

/// A page with no keyword hits still yields its first candidate line longer
/// than this, so substantive but topically-silent pages are not dropped.
pub const RESCUE_MIN_CHARS: usize = 100;

/// Cap on the joined selected-segment text per page.
pub const MAX_SELECTED_CHARS: usize = 1000;

/// Build the keyword set for a query: lower-cased, whitespace-split,
/// duplicates collapsed. Order is irrelevant.
pub fn keyword_set(query: &str) -> HashSet<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Count how many of the segment's words are query keywords.
///
/// Multiplicity counts: a keyword appearing twice in the segment scores 2.
pub fn score_segment(segment: &str, keywords: &HashSet<String>) -> usize {
    segment
        .to_lowercase()
        .split_whitespace()
        .filter(|word| keywords.contains(*word))
        .count()
}

/// Select the most query-relevant segments of a page, joined into one string.
///
/// Candidates are the page's lines of at least [`MIN_SEGMENT_CHARS`] chars.
/// They are scored by keyword overlap, sorted descending (stable, so ties
/// keep original appearance order), and the top `top_k` with score > 0 are
/// kept. If nothing scores above zero, the first candidate longer than
/// [`RESCUE_MIN_CHARS`] chars is used instead. The result is joined with
/// single spaces and truncated to [`MAX_SELECTED_CHARS`] characters.
///
/// Returns an empty string when the page has no usable candidates.
pub fn score_and_select(page: &PageText, query: &str, top_k: usize) -> String {
    let keywords = keyword_set(query);

    let mut segments: Vec<ScoredSegment> = page
        .lines()
        .filter(|line| line.chars().count() >= MIN_SEGMENT_CHARS)
        .map(|line| ScoredSegment {
            score: score_segment(line, &keywords),
            text: line.to_owned(),
        })
        .collect();

    // Vec::sort_by is stable; ties stay in appearance order, which the
    // assembler relies on for reproducible output.
    segments.sort_by(|a, b| b.score.cmp(&a.score));

    let selected: Vec<&str> = segments
        .iter()
        .filter(|seg| seg.score > 0)
        .take(top_k)
        .map(|seg| seg.text.as_str())
        .collect();

    let joined = if selected.is_empty() {
        page.lines()
            .filter(|line| line.chars().count() >= MIN_SEGMENT_CHARS)
            .find(|line| line.chars().count() > RESCUE_MIN_CHARS)
            .unwrap_or_default()
            .to_owned()
    } else {
        selected.join(" ")
    };

    truncate_chars(joined, MAX_SELECTED_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lines: &[&str]) -> PageText {
        crate::extract::extract_text(&format!(
            "<html><body>{}</body></html>",
            lines
                .iter()
                .map(|l| format!("<p>{l}</p>"))
                .collect::<String>()
        ))
    }

    #[test]
    fn keyword_set_lowercases_and_dedupes() {
        let keywords = keyword_set("Fox fox QUICK");
        assert_eq!(keywords.len(), 2);
        assert!(keywords.contains("fox"));
        assert!(keywords.contains("quick"));
    }

    #[test]
    fn keyword_set_empty_query() {
        assert!(keyword_set("   ").is_empty());
    }

    #[test]
    fn score_counts_multiplicity() {
        let keywords = keyword_set("fox");
        assert_eq!(score_segment("fox chases fox around the fox den", &keywords), 3);
    }

    #[test]
    fn score_is_case_insensitive() {
        let keywords = keyword_set("fox");
        assert_eq!(score_segment("The Fox jumped", &keywords), 1);
    }

    #[test]
    fn matching_line_ranked_above_filler_and_short_line_excluded() {
        let filler = "a".repeat(25);
        let text = page(&["short", &filler, "the quick brown fox jumps"]);
        let selected = score_and_select(&text, "fox", 2);

        assert!(selected.contains("the quick brown fox jumps"));
        assert!(!selected.contains(&filler));
        assert!(!selected.contains("short"));
    }

    #[test]
    fn top_k_limits_selection() {
        let text = page(&[
            "the fox ran through the field",
            "another fox sighting yesterday",
            "a third fox appeared at dawn",
        ]);
        let selected = score_and_select(&text, "fox", 2);
        assert!(selected.contains("the fox ran"));
        assert!(selected.contains("another fox"));
        assert!(!selected.contains("third fox"));
    }

    #[test]
    fn ties_keep_appearance_order() {
        let text = page(&[
            "first line mentioning fox once here",
            "second line mentioning fox once too",
        ]);
        let selected = score_and_select(&text, "fox", 2);
        let first = selected.find("first line").expect("first selected");
        let second = selected.find("second line").expect("second selected");
        assert!(first < second);
    }

    #[test]
    fn higher_score_sorts_first() {
        let text = page(&[
            "one fox mention in this opening line",
            "fox and fox again, two fox words... fox",
        ]);
        let selected = score_and_select(&text, "fox", 2);
        let heavy = selected.find("fox and fox").expect("heavy selected");
        let light = selected.find("one fox mention").expect("light selected");
        assert!(heavy < light);
    }

    #[test]
    fn zero_scores_rescue_long_candidate() {
        let long_line = "this page talks at length about something else entirely, \
                         with plenty of substance but none of the query words present";
        let text = page(&["a medium length line here", long_line]);
        let selected = score_and_select(&text, "fox", 3);
        assert!(selected.contains("plenty of substance"));
    }

    #[test]
    fn zero_scores_and_only_short_candidates_yield_empty() {
        let text = page(&["a medium length line here", "another unremarkable line"]);
        let selected = score_and_select(&text, "fox", 3);
        assert!(selected.is_empty());
    }

    #[test]
    fn empty_page_yields_empty() {
        let text = PageText::default();
        assert!(score_and_select(&text, "fox", 3).is_empty());
    }

    #[test]
    fn selection_truncated_to_cap() {
        let long = format!("fox {}", "filler words ".repeat(60));
        let text = page(&[&long, &long, &long]);
        let selected = score_and_select(&text, "fox", 3);
        assert!(selected.chars().count() <= MAX_SELECTED_CHARS);
    }
}
