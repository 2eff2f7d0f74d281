//! Markup-to-text extraction: strip scripts and styles, linearize to lines.
//!
//! Turns raw HTML into a [`PageText`] — trimmed non-empty lines with the
//! joined length capped at [`MAX_PAGE_CHARS`]. Never fails: malformed HTML
//! degrades to an empty `PageText`, and truncation cuts at a plain character
//! boundary with no attempt to preserve whole sentences.

use crate::types::PageText;
use scraper::Html;

/// Maximum characters of extracted text kept per page. Bounds memory and
/// downstream scoring cost.
pub const MAX_PAGE_CHARS: usize = 3000;

/// Extract normalized text lines from raw HTML.
///
/// `<script>` and `<style>` subtrees are removed before linearization so
/// their content never leaks into the output. The remaining text is split
/// into lines, each line is additionally split on runs of two or more
/// spaces (inline headline fragments a naive linearization would glue
/// together), trimmed, and empty lines are dropped. The joined text is
/// silently truncated to [`MAX_PAGE_CHARS`] characters.
pub fn extract_text(html: &str) -> PageText {
    let cleaned = strip_subtrees(html, &["script", "style"]);
    let document = Html::parse_document(&cleaned);

    let raw: String = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join("\n");

    let mut lines: Vec<&str> = Vec::new();
    for raw_line in raw.lines() {
        // Runs of 2+ spaces act as line separators; single spaces do not.
        for piece in raw_line.split("  ") {
            let trimmed = piece.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed);
            }
        }
    }

    PageText::from_normalized(truncate_chars(lines.join("\n"), MAX_PAGE_CHARS))
}

/// Remove every instance of the given tags including their content.
///
/// Done with a case-insensitive text scan before HTML parsing, so the
/// parser never sees the subtree at all. Tolerates unclosed tags by
/// skipping just the opening tag.
fn strip_subtrees(html: &str, tags: &[&str]) -> String {
    let mut result = html.to_owned();
    for tag in tags {
        result = strip_one_tag(&result, tag);
    }
    result
}

fn strip_one_tag(html: &str, tag: &str) -> String {
    let mut result = String::with_capacity(html.len());
    // ASCII lowering keeps byte offsets valid for indexing into `html`.
    let lower = html.to_ascii_lowercase();
    let open_tag = format!("<{tag}");
    let close_tag = format!("</{tag}>");

    let mut pos = 0;
    loop {
        let start = match lower[pos..].find(&open_tag) {
            Some(offset) => pos + offset,
            None => {
                result.push_str(&html[pos..]);
                break;
            }
        };

        // Require a tag-name boundary so <style> does not match <styled-box>.
        let after_tag = start + open_tag.len();
        if after_tag < lower.len() {
            let next_byte = lower.as_bytes()[after_tag];
            if !matches!(next_byte, b' ' | b'>' | b'/' | b'\n' | b'\r' | b'\t') {
                result.push_str(&html[pos..after_tag]);
                pos = after_tag;
                continue;
            }
        }

        result.push_str(&html[pos..start]);

        let end = match lower[start..].find(&close_tag) {
            Some(offset) => start + offset + close_tag.len(),
            None => {
                // Unclosed tag: drop the opening tag only.
                match lower[start..].find('>') {
                    Some(offset) => start + offset + 1,
                    None => html.len(),
                }
            }
        };

        pos = end;
    }

    result
}

/// Truncate to at most `max_chars` characters, cutting mid-line if needed.
pub(crate) fn truncate_chars(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_owned(),
        None => text,
    }
}
