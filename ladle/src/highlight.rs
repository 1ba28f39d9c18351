//! Display highlighting for search results.
//!
//! Splits a presentation string into alternating matched/unmatched runs for
//! a query. Deliberately independent of the search engine's own scoring:
//! it works from the original query text so the UI can highlight whatever
//! the user actually typed.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// One run of a highlighted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub is_match: bool,
}

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Split `text` into matched/unmatched segments for `query`.
///
/// Query tokens are matched case-insensitively as literals. Tokens are
/// tried longest-first so that when one token is a prefix of another
/// ("rice" vs "riceberry"), the longer alternative wins at a shared match
/// position. Segments always concatenate back to exactly `text`.
pub fn split_highlight_segments(text: &str, query: &str) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }

    let trimmed = query.trim();
    if trimmed.is_empty() {
        return vec![HighlightSegment {
            text: text.to_string(),
            is_match: false,
        }];
    }

    let mut tokens: Vec<&str> = WHITESPACE_RUN.split(trimmed).filter(|t| !t.is_empty()).collect();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.len()));

    let alternation = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    let matcher = match RegexBuilder::new(&alternation).case_insensitive(true).build() {
        Ok(re) => re,
        // Escaped literals always compile; bail to a single unmatched run
        // rather than panic if that ever changes.
        Err(_) => {
            return vec![HighlightSegment {
                text: text.to_string(),
                is_match: false,
            }]
        }
    };

    let mut segments = Vec::new();
    let mut cursor = 0usize;
    for m in matcher.find_iter(text) {
        if m.start() > cursor {
            segments.push(HighlightSegment {
                text: text[cursor..m.start()].to_string(),
                is_match: false,
            });
        }
        segments.push(HighlightSegment {
            text: m.as_str().to_string(),
            is_match: true,
        });
        cursor = m.end();
    }
    if cursor < text.len() {
        segments.push(HighlightSegment {
            text: text[cursor..].to_string(),
            is_match: false,
        });
    }

    segments
}
