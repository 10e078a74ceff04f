//! Text segmentation and normalization helpers.
//!
//! Shared by the extractor (metrics, body normalization) and the
//! summarizer (sentence scoring, script assembly).

use crate::patterns::{ANY_WHITESPACE, MULTIPLE_NEWLINES, SENTENCE_SPLIT, WHITESPACE_NORMALIZE};

/// Normalize extracted body text.
///
/// Collapses runs of spaces/tabs, trims each line, and limits blank-line
/// runs to a single blank line. The result has no leading or trailing
/// whitespace.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = WHITESPACE_NORMALIZE.replace_all(text, " ");

    let trimmed_lines: Vec<&str> = collapsed.lines().map(str::trim).collect();
    let joined = trimmed_lines.join("\n");

    MULTIPLE_NEWLINES
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

/// Collapse all whitespace runs to single spaces.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    ANY_WHITESPACE.replace_all(text.trim(), " ").to_string()
}

/// Count whitespace-delimited words.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into sentences, dropping terminal punctuation.
///
/// Only sentences longer than `min_chars` after trimming are kept.
#[must_use]
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<String> {
    SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .map(|s| s.trim_end_matches(['.', '!', '?']))
        .filter(|s| s.chars().count() > min_chars)
        .map(str::to_string)
        .collect()
}

/// Truncate to at most `max_chars` characters, cutting on a char boundary.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_blank_line_runs() {
        let input = "  First line  \n\n\n\nSecond   line\t\there\n";
        let normalized = normalize_whitespace(input);
        assert_eq!(normalized, "First line\n\nSecond line here");
    }

    #[test]
    fn normalize_of_normalized_text_is_identity() {
        let once = normalize_whitespace("a  b\n\n\n\nc");
        let twice = normalize_whitespace(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn count_words_splits_on_whitespace() {
        assert_eq!(count_words("one two  three\nfour"), 4);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn split_sentences_filters_short_ones() {
        let text = "Paragraph one is here. Short. Another full sentence follows for analysis.";
        let sentences = split_sentences(text, 20);
        assert_eq!(
            sentences,
            vec![
                "Paragraph one is here".to_string(),
                "Another full sentence follows for analysis".to_string(),
            ]
        );
    }

    #[test]
    fn split_sentences_handles_exclamations_and_questions() {
        let text = "Is this the first question we ask? It certainly looks like one! Trailing text without punctuation also counts";
        let sentences = split_sentences(text, 20);
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "Is this the first question we ask");
    }

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
        assert_eq!(truncate_chars("short", 100), "short");
    }
}
