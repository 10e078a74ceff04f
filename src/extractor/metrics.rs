//! Content quality metrics.
//!
//! The quality score gates whether summarization is attempted at all,
//! so it must stay within `[0, 100]` for any input and keep the
//! documented word-count boundaries exact.

use crate::options::ExtractionOptions;
use crate::result::ContentMetrics;
use crate::text::{count_words, split_sentences};

/// Compute word count, reading time, and quality score for body text.
#[must_use]
pub fn compute_metrics(body_text: &str, options: &ExtractionOptions) -> ContentMetrics {
    let word_count = count_words(body_text);
    ContentMetrics {
        word_count,
        reading_time_minutes: reading_time_minutes(word_count, options),
        quality_score: quality_score(body_text, word_count, options),
    }
}

/// `ceil(word_count / words_per_minute)`, zero for empty text.
#[must_use]
pub fn reading_time_minutes(word_count: usize, options: &ExtractionOptions) -> usize {
    let rate = options.reading_words_per_minute.max(1);
    word_count.div_ceil(rate)
}

/// Heuristic quality score in `[0, 100]`.
///
/// ```text
/// quality = min(words / 10, 50)
///         + (sentences > 5 ? 20 : 0)
///         + (proper capitalization ? 15 : 0)
///         + (words > 100 ? 15 : 0)
/// ```
#[must_use]
pub fn quality_score(body_text: &str, word_count: usize, options: &ExtractionOptions) -> u8 {
    let weights = &options.quality;
    let mut score = (word_count as f64 / weights.word_divisor).min(weights.word_cap);

    let sentences = split_sentences(body_text, 0);
    if sentences.len() > weights.sentence_threshold {
        score += weights.sentence_bonus;
    }

    if has_proper_capitalization(&sentences) {
        score += weights.capitalization_bonus;
    }

    if word_count > weights.substance_threshold {
        score += weights.substance_bonus;
    }

    score.clamp(0.0, 100.0) as u8
}

/// Prose is considered properly capitalized when at least half of its
/// sentences begin with an uppercase letter.
fn has_proper_capitalization(sentences: &[String]) -> bool {
    if sentences.is_empty() {
        return false;
    }

    let capitalized = sentences
        .iter()
        .filter_map(|s| s.chars().find(|c| c.is_alphabetic()))
        .filter(char::is_ascii_uppercase)
        .count();

    capitalized * 2 >= sentences.len()
}
