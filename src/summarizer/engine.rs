//! Summarization backends.
//!
//! The pipeline talks to a single capability interface,
//! [`TextSummarizer`], with two kinds of implementation: a generative
//! model supplied by the caller, and the built-in deterministic
//! [`ExtractiveSummarizer`]. The pipeline is agnostic to which variant
//! is bound; the binding is chosen at initialization and swapped per
//! call when a backend fails.

use crate::error::Result;
use crate::patterns::MODEL_INPUT_DISALLOWED;
use crate::text::{collapse_whitespace, split_sentences, truncate_chars};

/// Length bounds for one summarization call.
///
/// Backends must honor these and must decode deterministically: given
/// identical input and limits, the output must be identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLimits {
    /// Upper bound on summary length.
    pub max_length: usize,

    /// Lower bound on summary length.
    pub min_length: usize,
}

/// A summarization capability.
///
/// One method, two variants: generative-model-backed (injected by the
/// caller) and extractive-heuristic-backed (built in).
pub trait TextSummarizer: Send + Sync {
    /// Identifier reported in `PodcastScript::model_used`.
    fn name(&self) -> &str;

    /// Produce a summary of `text` within `limits`.
    fn summarize_text(&self, text: &str, limits: &SummaryLimits) -> Result<String>;
}

/// Prepare text for a generative backend.
///
/// Collapses whitespace, strips characters outside a conservative
/// punctuation allowlist, and truncates to the input cap.
#[must_use]
pub fn clean_model_input(text: &str, input_cap: usize) -> String {
    let stripped = MODEL_INPUT_DISALLOWED.replace_all(text, "");
    let collapsed = collapse_whitespace(&stripped);
    truncate_chars(&collapsed, input_cap)
}

/// Deterministic extractive summarizer.
///
/// Selects existing sentences verbatim: sentences above the length
/// floor are scored by position and length, the top `top_sentences`
/// are kept, and the keepers are restored to source order before
/// joining. The two-stage sort matters: score picks salience, index
/// order preserves the narrative.
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    /// Number of sentences to keep. Default: `3`
    pub top_sentences: usize,

    /// Sentences at or below this many characters are ignored. Default: `20`
    pub min_sentence_chars: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self {
            top_sentences: 3,
            min_sentence_chars: 20,
        }
    }
}

impl ExtractiveSummarizer {
    /// Score one sentence: early position and medium length are salient.
    fn score(index: usize, sentence: &str) -> u32 {
        let position_score = if index < 3 { 2 } else { 1 };
        let chars = sentence.chars().count();
        let length_score = if (50..=200).contains(&chars) { 2 } else { 1 };
        position_score + length_score
    }

    /// Summarize by sentence selection; empty input yields an empty summary.
    #[must_use]
    pub fn extract_summary(&self, text: &str) -> String {
        let sentences = split_sentences(text, self.min_sentence_chars);
        if sentences.is_empty() {
            return String::new();
        }

        let mut scored: Vec<(usize, u32)> = sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| (index, Self::score(index, sentence)))
            .collect();

        // Salience first...
        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        let mut keep: Vec<usize> = scored
            .into_iter()
            .take(self.top_sentences)
            .map(|(index, _)| index)
            .collect();

        // ...then narrative order.
        keep.sort_unstable();

        let selected: Vec<&str> = keep.iter().map(|&index| sentences[index].as_str()).collect();
        format!("{}.", selected.join(". "))
    }
}

impl TextSummarizer for ExtractiveSummarizer {
    fn name(&self) -> &str {
        "extractive-heuristic"
    }

    fn summarize_text(&self, text: &str, _limits: &SummaryLimits) -> Result<String> {
        Ok(self.extract_summary(text))
    }
}
