//! Summarization and script-assembly pipeline.
//!
//! Takes an [`ExtractedDocument`] and produces a [`PodcastScript`].
//! Body text is chunked to fit backend input limits, each chunk is
//! summarized through a dual path (generative backend when bound, the
//! deterministic extractive fallback otherwise or on failure), and the
//! per-chunk summaries are reassembled in chunk order into segments,
//! key points, and the full narration script.

pub mod chunking;
pub mod engine;
pub mod script;

use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::options::SummaryOptions;
use crate::result::{ExtractedDocument, PodcastScript};

use chunking::chunk_by_words;
use engine::{clean_model_input, ExtractiveSummarizer, SummaryLimits, TextSummarizer};

/// Minimum extracted word count before summarization should be
/// attempted. Enforced by [`crate::generate_script`]; callers invoking
/// the summarizer directly apply it themselves.
pub const MIN_CONTENT_WORDS: usize = 50;

/// Process-lifetime summarizer state.
///
/// Tracks whether initialization ran and whether the pipeline degraded
/// to the deterministic fallback. Once fallback is entered it is never
/// automatically retried within the same run.
#[derive(Debug, Clone, Copy, Default)]
struct SummarizerState {
    initialized: bool,
    using_fallback: bool,
}

/// The summarization pipeline.
///
/// Construct once and reuse; the only mutable state is the lazily
/// initialized summarizer state, guarded by a mutex so concurrent
/// first calls initialize at most once.
pub struct Summarizer {
    options: SummaryOptions,
    backend: Option<Box<dyn TextSummarizer>>,
    fallback: ExtractiveSummarizer,
    state: Mutex<SummarizerState>,
}

impl Summarizer {
    /// A summarizer with no generative backend: every call uses the
    /// deterministic extractive fallback.
    #[must_use]
    pub fn new(options: SummaryOptions) -> Self {
        Self {
            options,
            backend: None,
            fallback: ExtractiveSummarizer::default(),
            state: Mutex::new(SummarizerState::default()),
        }
    }

    /// A summarizer bound to a generative backend.
    #[must_use]
    pub fn with_backend(options: SummaryOptions, backend: Box<dyn TextSummarizer>) -> Self {
        Self {
            options,
            backend: Some(backend),
            fallback: ExtractiveSummarizer::default(),
            state: Mutex::new(SummarizerState::default()),
        }
    }

    /// Lazily initialize, returning whether the pipeline is degraded.
    ///
    /// Idempotent: repeated or concurrent calls after initialization
    /// are no-ops. A missing backend is not fatal; it flips the
    /// fallback flag and the pipeline proceeds deterministically.
    fn ensure_initialized(&self) -> bool {
        let Ok(mut state) = self.state.lock() else {
            // Poisoned lock: a prior panic mid-initialization. Run degraded.
            return true;
        };

        if !state.initialized {
            state.initialized = true;
            state.using_fallback = self.backend.is_none();
            if state.using_fallback {
                warn!("no generative backend bound, entering extractive fallback mode");
            } else {
                debug!("summarizer initialized with generative backend");
            }
        }

        state.using_fallback
    }

    /// Identifier of the backend the pipeline reports.
    fn model_name(&self, using_fallback: bool) -> String {
        if using_fallback {
            return self.fallback.name().to_string();
        }
        self.backend
            .as_ref()
            .map_or_else(|| self.fallback.name().to_string(), |b| b.name().to_string())
    }

    /// Summarize one chunk, returning the summary and whether the
    /// fallback produced it. A backend failure degrades this chunk
    /// only; it never aborts the pipeline.
    fn summarize_chunk(&self, chunk: &str, using_fallback: bool) -> (String, bool) {
        if !using_fallback {
            if let Some(backend) = &self.backend {
                let input = clean_model_input(chunk, self.options.model_input_cap);
                let limits = SummaryLimits {
                    max_length: self.options.model_max_length.min(input.chars().count() / 3),
                    min_length: self.options.model_min_length,
                };
                match backend.summarize_text(&input, &limits) {
                    Ok(summary) if !summary.trim().is_empty() => {
                        return (summary.trim().to_string(), false);
                    }
                    Ok(_) => {
                        warn!("backend returned an empty summary, using fallback for chunk");
                    }
                    Err(err) => {
                        warn!(error = %err, "backend failed, using fallback for chunk");
                    }
                }
            }
        }

        (self.fallback.extract_summary(chunk), true)
    }

    /// Produce the brief synopsis of the combined summary.
    fn brief_summary(&self, combined: &str, using_fallback: bool) -> String {
        if combined.chars().count() < self.options.brief_summary_threshold {
            return combined.to_string();
        }

        if !using_fallback {
            if let Some(backend) = &self.backend {
                let input = clean_model_input(combined, self.options.model_input_cap);
                let limits = SummaryLimits {
                    max_length: self.options.brief_max_length,
                    min_length: self.options.brief_min_length,
                };
                if let Ok(summary) = backend.summarize_text(&input, &limits) {
                    let summary = summary.trim();
                    if !summary.is_empty() {
                        return summary.to_string();
                    }
                }
                warn!("backend failed on brief summary, using extractive fallback");
            }
        }

        // Fallback of the fallback: extractive, then truncate.
        let extracted = self.fallback.extract_summary(combined);
        crate::text::truncate_chars(&extracted, self.options.brief_summary_threshold)
    }

    /// Summarize an extracted document into a podcast script.
    ///
    /// Sub-stage failures (backend load, per-chunk calls, the brief
    /// summary) degrade gracefully. The only error is pipeline-fatal:
    /// input with nothing to summarize.
    pub fn summarize(&self, document: &ExtractedDocument) -> Result<PodcastScript> {
        let body = document.body_text.trim();
        if body.is_empty() {
            return Err(Error::Summarization(
                "document has no body text".to_string(),
            ));
        }

        let state_fallback = self.ensure_initialized();

        let chunks: Vec<String> = chunk_by_words(body, self.options.chunk_words)
            .into_iter()
            .filter(|chunk| {
                clean_model_input(chunk, self.options.model_input_cap).chars().count()
                    >= self.options.min_chunk_chars
            })
            .collect();

        if chunks.is_empty() {
            return Err(Error::Summarization(
                "no summarizable content after chunking".to_string(),
            ));
        }

        debug!(chunks = chunks.len(), "summarizing chunks");

        // Chunk summaries are reassembled in original chunk order;
        // order is significant for narrative coherence.
        let mut any_chunk_fell_back = false;
        let summaries: Vec<String> = chunks
            .iter()
            .map(|chunk| {
                let (summary, fell_back) = self.summarize_chunk(chunk, state_fallback);
                any_chunk_fell_back |= fell_back;
                summary
            })
            .filter(|summary| !summary.is_empty())
            .collect();

        let combined = summaries.join(" ");
        if combined.trim().is_empty() {
            return Err(Error::Summarization(
                "no summary could be produced for any chunk".to_string(),
            ));
        }

        let using_fallback = state_fallback || any_chunk_fell_back;

        let intro = script::render_intro(&document.title, &document.author);
        let segments = script::build_segments(&combined, &self.options);
        let outro = script::render_outro();
        let full_script = script::render_full_script(&intro, &segments, &outro);
        let brief_summary = self.brief_summary(&combined, state_fallback);
        let key_points = script::pick_key_points(&combined, &self.options);
        let read_time = script::estimate_read_time(&full_script, &self.options);

        Ok(PodcastScript {
            intro,
            segments,
            outro,
            full_script,
            brief_summary,
            key_points,
            read_time,
            model_used: self.model_name(using_fallback),
            using_fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ContentMetrics;

    fn document(body: &str) -> ExtractedDocument {
        ExtractedDocument {
            title: "Test Article".to_string(),
            author: "Jane Doe".to_string(),
            body_text: body.to_string(),
            source_url: "https://example.com/a".to_string(),
            metrics: ContentMetrics {
                word_count: body.split_whitespace().count(),
                reading_time_minutes: 1,
                quality_score: 50,
            },
            ..ExtractedDocument::default()
        }
    }

    const PROSE: &str = "The opening sentence of the body introduces the subject at a comfortable length. \
        A second sentence develops the idea with supporting detail and context. \
        The third sentence pushes the narrative forward with further analysis. \
        A fourth sentence offers an example that grounds the discussion. \
        The fifth sentence reflects on implications for practitioners. \
        A sixth sentence closes the argument with a measured conclusion.";

    #[test]
    fn fallback_summarizer_produces_well_formed_script() {
        let summarizer = Summarizer::new(SummaryOptions::default());
        let script = match summarizer.summarize(&document(PROSE)) {
            Ok(script) => script,
            Err(err) => panic!("expected Ok(_), got Err({err})"),
        };

        assert!(script.using_fallback);
        assert_eq!(script.model_used, "extractive-heuristic");
        assert!(!script.segments.is_empty());
        assert!(!script.brief_summary.is_empty());
        assert!(script.intro.contains("Test Article"));
        assert!(script.intro.contains("Jane Doe"));
        assert!(script::reconstructs_exactly(&script));
    }

    #[test]
    fn empty_body_is_pipeline_fatal() {
        let summarizer = Summarizer::new(SummaryOptions::default());
        let result = summarizer.summarize(&document("   "));
        assert!(matches!(result, Err(Error::Summarization(_))));
    }

    #[test]
    fn initialization_is_idempotent() {
        let summarizer = Summarizer::new(SummaryOptions::default());
        assert!(summarizer.ensure_initialized());
        assert!(summarizer.ensure_initialized());
    }

    #[test]
    fn segment_orders_are_sequential() {
        let summarizer = Summarizer::new(SummaryOptions::default());
        let script = match summarizer.summarize(&document(PROSE)) {
            Ok(script) => script,
            Err(err) => panic!("expected Ok(_), got Err({err})"),
        };
        for (index, segment) in script.segments.iter().enumerate() {
            assert_eq!(segment.order, index + 1);
        }
    }
}
