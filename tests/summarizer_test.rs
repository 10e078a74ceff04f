use std::sync::atomic::{AtomicUsize, Ordering};

use pagecast::{
    generate_script, Error, ExtractedDocument, PodcastScript, SummaryLimits, SummaryOptions,
    Summarizer, TextSummarizer,
};

fn document(body: &str) -> ExtractedDocument {
    let mut doc = ExtractedDocument {
        title: "The Future of Tidal Power".to_string(),
        author: "Alex Marin".to_string(),
        body_text: body.to_string(),
        source_url: "https://example.com/tidal".to_string(),
        ..ExtractedDocument::default()
    };
    doc.metrics.word_count = body.split_whitespace().count();
    doc
}

const PROSE: &str = "Tidal generators off the northern coast produced a record amount of power this winter. \
    Engineers attribute the gains to redesigned turbine blades that tolerate debris. \
    The project now supplies electricity to roughly thirty thousand homes. \
    Local fishing crews were consulted throughout the planning process to protect key routes. \
    Early monitoring shows no measurable effect on migratory fish populations. \
    Funding for a second array has already been approved by the regional assembly.";

/// A backend that always raises, for exercising degraded operation.
struct AlwaysFails;

impl TextSummarizer for AlwaysFails {
    fn name(&self) -> &str {
        "always-fails"
    }

    fn summarize_text(&self, _text: &str, _limits: &SummaryLimits) -> pagecast::Result<String> {
        Err(Error::Backend("model unavailable".to_string()))
    }
}

/// A deterministic stand-in generative backend.
struct FixedModel;

impl TextSummarizer for FixedModel {
    fn name(&self) -> &str {
        "fixed-model"
    }

    fn summarize_text(&self, _text: &str, limits: &SummaryLimits) -> pagecast::Result<String> {
        assert!(limits.max_length >= limits.min_length || limits.max_length == 0);
        Ok("The array set a seasonal record. Redesigned blades made the difference. A second array is funded.".to_string())
    }
}

/// Fails on the first call, succeeds afterwards: chunk-local degradation.
struct FlakyModel {
    calls: AtomicUsize,
}

impl TextSummarizer for FlakyModel {
    fn name(&self) -> &str {
        "flaky-model"
    }

    fn summarize_text(&self, _text: &str, _limits: &SummaryLimits) -> pagecast::Result<String> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(Error::Backend("transient failure".to_string()));
        }
        Ok("A later chunk summarized fine by the model.".to_string())
    }
}

fn assert_reconstructs(script: &PodcastScript) {
    let mut parts: Vec<String> = Vec::new();
    parts.push(script.intro.clone());
    for segment in &script.segments {
        parts.push(format!(
            "Segment {}: {}\n\n{}",
            segment.order, segment.title, segment.content
        ));
    }
    parts.push(script.outro.clone());
    assert_eq!(script.full_script, parts.join("\n\n---\n\n"));
}

#[test]
fn fallback_mode_produces_well_formed_script() {
    let summarizer = Summarizer::new(SummaryOptions::default());
    let script = match summarizer.summarize(&document(PROSE)) {
        Ok(script) => script,
        Err(err) => panic!("expected Ok(_), got Err({err})"),
    };

    assert!(script.using_fallback);
    assert_eq!(script.model_used, "extractive-heuristic");
    assert!(!script.segments.is_empty());
    assert!(!script.brief_summary.is_empty());
    assert!(script.key_points.len() <= 5);
    assert_reconstructs(&script);
}

#[test]
fn always_raising_model_still_yields_script_with_fallback_flag() {
    let summarizer =
        Summarizer::with_backend(SummaryOptions::default(), Box::new(AlwaysFails));
    let script = match summarizer.summarize(&document(PROSE)) {
        Ok(script) => script,
        Err(err) => panic!("expected Ok(_), got Err({err})"),
    };

    assert!(script.using_fallback);
    assert!(!script.segments.is_empty());
    assert_reconstructs(&script);
}

#[test]
fn bound_model_is_used_and_reported() {
    let summarizer = Summarizer::with_backend(SummaryOptions::default(), Box::new(FixedModel));
    let script = match summarizer.summarize(&document(PROSE)) {
        Ok(script) => script,
        Err(err) => panic!("expected Ok(_), got Err({err})"),
    };

    assert!(!script.using_fallback);
    assert_eq!(script.model_used, "fixed-model");
    assert!(script.full_script.contains("seasonal record"));
}

#[test]
fn backend_failure_is_chunk_local() {
    // Two chunks: the first backend call fails, the second succeeds.
    let options = SummaryOptions {
        chunk_words: 30,
        ..SummaryOptions::default()
    };
    let summarizer = Summarizer::with_backend(
        options,
        Box::new(FlakyModel {
            calls: AtomicUsize::new(0),
        }),
    );

    let script = match summarizer.summarize(&document(PROSE)) {
        Ok(script) => script,
        Err(err) => panic!("expected Ok(_), got Err({err})"),
    };

    // The failed chunk degraded to extraction, the rest used the model.
    assert!(script.using_fallback);
    assert!(script.full_script.contains("A later chunk summarized fine"));
}

#[test]
fn extractive_selection_preserves_source_order() {
    let summarizer = Summarizer::new(SummaryOptions::default());
    let body = "Paragraph one is here. Short. Another full sentence follows for analysis. Final concluding remark with enough length to qualify.";
    let script = match summarizer.summarize(&document(body)) {
        Ok(script) => script,
        Err(err) => panic!("expected Ok(_), got Err({err})"),
    };

    let combined = &script.brief_summary;
    let first = combined.find("Paragraph one is here");
    let second = combined.find("Another full sentence follows for analysis");
    let third = combined.find("Final concluding remark");
    assert!(first.is_some() && second.is_some() && third.is_some());
    assert!(first < second);
    assert!(second < third);

    // Key points are every other sentence of the combined summary.
    assert!(!script.key_points.is_empty());
    assert!(script.key_points.len() <= 5);
    assert_eq!(script.key_points[0], "Paragraph one is here.");
    assert_eq!(script.key_points[1], "Final concluding remark with enough length to qualify.");
}

#[test]
fn short_combined_summary_is_brief_summary_verbatim() {
    let summarizer = Summarizer::new(SummaryOptions::default());
    let body = "Paragraph one is here. Short. Another full sentence follows for analysis. Final concluding remark with enough length to qualify.";
    let script = match summarizer.summarize(&document(body)) {
        Ok(script) => script,
        Err(err) => panic!("expected Ok(_), got Err({err})"),
    };

    // Combined summary is under 200 characters, so it is used verbatim.
    assert_eq!(
        script.brief_summary,
        "Paragraph one is here. Another full sentence follows for analysis. Final concluding remark with enough length to qualify."
    );
}

#[test]
fn segments_are_ordered_and_titled() {
    let summarizer = Summarizer::new(SummaryOptions::default());
    let script = match summarizer.summarize(&document(PROSE)) {
        Ok(script) => script,
        Err(err) => panic!("expected Ok(_), got Err({err})"),
    };

    for (index, segment) in script.segments.iter().enumerate() {
        assert_eq!(segment.order, index + 1);
        assert!(!segment.title.is_empty());
        assert!(!segment.content.is_empty());
        assert!(script.full_script.contains(&segment.content));
    }
}

#[test]
fn read_time_reflects_full_script() {
    let summarizer = Summarizer::new(SummaryOptions::default());
    let script = match summarizer.summarize(&document(PROSE)) {
        Ok(script) => script,
        Err(err) => panic!("expected Ok(_), got Err({err})"),
    };

    let words = script.full_script.split_whitespace().count();
    assert_eq!(script.read_time.word_count, words);
    assert_eq!(script.read_time.minutes, words.div_ceil(150));
}

#[test]
fn empty_document_is_a_single_explicit_error() {
    let summarizer = Summarizer::new(SummaryOptions::default());
    let result = summarizer.summarize(&document(""));
    match result {
        Err(Error::Summarization(message)) => {
            assert!(message.contains("body"));
        }
        other => panic!("expected Err(Summarization), got {other:?}"),
    }
}

#[test]
fn content_gate_rejects_thin_pages() {
    let html = "<html><body><article><p>Just a few words of content here, nowhere near enough to summarize.</p></article></body></html>";
    let summarizer = Summarizer::new(SummaryOptions::default());
    let result = generate_script(html, "https://example.com/thin", &summarizer);
    assert!(matches!(result, Err(Error::InsufficientContent { .. })));
}

#[test]
fn content_gate_passes_substantial_pages() {
    let paragraphs: String = (0..6)
        .map(|i| {
            format!(
                "<p>Paragraph number {i} carries a full sentence of article prose with enough words to count toward the gate.</p>"
            )
        })
        .collect();
    let html = format!("<html><body><article>{paragraphs}</article></body></html>");

    let summarizer = Summarizer::new(SummaryOptions::default());
    let script = match generate_script(&html, "https://example.com/full", &summarizer) {
        Ok(script) => script,
        Err(err) => panic!("expected Ok(_), got Err({err})"),
    };

    assert!(!script.segments.is_empty());
    assert_reconstructs(&script);
}
