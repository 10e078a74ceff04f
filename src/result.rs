//! Output types for extraction and summarization.
//!
//! This module defines the structured output from content extraction
//! (`ExtractedDocument`) and from script generation (`PodcastScript`).
//! Both serialize to flat JSON-compatible objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of the extracted page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Editorial article or blog post.
    Article,
    /// Product or offer page.
    Product,
    /// Recipe page.
    Recipe,
    /// Anything else.
    #[default]
    Webpage,
}

/// An image reference found in the main content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaImage {
    /// Absolute image URL (from `src` or a lazy-load attribute).
    pub url: String,

    /// Alt text from `<img alt="...">`.
    pub alt_text: String,

    /// Declared width, when present and numeric.
    pub width: Option<u32>,

    /// Declared height, when present and numeric.
    pub height: Option<u32>,
}

/// Computed quality metrics for an extracted document.
///
/// These gate whether summarization is attempted downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    /// Whitespace-delimited word count of `body_text`.
    pub word_count: usize,

    /// Estimated reading time, `ceil(word_count / 200)` minutes.
    pub reading_time_minutes: usize,

    /// Heuristic content quality in `[0, 100]`.
    pub quality_score: u8,
}

/// Result of content extraction from an HTML document.
///
/// Constructed once per extraction call and immutable thereafter. The
/// `body_text` field is always whitespace-normalized: no runs of blank
/// lines, no leading/trailing whitespace. An empty string is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Page title (truncated to 200 characters).
    pub title: String,

    /// Page description (truncated to 500 characters).
    pub description: String,

    /// Author byline, with any leading "by " prefix stripped.
    pub author: String,

    /// Publication date, when one could be parsed.
    pub publish_date: Option<DateTime<Utc>>,

    /// Main content as normalized plain text.
    pub body_text: String,

    /// Detected content language (ISO 639-1 code, default "en").
    pub language: String,

    /// Keywords and article tags, in document order.
    pub keywords: Vec<String>,

    /// Canonical URL, when declared.
    pub canonical_url: Option<String>,

    /// Page classification.
    pub content_type: ContentType,

    /// Content images, deduplicated and capped at 10.
    pub images: Vec<MediaImage>,

    /// Embedded video URLs.
    pub video_urls: Vec<String>,

    /// The URL the document was fetched from.
    pub source_url: String,

    /// Hostname extracted from the source URL.
    pub domain: String,

    /// Computed quality metrics.
    pub metrics: ContentMetrics,
}

/// A titled sub-section of the assembled podcast script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSegment {
    /// Synthesized segment title.
    pub title: String,

    /// Narration text for this segment.
    pub content: String,

    /// 1-based sequential position: `segments[i].order == i + 1`.
    pub order: usize,
}

/// Estimated spoken duration of the script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadTime {
    /// Estimated minutes at a spoken-word rate.
    pub minutes: usize,

    /// Word count of the full script.
    pub word_count: usize,
}

/// The assembled podcast-style narration script.
///
/// `full_script` is always the literal concatenation of `intro`, the
/// rendered segments joined with a visible divider, and `outro`; it is
/// never edited independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastScript {
    /// Templated opening referencing the source title/author.
    pub intro: String,

    /// Ordered narration segments.
    pub segments: Vec<ScriptSegment>,

    /// Templated closing.
    pub outro: String,

    /// Intro + segments + outro as one narration text.
    pub full_script: String,

    /// Short synopsis of the content.
    pub brief_summary: String,

    /// Up to 5 key takeaways.
    pub key_points: Vec<String>,

    /// Spoken-duration estimate for `full_script`.
    pub read_time: ReadTime,

    /// Identifier of the summarization backend that produced the script.
    pub model_used: String,

    /// Whether the deterministic extractive fallback was used.
    pub using_fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_serializes_lowercase() {
        let json = serde_json::to_string(&ContentType::Article).unwrap_or_default();
        assert_eq!(json, "\"article\"");
        let json = serde_json::to_string(&ContentType::Webpage).unwrap_or_default();
        assert_eq!(json, "\"webpage\"");
    }

    #[test]
    fn extracted_document_round_trips_through_json() {
        let doc = ExtractedDocument {
            title: "Title".to_string(),
            body_text: "Body text.".to_string(),
            language: "en".to_string(),
            source_url: "https://example.com/a".to_string(),
            domain: "example.com".to_string(),
            metrics: ContentMetrics {
                word_count: 2,
                reading_time_minutes: 1,
                quality_score: 20,
            },
            ..ExtractedDocument::default()
        };

        let json = serde_json::to_string(&doc).unwrap_or_default();
        let back: ExtractedDocument = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(back, doc);
    }
}
