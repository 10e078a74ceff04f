//! # pagecast
//!
//! Turns an arbitrary web page into a structured, podcast-style
//! narration script.
//!
//! Two components compose in a strict pipeline: the **extractor**
//! isolates the real article content from markup noise (candidate
//! scoring, metadata fallback chains, quality metrics), and the
//! **summarizer** compresses that content into a bounded spoken-word
//! script, with a deterministic extractive fallback when no generative
//! backend is available.
//!
//! The crate performs no network I/O: callers supply the raw HTML and
//! the URL it came from, and receive either a complete result or one
//! explicit error, never a partial one.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagecast::{extract, Summarizer, SummaryOptions};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><p>Main content here, long enough to matter.</p></article></body></html>"#;
//!
//! let doc = extract(html, "https://example.com/article")?;
//! println!("Title: {}", doc.title);
//! println!("Quality: {}", doc.metrics.quality_score);
//!
//! let summarizer = Summarizer::new(SummaryOptions::default());
//! if doc.metrics.word_count >= pagecast::MIN_CONTENT_WORDS {
//!     let script = summarizer.summarize(&doc)?;
//!     println!("{}", script.full_script);
//! }
//! # Ok::<(), pagecast::Error>(())
//! ```

mod error;
mod options;
mod patterns;
mod result;

/// Content extraction engine (metadata chains, candidate scoring, metrics).
pub mod extractor;

/// Summarization and script-assembly pipeline.
pub mod summarizer;

/// Text segmentation and normalization helpers.
pub mod text;

/// URL validation and resolution utilities.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{ExtractionOptions, QualityWeights, ScoringWeights, SummaryOptions};
pub use result::{
    ContentMetrics, ContentType, ExtractedDocument, MediaImage, PodcastScript, ReadTime,
    ScriptSegment,
};
pub use summarizer::engine::{ExtractiveSummarizer, SummaryLimits, TextSummarizer};
pub use summarizer::{Summarizer, MIN_CONTENT_WORDS};

/// Extracts a structured document from an HTML string using default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `source_url` - The URL the document was fetched from
///
/// # Returns
///
/// Returns `Ok(ExtractedDocument)` with whatever could be extracted;
/// degraded fields are empty rather than errors. Fails only when
/// `source_url` cannot be decomposed into scheme/host/path.
pub fn extract(html: &str, source_url: &str) -> Result<ExtractedDocument> {
    extract_with_options(html, source_url, &ExtractionOptions::default())
}

/// Extracts a structured document with custom options.
///
/// # Example
///
/// ```rust
/// use pagecast::{extract_with_options, ExtractionOptions};
///
/// let html = "<html><body><article><p>Content</p></article></body></html>";
/// let options = ExtractionOptions {
///     max_images: 5,
///     ..ExtractionOptions::default()
/// };
/// let doc = extract_with_options(html, "https://example.com/a", &options)?;
/// # Ok::<(), pagecast::Error>(())
/// ```
pub fn extract_with_options(
    html: &str,
    source_url: &str,
    options: &ExtractionOptions,
) -> Result<ExtractedDocument> {
    extractor::extract_document(html, source_url, options)
}

/// Extracts a structured document from HTML bytes with automatic
/// encoding detection.
///
/// Detects the charset from meta tags and converts to UTF-8 before
/// extraction; invalid characters are replaced rather than rejected.
pub fn extract_bytes(html: &[u8], source_url: &str) -> Result<ExtractedDocument> {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str, source_url)
}

/// Extracts a structured document from HTML bytes with custom options
/// and automatic encoding detection.
pub fn extract_bytes_with_options(
    html: &[u8],
    source_url: &str,
    options: &ExtractionOptions,
) -> Result<ExtractedDocument> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, source_url, options)
}

/// Runs the full pipeline: extract, gate on minimum content, summarize.
///
/// Documents below [`MIN_CONTENT_WORDS`] are rejected with
/// [`Error::InsufficientContent`] before summarization is attempted.
///
/// # Example
///
/// ```rust
/// use pagecast::{generate_script, Summarizer, SummaryOptions};
///
/// let html = "<html><body><nav>Menu</nav><p>Too little content.</p></body></html>";
/// let summarizer = Summarizer::new(SummaryOptions::default());
/// let result = generate_script(html, "https://example.com/a", &summarizer);
/// assert!(result.is_err()); // below the content gate
/// ```
pub fn generate_script(
    html: &str,
    source_url: &str,
    summarizer: &Summarizer,
) -> Result<PodcastScript> {
    let document = extract(html, source_url)?;
    if document.metrics.word_count < MIN_CONTENT_WORDS {
        return Err(Error::InsufficientContent {
            words: document.metrics.word_count,
            required: MIN_CONTENT_WORDS,
        });
    }
    summarizer.summarize(&document)
}
