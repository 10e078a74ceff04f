//! Content extraction engine.
//!
//! Converts a raw HTML document plus a source URL into a normalized
//! [`ExtractedDocument`]. Metadata is harvested from the full document
//! first (meta tags live in the head, which later stripping would
//! disturb), videos are collected before frames are removed, then the
//! document is noise-stripped and the main content selected by
//! candidate scoring.

pub mod content;
pub mod dates;
pub mod media;
pub mod metadata;
pub mod metrics;

use dom_query::Document;
use tracing::debug;

use crate::error::{Error, Result};
use crate::options::ExtractionOptions;
use crate::result::ExtractedDocument;
use crate::url_utils;

/// Extract a structured document from raw HTML.
///
/// Never fails for malformed-but-parseable documents; individual
/// fields degrade to empty defaults. The only error condition is a
/// source URL that cannot be decomposed into scheme/host/path.
pub fn extract_document(
    html: &str,
    source_url: &str,
    options: &ExtractionOptions,
) -> Result<ExtractedDocument> {
    let Some(base) = url_utils::parse_source_url(source_url) else {
        return Err(Error::InvalidUrl(source_url.to_string()));
    };
    let domain = base
        .host_str()
        .map(std::string::ToString::to_string)
        .unwrap_or_default();

    let doc = Document::from(html);

    // Metadata first: it lives in the head and in containers that noise
    // stripping removes.
    let title = metadata::extract_title(&doc, options);
    let description = metadata::extract_description(&doc, options);
    let author = metadata::extract_author(&doc, options);
    let publish_date = metadata::extract_publish_date(&doc);
    let language = metadata::extract_language(&doc);
    let keywords = metadata::extract_keywords(&doc);
    let canonical_url = metadata::extract_canonical_url(&doc);
    let content_type = metadata::classify_content(&doc, source_url);

    // Videos ride in iframes, which stripping removes as noise.
    let video_urls = media::extract_videos(&doc, &base, options);

    content::strip_noise(&doc);

    let body_text = content::select_main_content(&doc, options);
    let images = media::extract_images(&doc, &base, options);
    let metrics = metrics::compute_metrics(&body_text, options);

    debug!(
        words = metrics.word_count,
        quality = metrics.quality_score,
        "extraction complete"
    );

    Ok(ExtractedDocument {
        title,
        description,
        author,
        publish_date,
        body_text,
        language,
        keywords,
        canonical_url,
        content_type,
        images,
        video_urls,
        source_url: source_url.trim().to_string(),
        domain,
        metrics,
    })
}
