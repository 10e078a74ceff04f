//! Media reference extraction.
//!
//! Images are deduplicated by source attribute (with lazy-load
//! fallbacks), resolved to absolute URLs against the source URL, and
//! capped. Invalid URLs are silently skipped. Videos are matched by
//! embedded-player URL patterns and bounded defensively.

use std::collections::HashSet;

use dom_query::{Document, Selection};
use url::Url;

use crate::options::ExtractionOptions;
use crate::patterns::{LAZY_SRC_ATTRS, VIDEO_EMBED};
use crate::result::MediaImage;
use crate::url_utils::resolve_absolute;

/// Extract content images, deduplicated and capped.
#[must_use]
pub fn extract_images(doc: &Document, base: &Url, options: &ExtractionOptions) -> Vec<MediaImage> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut images = Vec::new();

    for node in doc.select("img").nodes() {
        if images.len() >= options.max_images {
            break;
        }

        let sel = Selection::from(*node);
        let Some(src) = image_source(&sel) else {
            continue;
        };
        let Some(url) = resolve_absolute(&src, base) else {
            continue;
        };
        if !seen.insert(url.clone()) {
            continue;
        }

        images.push(MediaImage {
            url,
            alt_text: sel.attr("alt").map(|a| a.trim().to_string()).unwrap_or_default(),
            width: dimension(&sel, "width"),
            height: dimension(&sel, "height"),
        });
    }

    images
}

/// The effective source of an image: `src` unless it is empty or an
/// inline placeholder, in which case the lazy-load attributes are tried.
fn image_source(sel: &Selection) -> Option<String> {
    let src = sel.attr("src").map(|s| s.trim().to_string()).unwrap_or_default();
    if !src.is_empty() && !src.starts_with("data:") {
        return Some(src);
    }

    for attr in LAZY_SRC_ATTRS {
        if let Some(lazy) = sel.attr(attr) {
            let lazy = lazy.trim().to_string();
            if !lazy.is_empty() {
                return Some(lazy);
            }
        }
    }

    None
}

fn dimension(sel: &Selection, attr: &str) -> Option<u32> {
    sel.attr(attr)
        .and_then(|value| value.trim().trim_end_matches("px").parse().ok())
}

/// Extract embedded video URLs, deduplicated and capped.
#[must_use]
pub fn extract_videos(doc: &Document, base: &Url, options: &ExtractionOptions) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut videos = Vec::new();

    for node in doc.select("iframe, embed").nodes() {
        if videos.len() >= options.max_videos {
            break;
        }

        let sel = Selection::from(*node);
        let Some(src) = sel.attr("src").map(|s| s.trim().to_string()) else {
            continue;
        };
        let Some(url) = resolve_absolute(&src, base) else {
            continue;
        };
        if VIDEO_EMBED.is_match(&url) && seen.insert(url.clone()) {
            videos.push(url);
        }
    }

    videos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        match Url::parse("https://example.com/articles/one") {
            Ok(url) => url,
            Err(err) => panic!("base URL should parse: {err}"),
        }
    }

    #[test]
    fn images_resolve_relative_urls() {
        let doc = Document::from(
            r#"<html><body><img src="/img/a.jpg" alt="First" width="640" height="480"></body></html>"#,
        );
        let images = extract_images(&doc, &base(), &ExtractionOptions::default());
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "https://example.com/img/a.jpg");
        assert_eq!(images[0].alt_text, "First");
        assert_eq!(images[0].width, Some(640));
        assert_eq!(images[0].height, Some(480));
    }

    #[test]
    fn images_deduplicate_by_resolved_source() {
        let doc = Document::from(
            r#"<html><body>
                <img src="/img/a.jpg">
                <img src="https://example.com/img/a.jpg">
                <img src="/img/b.jpg">
            </body></html>"#,
        );
        let images = extract_images(&doc, &base(), &ExtractionOptions::default());
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn images_use_lazy_load_attribute_when_src_is_placeholder() {
        let doc = Document::from(
            r#"<html><body><img src="data:image/gif;base64,R0lGOD" data-src="/img/real.jpg"></body></html>"#,
        );
        let images = extract_images(&doc, &base(), &ExtractionOptions::default());
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "https://example.com/img/real.jpg");
    }

    #[test]
    fn images_are_capped() {
        let tags: String = (0..30).map(|i| format!("<img src=\"/img/{i}.jpg\">")).collect();
        let doc = Document::from(format!("<html><body>{tags}</body></html>"));
        let images = extract_images(&doc, &base(), &ExtractionOptions::default());
        assert_eq!(images.len(), 10);
    }

    #[test]
    fn images_without_usable_source_are_skipped() {
        let doc = Document::from(r#"<html><body><img alt="no source"><img src=""></body></html>"#);
        let images = extract_images(&doc, &base(), &ExtractionOptions::default());
        assert!(images.is_empty());
    }

    #[test]
    fn videos_match_player_patterns_only() {
        let doc = Document::from(
            r#"<html><body>
                <iframe src="https://www.youtube.com/embed/abc123"></iframe>
                <iframe src="https://player.vimeo.com/video/99"></iframe>
                <iframe src="https://example.com/widget"></iframe>
            </body></html>"#,
        );
        let videos = extract_videos(&doc, &base(), &ExtractionOptions::default());
        assert_eq!(
            videos,
            vec![
                "https://www.youtube.com/embed/abc123".to_string(),
                "https://player.vimeo.com/video/99".to_string(),
            ]
        );
    }
}
