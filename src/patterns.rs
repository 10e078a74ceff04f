//! Compiled regex patterns and CSS selectors for the pipeline.
//!
//! All patterns are compiled once at startup using `LazyLock`.
//! Patterns are organized by their purpose: boilerplate stripping,
//! date recognition, media matching, and text cleaning.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Boilerplate Detection
// =============================================================================

/// Matches class/id names of containers that never hold main content:
/// advertisement, social, comment, sidebar, and menu blocks.
pub static NOISE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\bad\b|\bads\b|advert|advertisement|sponsor|promo|social|share|comment|sidebar|\bmenu\b|navbar|navigation|breadcrumb|cookie|popup|modal|newsletter|subscribe|related|recommend)",
    )
    .expect("NOISE_CLASS regex")
});

/// Tags removed wholesale before candidate scoring.
pub const NOISE_TAG_SELECTOR: &str =
    "script, style, noscript, template, nav, header, footer, aside, form, iframe";

// =============================================================================
// Content Identification
// =============================================================================

/// Candidate content selectors, in priority order. Earlier entries are
/// more likely to wrap exactly the article body.
pub const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "[role='main']",
    "main",
    ".article-content",
    ".article-body",
    ".post-content",
    ".entry-content",
    ".story-body",
    "#article",
    "#content",
    ".content",
    ".post",
    ".story",
];

// =============================================================================
// Date Recognition
// =============================================================================

/// Matches `YYYY-MM-DD` (also `YYYY/MM/DD`).
pub static DATE_YMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})[-/](\d{1,2})[-/](\d{1,2})").expect("DATE_YMD regex")
});

/// Matches `MM/DD/YYYY`.
pub static DATE_MDY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").expect("DATE_MDY regex")
});

/// Matches `Month D, YYYY` with full or abbreviated month names.
pub static DATE_TEXTUAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|sept|oct|nov|dec)\.?\s+(\d{1,2}),?\s+(\d{4})")
        .expect("DATE_TEXTUAL regex")
});

// =============================================================================
// Media Matching
// =============================================================================

/// Matches embedded-player URLs for the common video hosts.
pub static VIDEO_EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(youtube\.com/(?:embed|watch)|youtu\.be/|vimeo\.com/|dailymotion\.com/(?:embed|video)|wistia\.(?:com|net)/|player\.twitch\.tv/)",
    )
    .expect("VIDEO_EMBED regex")
});

/// Lazy-load attributes tried when `src` is empty or a placeholder.
pub const LAZY_SRC_ATTRS: &[&str] = &["data-src", "data-lazy-src", "data-original"];

// =============================================================================
// Text Cleaning
// =============================================================================

/// Matches runs of spaces/tabs for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("WHITESPACE_NORMALIZE regex"));

/// Matches runs of three or more newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// Matches any whitespace run, used to collapse backend input to single spaces.
pub static ANY_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("ANY_WHITESPACE regex"));

/// Characters outside this conservative allowlist are stripped from
/// backend input.
pub static MODEL_INPUT_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^\w\s.,!?;:'"()\-]"#).expect("MODEL_INPUT_DISALLOWED regex")
});

/// Sentence boundary: terminal punctuation followed by whitespace.
pub static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s+").expect("SENTENCE_SPLIT regex"));

/// Leading "by" prefix on author bylines.
pub static AUTHOR_BY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^by\s+").expect("AUTHOR_BY_PREFIX regex"));

/// Punctuation stripped from words when synthesizing segment titles.
pub static TITLE_WORD_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("TITLE_WORD_PUNCT regex"));

// =============================================================================
// Stopwords
// =============================================================================

/// Small stopword set excluded from segment-title synthesis.
pub const TITLE_STOPWORDS: &[&str] = &[
    "about", "after", "again", "being", "could", "every", "first", "their",
    "there", "these", "thing", "things", "think", "those", "through", "under",
    "where", "which", "while", "would", "other", "should", "because", "between",
];

// =============================================================================
// URL Admissibility
// =============================================================================

/// Path extensions that mark a URL as a non-document resource:
/// documents, spreadsheets, archives, and executables.
pub const BLOCKED_EXTENSIONS: &[&str] = &[
    ".pdf", ".doc", ".docx", ".odt", ".rtf", ".ppt", ".pptx", ".xls", ".xlsx",
    ".ods", ".csv", ".zip", ".tar", ".gz", ".tgz", ".rar", ".7z", ".exe",
    ".msi", ".dmg", ".apk", ".bin",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_class_matches_boilerplate_containers() {
        assert!(NOISE_CLASS.is_match("sidebar-widget"));
        assert!(NOISE_CLASS.is_match("social-share"));
        assert!(NOISE_CLASS.is_match("comment-list"));
        assert!(NOISE_CLASS.is_match("ad"));
        assert!(!NOISE_CLASS.is_match("article-body"));
        // "ad" must not fire inside ordinary words
        assert!(!NOISE_CLASS.is_match("heading"));
        assert!(!NOISE_CLASS.is_match("readers"));
    }

    #[test]
    fn date_patterns_match_expected_formats() {
        assert!(DATE_YMD.is_match("2023-07-14"));
        assert!(DATE_YMD.is_match("2023/7/4"));
        assert!(DATE_MDY.is_match("07/14/2023"));
        assert!(DATE_TEXTUAL.is_match("July 14, 2023"));
        assert!(DATE_TEXTUAL.is_match("Jan 2 1999"));
    }

    #[test]
    fn video_embed_matches_player_urls() {
        assert!(VIDEO_EMBED.is_match("https://www.youtube.com/embed/abc123"));
        assert!(VIDEO_EMBED.is_match("https://youtu.be/abc123"));
        assert!(VIDEO_EMBED.is_match("https://player.vimeo.com/video/1234"));
        assert!(!VIDEO_EMBED.is_match("https://example.com/video.mp4"));
    }

    #[test]
    fn model_input_disallowed_strips_exotic_characters() {
        let cleaned = MODEL_INPUT_DISALLOWED.replace_all("text © with ★ symbols", "");
        assert_eq!(cleaned, "text  with  symbols");
    }
}
