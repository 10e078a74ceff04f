//! Main-content selection.
//!
//! The hardest subroutine in the extractor: isolate the article body
//! from markup noise with no guaranteed semantic structure. Nodes with
//! non-content roles are stripped first, then every node matched by a
//! prioritized selector list is scored. Raw length alone over-selects
//! menus, so paragraph density rewards prose, link density penalizes
//! navigation, and an image bonus (capped, to avoid overweighting
//! galleries) favors editorial content.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::options::ExtractionOptions;
use crate::patterns::{CONTENT_SELECTORS, NOISE_CLASS, NOISE_TAG_SELECTOR};
use crate::text::normalize_whitespace;

/// Remove markup nodes of non-content roles.
///
/// Drops scripts, styles, navigation, page furniture, and embedded
/// frames by tag, then any container whose class or id names an
/// ad/social/comment/sidebar/menu role.
pub fn strip_noise(doc: &Document) {
    let by_tag = doc.select(NOISE_TAG_SELECTOR).nodes().to_vec();
    for node in by_tag.into_iter().rev() {
        Selection::from(node).remove();
    }

    let all = doc.select("body *").nodes().to_vec();
    for node in all.into_iter().rev() {
        let sel = Selection::from(node);
        let class = sel.attr("class").map(|c| c.to_string()).unwrap_or_default();
        let id = sel.attr("id").map(|i| i.to_string()).unwrap_or_default();
        if (!class.is_empty() && NOISE_CLASS.is_match(&class))
            || (!id.is_empty() && NOISE_CLASS.is_match(&id))
        {
            sel.remove();
        }
    }
}

/// Score a candidate block.
///
/// ```text
/// score = text_length * 0.1 + paragraphs * 50 - links * 10 + min(images * 20, 100)
/// ```
fn score_candidate(sel: &Selection, options: &ExtractionOptions) -> f64 {
    let weights = &options.scoring;
    let text_length = sel.text().trim().chars().count() as f64;
    let paragraphs = sel.select("p").length() as f64;
    let links = sel.select("a").length() as f64;
    let images = sel.select("img").length() as f64;

    text_length * weights.text_weight + paragraphs * weights.paragraph_weight
        - links * weights.link_penalty
        + (images * weights.image_bonus).min(weights.image_bonus_cap)
}

/// Select the main content text from a noise-stripped document.
///
/// The highest-scoring eligible candidate wins. If no candidate reaches
/// the minimum content length, falls back to concatenating all
/// paragraph-level texts above the per-paragraph floor. Returns an
/// empty string when the document simply has no content.
#[must_use]
pub fn select_main_content(doc: &Document, options: &ExtractionOptions) -> String {
    let mut best_score = f64::NEG_INFINITY;
    let mut best_text = String::new();

    for selector in CONTENT_SELECTORS {
        for node in doc.select(selector).nodes() {
            let sel = Selection::from(*node);
            let text = block_text(&sel);
            if text.chars().count() <= options.min_candidate_chars {
                continue;
            }

            let score = score_candidate(&sel, options);
            if score > best_score {
                best_score = score;
                best_text = text;
            }
        }
    }

    if best_text.chars().count() >= options.min_content_chars {
        debug!(score = best_score, "selected candidate block");
        return best_text;
    }

    debug!("no candidate reached the content floor, using paragraph fallback");
    paragraph_fallback(doc, options)
}

/// Extract readable text from a candidate block.
///
/// Paragraph-bearing blocks are rendered paragraph by paragraph so the
/// body keeps its prose structure; bare blocks fall back to the raw
/// text content.
fn block_text(sel: &Selection) -> String {
    let paragraphs: Vec<String> = sel
        .select("p")
        .nodes()
        .iter()
        .map(|node| normalize_whitespace(&Selection::from(*node).text()))
        .filter(|text| !text.is_empty())
        .collect();

    if paragraphs.is_empty() {
        normalize_whitespace(&sel.text())
    } else {
        paragraphs.join("\n\n")
    }
}

/// Last-resort extraction: concatenate every paragraph-level text node
/// whose individual length exceeds the configured floor.
fn paragraph_fallback(doc: &Document, options: &ExtractionOptions) -> String {
    let paragraphs: Vec<String> = doc
        .select("p")
        .nodes()
        .iter()
        .map(|node| normalize_whitespace(&Selection::from(*node).text()))
        .filter(|text| text.chars().count() > options.min_paragraph_chars)
        .collect();

    paragraphs.join("\n\n")
}
