//! Script assembly.
//!
//! Turns the combined chunk summaries into the final narration:
//! segments of grouped sentences with synthesized titles, templated
//! intro and outro, key points, and the concatenated full script.
//! `full_script` is always rebuilt by [`render_full_script`] and never
//! edited independently, so reconstruction from parts is exact.

use crate::options::SummaryOptions;
use crate::patterns::{TITLE_STOPWORDS, TITLE_WORD_PUNCT};
use crate::result::{PodcastScript, ReadTime, ScriptSegment};
use crate::text::{count_words, split_sentences};

/// Divider rendered between script parts.
pub const SCRIPT_DIVIDER: &str = "\n\n---\n\n";

/// Title used when a segment has no important words to draw from.
const FALLBACK_SEGMENT_TITLE: &str = "Key Insights";

/// Build the templated intro for a source document.
#[must_use]
pub fn render_intro(title: &str, author: &str) -> String {
    let topic = if title.is_empty() { "today's story" } else { title };
    let mut intro = format!("Welcome to today's episode! We're diving into: {topic}.");
    if !author.is_empty() {
        intro.push_str(&format!(" This piece was written by {author}."));
    }
    intro.push_str(" Let's get started!");
    intro
}

/// Build the templated outro.
#[must_use]
pub fn render_outro() -> String {
    "That wraps up today's episode. Thanks for listening, and we'll see you next time!"
        .to_string()
}

/// Group the combined summary's sentences into titled segments.
#[must_use]
pub fn build_segments(combined_summary: &str, options: &SummaryOptions) -> Vec<ScriptSegment> {
    let sentences = split_sentences(combined_summary, 0);
    let per_segment = options.sentences_per_segment.max(1);

    sentences
        .chunks(per_segment)
        .enumerate()
        .map(|(index, run)| {
            let content = format!("{}.", run.join(". "));
            ScriptSegment {
                title: synthesize_title(&content),
                content,
                order: index + 1,
            }
        })
        .collect()
}

/// Synthesize a segment title from up to 3 important words.
///
/// Important means longer than 4 characters and not a stopword;
/// punctuation is stripped before the check.
fn synthesize_title(content: &str) -> String {
    let words: Vec<String> = content
        .split_whitespace()
        .map(|word| TITLE_WORD_PUNCT.replace_all(word, "").to_string())
        .filter(|word| word.chars().count() > 4)
        .filter(|word| !TITLE_STOPWORDS.contains(&word.to_ascii_lowercase().as_str()))
        .take(3)
        .map(|word| capitalize(&word))
        .collect();

    if words.is_empty() {
        FALLBACK_SEGMENT_TITLE.to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render one segment as it appears in the full script.
#[must_use]
pub fn render_segment(segment: &ScriptSegment) -> String {
    format!("Segment {}: {}\n\n{}", segment.order, segment.title, segment.content)
}

/// Render the full script: the literal join of intro, rendered
/// segments, and outro, separated by the visible divider.
#[must_use]
pub fn render_full_script(intro: &str, segments: &[ScriptSegment], outro: &str) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(segments.len() + 2);
    parts.push(intro.to_string());
    parts.extend(segments.iter().map(render_segment));
    parts.push(outro.to_string());
    parts.join(SCRIPT_DIVIDER)
}

/// Pick key points: every other sentence of the combined summary, up
/// to the configured cap, each re-punctuated with a trailing period.
#[must_use]
pub fn pick_key_points(combined_summary: &str, options: &SummaryOptions) -> Vec<String> {
    split_sentences(combined_summary, 0)
        .into_iter()
        .step_by(2)
        .take(options.max_key_points)
        .map(|sentence| format!("{sentence}."))
        .collect()
}

/// Estimate spoken duration of the full script.
#[must_use]
pub fn estimate_read_time(full_script: &str, options: &SummaryOptions) -> ReadTime {
    let word_count = count_words(full_script);
    let rate = options.speaking_words_per_minute.max(1);
    ReadTime {
        minutes: word_count.div_ceil(rate),
        word_count,
    }
}

/// Verify the reconstruction invariant on an assembled script.
///
/// Exposed for tests and debugging assertions; `full_script` must
/// always equal the recomputed join of its parts.
#[must_use]
pub fn reconstructs_exactly(script: &PodcastScript) -> bool {
    script.full_script == render_full_script(&script.intro, &script.segments, &script.outro)
}
