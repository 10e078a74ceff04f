//! Configuration options for extraction and summarization.
//!
//! Scoring constants are empirically tuned values with no derived
//! optimum. They are exposed as configuration so behavior stays
//! reproducible for a given set of constants, not because the defaults
//! are assumed optimal.

/// Weights used when scoring candidate content blocks.
///
/// A candidate's score is:
///
/// ```text
/// score = text_length * text_weight
///       + paragraphs  * paragraph_weight
///       - links       * link_penalty
///       + min(images * image_bonus, image_bonus_cap)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    /// Per-character score contribution. Default: `0.1`
    pub text_weight: f64,

    /// Per-paragraph score contribution. Default: `50.0`
    pub paragraph_weight: f64,

    /// Per-link score penalty. Default: `10.0`
    pub link_penalty: f64,

    /// Per-image score bonus. Default: `20.0`
    pub image_bonus: f64,

    /// Upper bound on the total image bonus. Default: `100.0`
    pub image_bonus_cap: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            text_weight: 0.1,
            paragraph_weight: 50.0,
            link_penalty: 10.0,
            image_bonus: 20.0,
            image_bonus_cap: 100.0,
        }
    }
}

/// Weights used when computing the 0-100 quality score.
///
/// ```text
/// quality = min(words / word_divisor, word_cap)
///         + (sentences > sentence_threshold ? sentence_bonus : 0)
///         + (proper capitalization ? capitalization_bonus : 0)
///         + (words > substance_threshold ? substance_bonus : 0)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QualityWeights {
    /// Divisor applied to the word count. Default: `10.0`
    pub word_divisor: f64,

    /// Cap on the word-count component. Default: `50.0`
    pub word_cap: f64,

    /// Bonus for having more than `sentence_threshold` sentences. Default: `20.0`
    pub sentence_bonus: f64,

    /// See `sentence_bonus`. Default: `5`
    pub sentence_threshold: usize,

    /// Bonus for properly capitalized prose. Default: `15.0`
    pub capitalization_bonus: f64,

    /// Bonus for exceeding `substance_threshold` words. Default: `15.0`
    pub substance_bonus: f64,

    /// See `substance_bonus`. Default: `100`
    pub substance_threshold: usize,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            word_divisor: 10.0,
            word_cap: 50.0,
            sentence_bonus: 20.0,
            sentence_threshold: 5,
            capitalization_bonus: 15.0,
            substance_bonus: 15.0,
            substance_threshold: 100,
        }
    }
}

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use pagecast::ExtractionOptions;
///
/// let options = ExtractionOptions {
///     max_images: 5,
///     ..ExtractionOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    /// Candidate-block scoring weights.
    pub scoring: ScoringWeights,

    /// Quality-score weights.
    pub quality: QualityWeights,

    /// Minimum text length (characters) for a block to be scored at all.
    ///
    /// Default: `100`
    pub min_candidate_chars: usize,

    /// Minimum text length (characters) below which the winning candidate
    /// is discarded in favor of the paragraph-concatenation fallback.
    ///
    /// Default: `200`
    pub min_content_chars: usize,

    /// Minimum individual paragraph length (characters) for the fallback
    /// concatenation path.
    ///
    /// Default: `20`
    pub min_paragraph_chars: usize,

    /// Maximum number of content images to return.
    ///
    /// Default: `10`
    pub max_images: usize,

    /// Maximum number of embedded video URLs to return.
    ///
    /// Default: `10`
    pub max_videos: usize,

    /// Maximum title length (characters).
    ///
    /// Default: `200`
    pub max_title_chars: usize,

    /// Maximum description length (characters).
    ///
    /// Default: `500`
    pub max_description_chars: usize,

    /// Author bylines at or above this length are rejected as noise.
    ///
    /// Default: `100`
    pub max_author_chars: usize,

    /// Words-per-minute rate for the reading-time estimate.
    ///
    /// Default: `200`
    pub reading_words_per_minute: usize,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            scoring: ScoringWeights::default(),
            quality: QualityWeights::default(),
            min_candidate_chars: 100,
            min_content_chars: 200,
            min_paragraph_chars: 20,
            max_images: 10,
            max_videos: 10,
            max_title_chars: 200,
            max_description_chars: 500,
            max_author_chars: 100,
            reading_words_per_minute: 200,
        }
    }
}

/// Configuration options for the summarization pipeline.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Maximum words per chunk handed to the summarization backend.
    ///
    /// Default: `800`
    pub chunk_words: usize,

    /// Chunks shorter than this (characters, after cleanup) are skipped.
    ///
    /// Default: `50`
    pub min_chunk_chars: usize,

    /// Backend input is truncated to this many characters after cleaning.
    ///
    /// Default: `1000`
    pub model_input_cap: usize,

    /// Upper bound for backend summary length; the effective limit is
    /// `min(model_max_length, input_length / 3)`.
    ///
    /// Default: `130`
    pub model_max_length: usize,

    /// Lower bound for backend summary length.
    ///
    /// Default: `30`
    pub model_min_length: usize,

    /// Combined summaries under this length (characters) are used as the
    /// brief summary verbatim.
    ///
    /// Default: `200`
    pub brief_summary_threshold: usize,

    /// Backend length bounds for the brief summary.
    ///
    /// Default: `80` / `20`
    pub brief_max_length: usize,
    /// See `brief_max_length`.
    pub brief_min_length: usize,

    /// Sentences grouped into each script segment.
    ///
    /// Default: `3`
    pub sentences_per_segment: usize,

    /// Maximum number of key points.
    ///
    /// Default: `5`
    pub max_key_points: usize,

    /// Words-per-minute rate for the spoken read-time estimate.
    ///
    /// Default: `150`
    pub speaking_words_per_minute: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            chunk_words: 800,
            min_chunk_chars: 50,
            model_input_cap: 1000,
            model_max_length: 130,
            model_min_length: 30,
            brief_summary_threshold: 200,
            brief_max_length: 80,
            brief_min_length: 20,
            sentences_per_segment: 3,
            max_key_points: 5,
            speaking_words_per_minute: 150,
        }
    }
}
