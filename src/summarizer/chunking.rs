//! Word-bounded chunking.
//!
//! Summarization backends have strict input-length limits, so body
//! text is split into word-count-bounded chunks that preserve the
//! original word order. Chunks exist only within a single
//! summarization call.

/// Split text into chunks of at most `chunk_words` words.
///
/// Word order is preserved; words are rejoined with single spaces.
/// Empty input yields no chunks.
#[must_use]
pub fn chunk_by_words(text: &str, chunk_words: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let chunk_words = chunk_words.max(1);
    words
        .chunks(chunk_words)
        .map(|chunk| chunk.join(" "))
        .collect()
}
