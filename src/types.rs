//! Core value types.

use serde::{Deserialize, Serialize};

/// The metrics computed for one input text.
///
/// Recomputed from scratch on every call — there is no incremental state.
///
/// # Invariants
///
/// - `word_count == 0` iff the trimmed input is empty.
/// - `readability` is clamped to `[0, 100]`.
/// - `topics` holds at most 5 entries; each is longer than 3 characters and
///   is not a stopword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Number of sentence fragments with non-whitespace content.
    pub sentence_count: usize,
    /// Flesch Reading Ease estimate, clamped to `[0, 100]`. Higher is
    /// easier to read.
    pub readability: u8,
    /// Candidate topic keywords, most frequent first.
    pub topics: Vec<String>,
}

impl TextMetrics {
    /// The all-zero metrics produced for empty input.
    pub fn empty() -> Self {
        Self {
            word_count: 0,
            sentence_count: 0,
            readability: 0,
            topics: Vec::new(),
        }
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::empty()
    }
}
