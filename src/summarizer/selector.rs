//! Frequency-based sentence selection for extractive summarization.
//!
//! The backend's model-generated summaries are out of scope here; this
//! selector is the deterministic fallback: score each sentence by how much
//! of the document's keyword mass it covers, keep the top few, and emit
//! them in document order. The selection loop and result shapes follow the
//! same layout as the rest of the crate's config/builder types.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::metrics::topics::TopicExtractor;
use crate::nlp::tokenizer::{clean_token, split_sentences};

/// Requested summary length, as submitted by the `/summarize` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    /// Number of sentences to select for this length.
    pub fn num_sentences(&self) -> usize {
        match self {
            Self::Short => 1,
            Self::Medium => 2,
            Self::Long => 4,
        }
    }

    /// The user-facing name used in JSON and log messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Requested summary length
    pub length: SummaryLength,
    /// Minimum sentence length (in words) to qualify for selection
    pub min_sentence_words: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            length: SummaryLength::Medium,
            min_sentence_words: 1,
        }
    }
}

/// A selected sentence with its score
#[derive(Debug, Clone)]
pub struct SelectedSentence {
    /// The sentence text, without its terminator
    pub text: String,
    /// Position in the original document (0-based)
    pub index: usize,
    /// Keyword-coverage score, normalized by sentence word count
    pub score: f64,
}

/// Result of sentence selection
#[derive(Debug, Clone, Default)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Number of candidate sentences considered
    pub num_candidates: usize,
}

impl SummaryResult {
    /// Join the selected sentences into summary prose.
    pub fn text(&self) -> String {
        let parts: Vec<&str> = self.sentences.iter().map(|s| s.text.as_str()).collect();
        if parts.is_empty() {
            String::new()
        } else {
            format!("{}.", parts.join(". "))
        }
    }

    /// Returns `true` if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Frequency-based sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
    topics: TopicExtractor,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self {
            config,
            topics: TopicExtractor::default(),
        }
    }

    /// Set the requested summary length
    pub fn with_length(mut self, length: SummaryLength) -> Self {
        self.config.length = length;
        self
    }

    /// Set the minimum sentence length in words
    pub fn with_min_sentence_words(mut self, min: usize) -> Self {
        self.config.min_sentence_words = min;
        self
    }

    /// Select the top-scoring sentences of `text` in document order.
    ///
    /// A sentence's score is the summed document frequency of its keyword
    /// tokens, divided by the sentence's word count so long sentences don't
    /// win on bulk alone. Equal scores break toward the earlier sentence.
    /// Degenerate input produces an empty result, never an error.
    pub fn select(&self, text: &str) -> SummaryResult {
        let sentences = split_sentences(text);
        let candidates: Vec<(usize, &str)> = sentences
            .iter()
            .enumerate()
            .filter(|(_, s)| s.split_whitespace().count() >= self.config.min_sentence_words)
            .map(|(i, s)| (i, *s))
            .collect();

        if candidates.is_empty() {
            return SummaryResult::default();
        }

        let freq = self.topics.frequencies(text);

        let mut scored: Vec<(usize, &str, f64)> = candidates
            .iter()
            .map(|&(index, sentence)| (index, sentence, score_sentence(sentence, &freq)))
            .collect();
        scored.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored.truncate(self.config.length.num_sentences());

        // Back to document order for readable output.
        scored.sort_by_key(|&(index, _, _)| index);

        SummaryResult {
            sentences: scored
                .into_iter()
                .map(|(index, sentence, score)| SelectedSentence {
                    text: sentence.to_string(),
                    index,
                    score,
                })
                .collect(),
            num_candidates: candidates.len(),
        }
    }
}

/// Score one sentence by the document frequency of its keyword tokens.
fn score_sentence(sentence: &str, freq: &FxHashMap<String, usize>) -> f64 {
    let mut total = 0usize;
    let mut words = 0usize;
    for token in sentence.to_lowercase().split_whitespace() {
        words += 1;
        if let Some(count) = freq.get(&clean_token(token)) {
            total += count;
        }
    }
    if words == 0 {
        0.0
    } else {
        total as f64 / words as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY: &str = "Renewable energy sources like solar and wind power are becoming \
         increasingly important in the global energy mix. Solar panel costs have dropped \
         dramatically in the past decade, making solar energy competitive. Wind farms are \
         expanding capacity worldwide. Energy storage technologies are also advancing.";

    #[test]
    fn test_empty_input() {
        let selector = SentenceSelector::new();
        let result = selector.select("");
        assert!(result.is_empty());
        assert_eq!(result.text(), "");
    }

    #[test]
    fn test_length_caps_selection() {
        let selector = SentenceSelector::new().with_length(SummaryLength::Short);
        let result = selector.select(ENERGY);
        assert_eq!(result.sentences.len(), 1);
        assert_eq!(result.num_candidates, 4);

        let selector = SentenceSelector::new().with_length(SummaryLength::Long);
        let result = selector.select(ENERGY);
        assert_eq!(result.sentences.len(), 4);
    }

    #[test]
    fn test_document_order() {
        let selector = SentenceSelector::new().with_length(SummaryLength::Long);
        let result = selector.select(ENERGY);
        for pair in result.sentences.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
    }

    #[test]
    fn test_fewer_sentences_than_requested() {
        let selector = SentenceSelector::new().with_length(SummaryLength::Long);
        let result = selector.select("Only one sentence here.");
        assert_eq!(result.sentences.len(), 1);
        assert_eq!(result.text(), "Only one sentence here.");
    }

    #[test]
    fn test_keyword_heavy_sentence_wins() {
        // "solar" dominates the document; the sentence about it should be
        // the short summary.
        let text = "Solar solar solar panels. The weather was mild today. Birds sang.";
        let selector = SentenceSelector::new().with_length(SummaryLength::Short);
        let result = selector.select(text);
        assert_eq!(result.sentences.len(), 1);
        assert!(result.sentences[0].text.to_lowercase().contains("solar"));
    }

    #[test]
    fn test_min_sentence_words_filter() {
        let selector = SentenceSelector::new()
            .with_length(SummaryLength::Long)
            .with_min_sentence_words(4);
        let result = selector.select("Too short. This sentence has enough words in it.");
        assert_eq!(result.sentences.len(), 1);
        assert_eq!(result.num_candidates, 1);
    }

    #[test]
    fn test_summary_length_serde() {
        assert_eq!(
            serde_json::from_str::<SummaryLength>("\"short\"").unwrap(),
            SummaryLength::Short
        );
        assert_eq!(
            serde_json::to_string(&SummaryLength::Long).unwrap(),
            "\"long\""
        );
        assert_eq!(SummaryLength::default(), SummaryLength::Medium);
    }
}
