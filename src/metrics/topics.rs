//! Naive keyword/topic extraction.
//!
//! Tallies cleaned token frequencies and returns the top few as candidate
//! topics. No stemming, no synonym merging — this is deliberately the same
//! thin heuristic the analysis pane runs on every keystroke.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::clean_token;

/// Configuration for topic extraction
#[derive(Debug, Clone)]
pub struct TopicConfig {
    /// Maximum number of topics to return
    pub max_topics: usize,
    /// Minimum length of a cleaned token to qualify as a topic candidate
    pub min_token_len: usize,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            max_topics: 5,
            min_token_len: 4,
        }
    }
}

/// Frequency-based topic extractor
#[derive(Debug, Clone, Default)]
pub struct TopicExtractor {
    config: TopicConfig,
    stopwords: StopwordFilter,
}

impl TopicExtractor {
    /// Create an extractor with the default config and stopword list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with a custom config
    pub fn with_config(config: TopicConfig) -> Self {
        Self {
            config,
            stopwords: StopwordFilter::default(),
        }
    }

    /// Set the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set the maximum number of topics to return
    pub fn with_max_topics(mut self, max_topics: usize) -> Self {
        self.config.max_topics = max_topics;
        self
    }

    /// Extract the top topics from `text`, most frequent first.
    ///
    /// Lowercases and whitespace-splits, strips non-letter characters from
    /// each token, and discards tokens shorter than `min_token_len` or in
    /// the stopword set. Equal-frequency ties break by first occurrence in
    /// the text, so results are deterministic across calls.
    pub fn extract(&self, text: &str) -> Vec<String> {
        // (count, first-occurrence index) per cleaned token
        let mut freq: FxHashMap<String, (usize, usize)> = FxHashMap::default();

        for (idx, token) in text.to_lowercase().split_whitespace().enumerate() {
            let cleaned = clean_token(token);
            if cleaned.len() < self.config.min_token_len || self.stopwords.is_stopword(&cleaned) {
                continue;
            }
            freq.entry(cleaned)
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, idx));
        }

        let mut ranked: Vec<(String, (usize, usize))> = freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
        ranked.truncate(self.config.max_topics);
        ranked.into_iter().map(|(word, _)| word).collect()
    }

    /// Tally cleaned-token frequencies without ranking or truncation.
    ///
    /// Used by the extractive summarizer to score sentences by keyword
    /// coverage.
    pub fn frequencies(&self, text: &str) -> FxHashMap<String, usize> {
        let mut freq: FxHashMap<String, usize> = FxHashMap::default();
        for token in text.to_lowercase().split_whitespace() {
            let cleaned = clean_token(token);
            if cleaned.len() < self.config.min_token_len || self.stopwords.is_stopword(&cleaned) {
                continue;
            }
            *freq.entry(cleaned).or_insert(0) += 1;
        }
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_stopwords_or_short() {
        let extractor = TopicExtractor::new();
        assert!(extractor.extract("the and of to").is_empty());
        assert!(extractor.extract("a b cd").is_empty());
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_frequency_ranking() {
        let extractor = TopicExtractor::new();
        let topics = extractor.extract(
            "solar power and wind power are renewable. solar panels convert sunlight.",
        );
        // "solar" and "power" both appear twice; "solar" occurs first.
        assert_eq!(topics[0], "solar");
        assert_eq!(topics[1], "power");
        assert!(topics.len() <= 5);
    }

    #[test]
    fn test_at_most_five_topics() {
        let extractor = TopicExtractor::new();
        let topics = extractor
            .extract("alpha bravo charlie delta echo foxtrot golf hotel india juliet");
        assert_eq!(topics.len(), 5);
    }

    #[test]
    fn test_topics_respect_filters() {
        let extractor = TopicExtractor::new();
        let stopwords = StopwordFilter::default();
        let topics = extractor.extract(
            "The quick brown fox jumps over the lazy dog. It runs fast!",
        );
        for topic in &topics {
            assert!(topic.len() > 3, "topic {topic:?} too short");
            assert!(!stopwords.is_stopword(topic));
        }
    }

    #[test]
    fn test_first_occurrence_tie_break() {
        let extractor = TopicExtractor::new();
        // All candidates appear exactly once; order must follow the text.
        let topics = extractor.extract("zulu yankee xray whiskey victor");
        assert_eq!(topics, vec!["zulu", "yankee", "xray", "whiskey", "victor"]);
    }

    #[test]
    fn test_punctuation_stripped_before_tally() {
        let extractor = TopicExtractor::new();
        let topics = extractor.extract("work, work. (work)");
        assert_eq!(topics, vec!["work"]);
    }

    #[test]
    fn test_frequencies_tally() {
        let extractor = TopicExtractor::new();
        let freq = extractor.frequencies("solar wind solar");
        assert_eq!(freq.get("solar"), Some(&2));
        assert_eq!(freq.get("wind"), Some(&1));
    }

    #[test]
    fn test_custom_max_topics() {
        let extractor = TopicExtractor::new().with_max_topics(2);
        let topics = extractor.extract("alpha bravo charlie delta");
        assert_eq!(topics.len(), 2);
    }
}
