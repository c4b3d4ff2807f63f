//! The `Text → TextMetrics` entry point.
//!
//! [`TextAnalyzer`] composes the counting, readability, and topic modules
//! into one pure, synchronous function over the full input text. Every call
//! recomputes from scratch — there is no incremental or streaming mode, and
//! no shared mutable state, so an analyzer can be shared freely across
//! threads.

use rayon::prelude::*;

use crate::metrics::readability::flesch_reading_ease;
use crate::metrics::topics::TopicExtractor;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{count_sentences, count_words};
use crate::types::TextMetrics;

/// Enter a tracing span for an analysis call (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_analysis {
    ($len:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("text_analysis", text_len = $len).entered();
    };
}

/// Computes [`TextMetrics`] for input text.
///
/// The default analyzer matches the summarization tool's analysis pane:
/// fixed stopword list, at most 5 topics. Use the builder methods to
/// customize either.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer {
    topics: TopicExtractor,
}

impl TextAnalyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the topic extractor.
    pub fn with_topic_extractor(mut self, topics: TopicExtractor) -> Self {
        self.topics = topics;
        self
    }

    /// Replace the stopword filter used for topic extraction.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.topics = self.topics.with_stopwords(stopwords);
        self
    }

    /// Analyze `text`, producing all metrics in one pass over the input.
    pub fn analyze(&self, text: &str) -> TextMetrics {
        trace_analysis!(text.len());

        TextMetrics {
            word_count: count_words(text),
            sentence_count: count_sentences(text),
            readability: flesch_reading_ease(text),
            topics: self.topics.extract(text),
        }
    }

    /// Analyze many documents in parallel.
    ///
    /// Each document is independent, so the work parallelizes trivially.
    /// Output order matches input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<TextMetrics>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }
}
