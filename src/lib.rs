//! Lightweight text analysis for summarization frontends.
//!
//! `textmeter` implements the client-side analysis pane of a text
//! summarization tool as a pure library: given raw input text it produces
//! word and sentence counts, a Flesch Reading Ease estimate, and a ranked
//! list of candidate topic keywords. It also ships the `/summarize` wire
//! types used by the tool's backend and a deterministic extractive fallback
//! summarizer so the full request/response path can run without a model
//! service.
//!
//! All analysis is a pure function of the input string: no shared state, no
//! incremental mode, no I/O. Degenerate inputs (empty, whitespace-only, no
//! sentence terminators) map to zero/empty defaults rather than errors.
//!
//! # Quick start
//!
//! ```
//! let metrics = textmeter::analyze("The quick brown fox jumps over the lazy dog. It runs fast!");
//! assert_eq!(metrics.word_count, 12);
//! assert_eq!(metrics.sentence_count, 2);
//! assert!(metrics.readability <= 100);
//! assert!(metrics.topics.len() <= 5);
//! ```
//!
//! # Feature flags
//!
//! - `tracing` — emit a [`tracing`] span per analysis call.

pub mod analyzer;
pub mod api;
pub mod metrics;
pub mod nlp;
pub mod summarizer;
pub mod types;

pub use analyzer::TextAnalyzer;
pub use types::TextMetrics;

/// Analyze `text` with the default [`TextAnalyzer`].
///
/// Convenience wrapper for one-off calls; construct a [`TextAnalyzer`] to
/// customize stopwords or topic limits, or to batch over many documents.
pub fn analyze(text: &str) -> TextMetrics {
    TextAnalyzer::new().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty() {
        let metrics = analyze("");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.sentence_count, 0);
        assert_eq!(metrics.readability, 0);
        assert!(metrics.topics.is_empty());
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let text = "Renewable energy sources like solar and wind power are \
                    becoming increasingly important. Solar panel costs have \
                    dropped dramatically in the past decade.";
        assert_eq!(analyze(text), analyze(text));
    }
}
