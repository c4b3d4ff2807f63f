//! The `/summarize` endpoint surface: wire types and the fallback handler.
//!
//! [`summarize`] mirrors the backend handler's contract — empty text maps
//! to an error-status response, every other failure is caught and folded
//! into the response body, and callers never see a panic. The summary
//! itself comes from the deterministic extractive selector rather than a
//! model service, and the `thought_process` field carries a trace of the
//! selection instead of model reasoning.

pub mod error;
pub mod wire;

pub use error::SummarizeError;
pub use wire::{ResponseStatus, SummarizeRequest, SummarizeResponse};

use crate::analyzer::TextAnalyzer;
use crate::summarizer::SentenceSelector;

/// Handle a summarize request, always producing a response.
///
/// The `language` field is accepted for wire compatibility but the fallback
/// path never populates `translation` — translation requires an external
/// model service.
pub fn summarize(request: &SummarizeRequest) -> SummarizeResponse {
    match run(request) {
        Ok(response) => response,
        Err(err) => SummarizeResponse::error(err),
    }
}

fn run(request: &SummarizeRequest) -> Result<SummarizeResponse, SummarizeError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(SummarizeError::EmptyText);
    }

    let metrics = TextAnalyzer::new().analyze(text);
    let selector = SentenceSelector::new().with_length(request.length);
    let selection = selector.select(text);

    let thought = format!(
        "Split the input into {} sentences ({} words). Ranked sentences by \
         coverage of the document's keyword frequencies (top topics: {}). \
         Selected {} of {} candidate sentence(s) for a {} summary.",
        metrics.sentence_count,
        metrics.word_count,
        if metrics.topics.is_empty() {
            "none".to_string()
        } else {
            metrics.topics.join(", ")
        },
        selection.sentences.len(),
        selection.num_candidates,
        request.length.as_str(),
    );

    Ok(SummarizeResponse::success(selection.text(), thought))
}
