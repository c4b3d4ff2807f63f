//! Extractive fallback summarization.

pub mod selector;

pub use selector::{
    SelectedSentence, SelectorConfig, SentenceSelector, SummaryLength, SummaryResult,
};
