//! `/summarize` request and response JSON types.
//!
//! # JSON shape
//!
//! Request:
//!
//! ```json
//! { "text": "…", "language": "none", "length": "medium" }
//! ```
//!
//! Success response:
//!
//! ```json
//! {
//!   "status": "success",
//!   "summary": "…",
//!   "thought_process": "…",
//!   "translation": "…"
//! }
//! ```
//!
//! Error response:
//!
//! ```json
//! { "status": "error", "error": "No text provided" }
//! ```

use serde::{Deserialize, Serialize};

use super::error::SummarizeError;
use crate::summarizer::SummaryLength;

/// A request to the summarize endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// The text to summarize.
    pub text: String,

    /// Target translation language, or `"none"` for no translation.
    #[serde(default = "default_language")]
    pub language: String,

    /// Requested summary length.
    #[serde(default)]
    pub length: SummaryLength,
}

fn default_language() -> String {
    "none".to_string()
}

impl SummarizeRequest {
    /// Build a request with no translation and the default length.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: default_language(),
            length: SummaryLength::default(),
        }
    }

    /// Returns `true` if no translation was requested.
    pub fn wants_translation(&self) -> bool {
        self.language != "none"
    }
}

/// Overall outcome of a summarize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The response body of the summarize endpoint.
///
/// Optional fields are omitted from the JSON when absent: success responses
/// carry `summary` and `thought_process` (plus `translation` when one was
/// produced), error responses carry only `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub status: ResponseStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought_process: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SummarizeResponse {
    /// Build a success response.
    pub fn success(summary: impl Into<String>, thought_process: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            summary: Some(summary.into()),
            thought_process: Some(thought_process.into()),
            translation: None,
            error: None,
        }
    }

    /// Attach a translation to a success response.
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Build an error response from a handler failure.
    pub fn error(err: SummarizeError) -> Self {
        Self {
            status: ResponseStatus::Error,
            summary: None,
            thought_process: None,
            translation: None,
            error: Some(err.to_string()),
        }
    }
}
