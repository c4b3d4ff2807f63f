//! Error types for the summarize surface.

use thiserror::Error;

/// Failures the summarize handler folds into error-status responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// The request carried no text (or only whitespace).
    #[error("No text provided")]
    EmptyText,
}
