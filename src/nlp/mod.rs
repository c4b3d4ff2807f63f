//! Natural Language Processing components
//!
//! This module provides tokenization, sentence splitting, and stopword
//! filtering.

pub mod stopwords;
pub mod tokenizer;
