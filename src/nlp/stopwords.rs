//! Stopword filtering
//!
//! The default filter carries the small fixed list the analysis pane uses
//! for topic extraction. Full per-language lists are available through the
//! `stop-words` crate via [`StopwordFilter::for_language`].

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// The fixed stopword set used by topic extraction.
const DEFAULT_STOPWORDS: [&str; 14] = [
    "the", "and", "of", "to", "in", "is", "it", "that", "for", "with", "on", "as", "at", "by",
];

/// A filter for excluding common function words from topic extraction.
///
/// Matching is case-insensitive: words are lowercased on insertion and on
/// lookup.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_list(&DEFAULT_STOPWORDS)
    }
}

impl StopwordFilter {
    /// Create the default filter with the fixed topic-extraction list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Create a filter backed by the full stopword list for a language.
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, da, fi, pl.
    /// Unknown languages fall back to English. Note that the full lists are
    /// much larger than the default fixed set and will exclude more topic
    /// candidates.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "pl" | "polish" => LANGUAGE::Polish,
            _ => LANGUAGE::English,
        };
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
