//! Word tokenization and lexical sentence splitting.
//!
//! Both operations are purely lexical: words are whitespace-delimited
//! substrings, sentences are fragments between runs of `.`, `!`, or `?`.
//! There is no handling of abbreviations, decimals, or quoted punctuation.

/// Returns `true` for the characters treated as sentence terminators.
#[inline]
fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Count whitespace-separated words.
///
/// Returns 0 when the trimmed input is empty.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split `text` into trimmed, non-empty sentence fragments.
///
/// Fragments are delimited by runs of `.`, `!`, or `?`. A trailing
/// terminator produces no spurious empty sentence — fragments that trim to
/// nothing are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(is_terminator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count sentence fragments with non-whitespace content.
pub fn count_sentences(text: &str) -> usize {
    split_sentences(text).len()
}

/// Strip every character that is not a lowercase ASCII letter.
///
/// Callers lowercase the token first, so this reduces a raw whitespace
/// token like `"work,"` or `"(hybrid)"` to its bare letters. Non-ASCII
/// letters are dropped as well, matching the `[^a-z]` filter the analysis
/// pane applies.
pub fn clean_token(token: &str) -> String {
    token.chars().filter(char::is_ascii_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_empty() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn test_count_words_collapses_whitespace() {
        assert_eq!(count_words("a b  c"), 3);
        assert_eq!(count_words("  leading and trailing  "), 3);
        assert_eq!(count_words("tabs\tand\nnewlines"), 3);
    }

    #[test]
    fn test_count_sentences_basic() {
        assert_eq!(count_sentences("Hello. World!"), 2);
        assert_eq!(count_sentences("no terminator"), 1);
        assert_eq!(count_sentences(""), 0);
    }

    #[test]
    fn test_trailing_terminators_produce_no_empty_sentence() {
        assert_eq!(count_sentences("One. Two. Three."), 3);
        assert_eq!(count_sentences("Really?!"), 1);
        assert_eq!(count_sentences("..."), 0);
    }

    #[test]
    fn test_split_sentences_trims_fragments() {
        let sents = split_sentences("First one.  Second one!   ");
        assert_eq!(sents, vec!["First one", "Second one"]);
    }

    #[test]
    fn test_clean_token() {
        assert_eq!(clean_token("work,"), "work");
        assert_eq!(clean_token("(hybrid)"), "hybrid");
        assert_eq!(clean_token("covid-19"), "covid");
        assert_eq!(clean_token("42"), "");
    }
}
