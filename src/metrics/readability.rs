//! Readability estimation via Flesch Reading Ease.
//!
//! Formula: `206.835 − 1.015 · (words/sentences) − 84.6 · (syllables/words)`,
//! clamped to `[0, 100]` and rounded. Higher = easier to read.
//!
//! Syllable counts come from a lexical heuristic over vowel runs, not a
//! phonetic algorithm — it is intentionally imprecise, so tests assert
//! ranges and properties rather than exact "correct" values.

use crate::nlp::tokenizer::{count_sentences, count_words};

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the syllable count of a single lowercase word.
///
/// Counts maximal runs of vowel characters (`aeiouy`) as syllable groups.
/// A word with no vowels counts as one syllable. A trailing `e` that is not
/// part of `le` is treated as silent and subtracts one group. Every word
/// counts as at least one syllable.
pub fn estimate_word_syllables(word: &str) -> usize {
    let mut groups = 0;
    let mut in_vowel = false;
    for c in word.chars() {
        let v = is_vowel(c);
        if v && !in_vowel {
            groups += 1;
        }
        in_vowel = v;
    }

    if groups == 0 {
        return 1;
    }
    if word.ends_with('e') && !word.ends_with("le") {
        groups -= 1;
    }
    groups.max(1)
}

/// Estimate the total syllable count of `text`.
///
/// Lowercases and whitespace-splits, then sums the per-word heuristic.
/// Tokens keep their punctuation; a trailing `.` or `!` simply means the
/// silent-`e` rule does not fire, which matches the analysis pane's
/// behavior.
pub fn estimate_syllables(text: &str) -> usize {
    text.to_lowercase()
        .split_whitespace()
        .map(estimate_word_syllables)
        .sum()
}

/// Compute the Flesch Reading Ease score of `text`, clamped to `[0, 100]`
/// and rounded to the nearest integer.
///
/// Returns 0 when the text contains no words or no sentences, which also
/// guards the divisions below.
pub fn flesch_reading_ease(text: &str) -> u8 {
    let words = count_words(text);
    let sentences = count_sentences(text);
    if words == 0 || sentences == 0 {
        return 0;
    }
    let syllables = estimate_syllables(text);

    let score = 206.835
        - 1.015 * (words as f64 / sentences as f64)
        - 84.6 * (syllables as f64 / words as f64);
    score.clamp(0.0, 100.0).round() as u8
}
