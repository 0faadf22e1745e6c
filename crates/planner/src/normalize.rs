//! Word-level helpers shared by the scorer, expander and allocator.

use std::collections::HashSet;

/// Split a phrase into whitespace-separated words
pub fn split_words(phrase: &str) -> impl Iterator<Item = &str> {
    phrase.split_whitespace()
}

/// De-duplication key for a word: lower-cased, one trailing `s` removed.
///
/// Plural folding is naive (`"Tools"` -> `"tool"`,
/// `"class"` -> `"clas"`); it must not be replaced by a stemmer.
pub fn normalize_word(word: &str) -> String {
    let mut lowered = word.to_lowercase();
    if lowered.ends_with('s') {
        lowered.pop();
    }
    lowered
}

/// Number of characters (not bytes) in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cut `text` down to at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Lower-cased stop word table
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
