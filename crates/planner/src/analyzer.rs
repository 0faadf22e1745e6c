use std::collections::HashSet;

use crate::normalize::split_words;
use crate::types::AnalysisRow;

const LIST_JOINER: &str = ",";

/// Lower-cased membership set built from a free-form reference text
#[derive(Debug, Clone, Default)]
pub struct ReferenceVocabulary {
    words: HashSet<String>,
}

impl ReferenceVocabulary {
    /// Commas count as separators, so both `"red,green"` and `"red green"`
    /// yield `{red, green}`.
    pub fn parse(reference_text: &str) -> Self {
        let words = reference_text
            .replace(',', " ")
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        Self { words }
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

    /// Classify one phrase against the vocabulary
    pub fn check(&self, phrase: &str) -> AnalysisRow {
        let words: Vec<&str> = split_words(phrase).collect();
        let missing: Vec<&str> = words
            .iter()
            .copied()
            .filter(|word| !self.contains(word))
            .collect();

        AnalysisRow {
            phrase: phrase.to_string(),
            split_words: words.join(LIST_JOINER),
            missing_words: missing.join(LIST_JOINER),
        }
    }
}

/// Report which words of each phrase are absent from `reference_text`.
///
/// One row per phrase, in input order.
pub fn analyze<S: AsRef<str>>(phrases: &[S], reference_text: &str) -> Vec<AnalysisRow> {
    let vocabulary = ReferenceVocabulary::parse(reference_text);
    log::debug!(
        "Checking {} phrases against {} reference words",
        phrases.len(),
        vocabulary.len()
    );
    phrases
        .iter()
        .map(|phrase| vocabulary.check(phrase.as_ref()))
        .collect()
}
