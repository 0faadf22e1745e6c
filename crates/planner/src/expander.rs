use std::collections::HashSet;

use crate::normalize::char_len;
use crate::types::KeywordCandidate;

/// Generates composite keywords from pairs of existing ones
#[derive(Debug, Clone, Copy)]
pub struct Expander {
    /// Longest merged phrase (in characters) that is kept
    max_length: usize,
}

impl Expander {
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Return the input candidates followed by every new merged candidate.
    ///
    /// For each ordered pair `(a, b)` the merged phrase is `a`'s words followed
    /// by `b`'s words not already present. Phrases that already exist or are
    /// longer than `max_length` are skipped. The merge earns `a`'s points plus
    /// `b`'s points scaled down by the word-count gap between the two.
    pub fn expand(&self, candidates: &[KeywordCandidate]) -> Vec<KeywordCandidate> {
        let mut seen: HashSet<String> = candidates.iter().map(|c| c.text.clone()).collect();
        let mut expanded = candidates.to_vec();

        for (i, a) in candidates.iter().enumerate() {
            let a_words = a.word_count();
            for (j, b) in candidates.iter().enumerate() {
                if i == j {
                    continue;
                }

                let merged = merge_phrases(a, b);
                if char_len(&merged) > self.max_length || seen.contains(&merged) {
                    continue;
                }

                let gap = a_words.abs_diff(b.word_count());
                let points = a.base_points + b.base_points / (gap + 1) as f64;
                seen.insert(merged.clone());
                expanded.push(KeywordCandidate::new(merged, points));
            }
        }

        log::debug!(
            "Expanded {} candidates into {} (max_length={})",
            candidates.len(),
            expanded.len(),
            self.max_length
        );
        expanded
    }
}

fn merge_phrases(a: &KeywordCandidate, b: &KeywordCandidate) -> String {
    let mut words: Vec<&str> = a.words().collect();
    for word in b.words() {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words.join(" ")
}
