use crate::types::{KeywordCandidate, RewardVariants, ScoredCandidate};

/// Share of a candidate's keyword-field value credited in the word-level field
pub const FIELD3_SCORE_FACTOR: f64 = 1.0 / 3.0;

/// Value of a phrase in a keyword field.
///
/// A single word is an exact match and keeps its full score. Longer phrases
/// earn a harmonic sum over word positions, `sum_{i=0}^{n-2} base / (i + 1)`.
pub fn phrase_value(base_points: f64, word_count: usize) -> f64 {
    match word_count {
        0 => 0.0,
        1 => base_points,
        n => (0..n - 1).map(|i| base_points / (i + 1) as f64).sum(),
    }
}

/// Compute the reward variants for one candidate
pub fn score(candidate: &KeywordCandidate) -> RewardVariants {
    let value = phrase_value(candidate.base_points, candidate.word_count());
    RewardVariants {
        field1_points: value,
        field2_points: value,
        field3_points: value * FIELD3_SCORE_FACTOR,
    }
}

/// Attach reward variants to every candidate, preserving order
pub fn score_candidates(candidates: Vec<KeywordCandidate>) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .map(|candidate| {
            let rewards = score(&candidate);
            ScoredCandidate { candidate, rewards }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_word_keeps_full_value() {
        let rewards = score(&KeywordCandidate::new("seo", 30.0));
        assert_eq!(rewards.field1_points, 30.0);
        assert_eq!(rewards.field2_points, 30.0);
        assert!(close(rewards.field3_points, 10.0));
    }

    #[test]
    fn two_words_sum_one_term() {
        let rewards = score(&KeywordCandidate::new("seo tools", 90.0));
        assert_eq!(rewards.field1_points, 90.0);
        assert!(close(rewards.field3_points, 30.0));
    }

    #[test]
    fn three_and_four_words_decay_harmonically() {
        let three = score(&KeywordCandidate::new("best seo tools", 12.0));
        assert!(close(three.field1_points, 12.0 + 6.0));

        let four = score(&KeywordCandidate::new("best free seo tools", 12.0));
        assert!(close(four.field1_points, 12.0 + 6.0 + 4.0));
        assert!(close(four.field3_points, 22.0 / 3.0));
    }

    #[test]
    fn empty_text_scores_zero() {
        let rewards = score(&KeywordCandidate::new("   ", 50.0));
        assert_eq!(rewards, RewardVariants::default());
    }

    #[test]
    fn score_candidates_preserves_order() {
        let scored = score_candidates(vec![
            KeywordCandidate::new("b", 1.0),
            KeywordCandidate::new("a", 2.0),
        ]);
        let texts: Vec<_> = scored.iter().map(ScoredCandidate::text).collect();
        assert_eq!(texts, vec!["b", "a"]);
    }
}
