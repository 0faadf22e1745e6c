use std::collections::{HashSet, VecDeque};

use crate::config::{FieldConfig, PlannerConfig};
use crate::expander::Expander;
use crate::normalize::{char_len, normalize_word, truncate_chars, StopWords};
use crate::scorer::score_candidates;
use crate::types::{FieldId, FieldResult, KeywordCandidate, OptimizationResult, ScoredCandidate};

/// Capacity charged for the separator that follows every placed item
const SEPARATOR_WIDTH: usize = 1;

const KEYWORD_JOINER: &str = " ";
const WORD_JOINER: &str = ",";

/// Words and keywords already placed during one optimization run.
///
/// Created fresh for every [`Allocator::optimize_placement`] call and threaded
/// through the three field fills in order.
#[derive(Debug, Default)]
pub struct AllocationState {
    used_words: HashSet<String>,
    used_keywords: HashSet<String>,
}

impl AllocationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_keyword_used(&self, keyword: &str) -> bool {
        self.used_keywords.contains(keyword)
    }

    /// `normalized` must already be a normalized word
    pub fn is_word_used(&self, normalized: &str) -> bool {
        self.used_words.contains(normalized)
    }

    pub fn mark_keyword(&mut self, keyword: &str) {
        self.used_keywords.insert(keyword.to_string());
    }

    pub fn mark_word(&mut self, normalized: String) {
        self.used_words.insert(normalized);
    }

    #[must_use]
    pub fn used_word_count(&self) -> usize {
        self.used_words.len()
    }
}

/// Greedy field-packing optimizer
#[derive(Debug, Clone)]
pub struct Allocator {
    config: PlannerConfig,
    stop_words: StopWords,
}

impl Allocator {
    /// `config` must pass [`PlannerConfig::validate`]; the loaders check it,
    /// hand-built configs are only checked in debug builds.
    pub fn new(config: PlannerConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid planner config: {:?}",
            config.validate()
        );
        let stop_words = StopWords::new(&config.stop_words);
        Self { config, stop_words }
    }

    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Expanded and scored candidates, highest base points first.
    ///
    /// The sort is stable, so ties keep their input order.
    pub fn working_pool(&self, candidates: &[KeywordCandidate]) -> Vec<ScoredCandidate> {
        let expanded = if self.config.expansion.enabled {
            Expander::new(self.config.expansion.max_length).expand(candidates)
        } else {
            candidates.to_vec()
        };

        let mut pool = score_candidates(expanded);
        pool.sort_by(|a, b| b.base_points().total_cmp(&a.base_points()));
        pool
    }

    /// Fill field 1, field 2 and field 3 in that order.
    ///
    /// Fields 1 and 2 pop whole keywords off one shared, shrinking queue; a
    /// keyword that cannot be placed is dropped for good. Field 3 then walks
    /// the whole pool again, placing single words that no earlier field used.
    pub fn optimize_placement(&self, candidates: &[KeywordCandidate]) -> OptimizationResult {
        let pool = self.working_pool(candidates);
        log::debug!(
            "Optimizing {} input candidates ({} in working pool)",
            candidates.len(),
            pool.len()
        );

        let mut state = AllocationState::new();
        let mut queue: VecDeque<&ScoredCandidate> = pool.iter().collect();

        let field1 =
            fill_keyword_field(FieldId::Field1, self.config.field1, &mut queue, &mut state);
        let field2 =
            fill_keyword_field(FieldId::Field2, self.config.field2, &mut queue, &mut state);
        let field3 = fill_word_field(self.config.field3, &pool, &self.stop_words, &mut state);

        let result = OptimizationResult::new(field1, field2, field3);
        log::debug!(
            "Placement done: total_points={:.3}, {} distinct words used",
            result.total_points,
            state.used_word_count()
        );
        result
    }
}

fn fill_keyword_field(
    id: FieldId,
    field: FieldConfig,
    queue: &mut VecDeque<&ScoredCandidate>,
    state: &mut AllocationState,
) -> FieldResult {
    let mut remaining = field.capacity;
    let mut placed: Vec<&str> = Vec::new();
    let mut points = 0.0;

    while remaining > 0 {
        let Some(candidate) = queue.pop_front() else {
            break;
        };

        let normalized: Vec<String> = candidate.words().map(normalize_word).collect();
        if state.is_keyword_used(candidate.text())
            || normalized.iter().any(|w| state.is_word_used(w))
        {
            log::trace!("{id}: dropping {:?} (already used)", candidate.text());
            continue;
        }

        let charge = candidate.candidate.char_len() + SEPARATOR_WIDTH;
        if charge > remaining {
            log::trace!(
                "{id}: dropping {:?} (needs {charge}, {remaining} left)",
                candidate.text()
            );
            continue;
        }

        remaining -= charge;
        points += candidate.base_points() * field.capacity as f64 * field.multiplier;
        state.mark_keyword(candidate.text());
        for word in normalized {
            state.mark_word(word);
        }
        placed.push(candidate.text());
        log::debug!("{id}: placed {:?} ({remaining} chars left)", candidate.text());
    }

    FieldResult::new(placed.join(KEYWORD_JOINER), points)
}

fn fill_word_field(
    field: FieldConfig,
    pool: &[ScoredCandidate],
    stop_words: &StopWords,
    state: &mut AllocationState,
) -> FieldResult {
    let mut remaining = field.capacity;
    let mut placed: Vec<&str> = Vec::new();
    let mut points = 0.0;

    for candidate in pool {
        if remaining == 0 {
            break;
        }
        if state.is_keyword_used(candidate.text()) {
            continue;
        }

        for word in candidate.words() {
            let normalized = normalize_word(word);
            if state.is_word_used(&normalized) || stop_words.contains(word) {
                continue;
            }

            let charge = char_len(word) + SEPARATOR_WIDTH;
            if charge > remaining {
                continue;
            }

            remaining -= charge;
            points += candidate.rewards.field3_points;
            state.mark_word(normalized);
            placed.push(word);
        }
    }

    // The scorer already credited field 3 at one third; the field multiplier
    // applies on top of it.
    let points = points * field.multiplier;
    let joined = placed.join(WORD_JOINER);
    let content = truncate_chars(&joined, field.capacity);
    log::debug!(
        "{}: placed {} words ({remaining} chars left)",
        FieldId::Field3,
        placed.len()
    );

    FieldResult::new(content, points)
}
