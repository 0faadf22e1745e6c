//! # Keyfield Planner
//!
//! Keyword scoring, expansion and greedy field packing.
//!
//! ## Architecture
//!
//! ```text
//! (keyword, score)[]
//!     │
//!     ├──> Expander
//!     │      └─ pairwise merges bounded by max_length
//!     │
//!     ├──> Scorer
//!     │      └─ field 1/2 value (harmonic decay), field 3 value (one third)
//!     │
//!     └──> Allocator (one AllocationState per run)
//!            ├─ field 1: whole keywords, 29 chars
//!            ├─ field 2: whole keywords, 29 chars, same shrinking pool
//!            └─ field 3: single words, 100 chars, stop words excluded
//!
//! phrases[] + reference text ──> Analyzer ──> missing words per phrase
//! ```
//!
//! ## Example
//!
//! ```rust
//! use keyfield_planner::{Allocator, KeywordCandidate, PlannerConfig};
//!
//! let allocator = Allocator::new(PlannerConfig::default());
//! let result = allocator.optimize_placement(&[
//!     KeywordCandidate::new("seo tools", 90.0),
//!     KeywordCandidate::new("seo", 30.0),
//!     KeywordCandidate::new("tools", 10.0),
//! ]);
//!
//! assert_eq!(result.field1.content, "seo tools");
//! assert!(result.field1.chars_used <= 29);
//! ```

mod allocator;
mod analyzer;
mod config;
mod error;
mod expander;
mod normalize;
mod scorer;
mod types;

pub use allocator::{AllocationState, Allocator};
pub use analyzer::{analyze, ReferenceVocabulary};
pub use config::{ExpansionConfig, FieldConfig, PlannerConfig, DEFAULT_STOP_WORDS};
pub use error::{PlannerError, Result};
pub use expander::Expander;
pub use normalize::{normalize_word, StopWords};
pub use scorer::{phrase_value, score, score_candidates, FIELD3_SCORE_FACTOR};
pub use types::{
    AnalysisRow, FieldId, FieldResult, KeywordCandidate, OptimizationResult, RewardVariants,
    ScoredCandidate,
};
