use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::{char_len, split_words};

/// A keyword or phrase with its score, eligible for placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCandidate {
    /// Whitespace-separated phrase
    pub text: String,

    /// Score attached to the phrase before any reward shaping
    pub base_points: f64,
}

impl KeywordCandidate {
    pub fn new(text: impl Into<String>, base_points: f64) -> Self {
        Self {
            text: text.into(),
            base_points,
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        split_words(&self.text)
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Length of the phrase in characters
    #[must_use]
    pub fn char_len(&self) -> usize {
        char_len(&self.text)
    }
}

/// Per-field reward values derived from a candidate's base points
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardVariants {
    pub field1_points: f64,
    pub field2_points: f64,
    pub field3_points: f64,
}

/// A candidate together with its reward variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: KeywordCandidate,

    #[serde(flatten)]
    pub rewards: RewardVariants,
}

impl ScoredCandidate {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.candidate.text
    }

    #[must_use]
    pub const fn base_points(&self) -> f64 {
        self.candidate.base_points
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.candidate.words()
    }
}

/// One of the three output fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Field1,
    Field2,
    Field3,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Field1, FieldId::Field2, FieldId::Field3];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldId::Field1 => "field1",
            FieldId::Field2 => "field2",
            FieldId::Field3 => "field3",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text placed into a single field and the points it earned
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldResult {
    pub content: String,
    pub points: f64,
    pub chars_used: usize,
}

impl FieldResult {
    /// Build a result; `chars_used` is derived from `content`
    pub fn new(content: impl Into<String>, points: f64) -> Self {
        let content = content.into();
        let chars_used = char_len(&content);
        Self {
            content,
            points,
            chars_used,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Outcome of one optimization run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub field1: FieldResult,
    pub field2: FieldResult,
    pub field3: FieldResult,
    pub total_points: f64,
}

impl OptimizationResult {
    pub fn new(field1: FieldResult, field2: FieldResult, field3: FieldResult) -> Self {
        let total_points = field1.points + field2.points + field3.points;
        Self {
            field1,
            field2,
            field3,
            total_points,
        }
    }

    #[must_use]
    pub const fn field(&self, id: FieldId) -> &FieldResult {
        match id {
            FieldId::Field1 => &self.field1,
            FieldId::Field2 => &self.field2,
            FieldId::Field3 => &self.field3,
        }
    }

    /// Fields in placement order
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &FieldResult)> {
        FieldId::ALL.into_iter().map(move |id| (id, self.field(id)))
    }
}

/// Word-presence status of one input phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub phrase: String,

    /// The phrase's words, comma joined
    pub split_words: String,

    /// Words absent from the reference vocabulary, comma joined (empty if none)
    pub missing_words: String,
}
