use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::types::FieldId;

/// Function words that never earn a slot in the word-level field
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "to", "of", "an", "a", "in", "on", "with", "by", "as", "at", "is",
];

/// Capacity and reward multiplier of a single output field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Maximum number of characters the field may hold
    pub capacity: usize,

    /// Factor applied to every point earned in this field
    pub multiplier: f64,
}

impl FieldConfig {
    #[must_use]
    pub const fn new(capacity: usize, multiplier: f64) -> Self {
        Self {
            capacity,
            multiplier,
        }
    }

    fn validate(&self, name: &str) -> std::result::Result<(), String> {
        if self.capacity == 0 {
            return Err(format!("{name}.capacity must be > 0"));
        }
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            return Err(format!(
                "{name}.multiplier must be a finite, non-negative number (got {})",
                self.multiplier
            ));
        }
        Ok(())
    }
}

/// Synthetic keyword generation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Generate pairwise merged keywords before scoring
    pub enabled: bool,

    /// Longest merged keyword (in characters) that is kept
    pub max_length: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_length: 29,
        }
    }
}

/// Configuration for a planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// First keyword field (whole keywords)
    pub field1: FieldConfig,

    /// Second keyword field (whole keywords, fed from what field 1 left)
    pub field2: FieldConfig,

    /// Word-level field (individual words, comma separated)
    pub field3: FieldConfig,

    /// Pairwise keyword expansion
    pub expansion: ExpansionConfig,

    /// Words excluded from the word-level field (compared lower-cased)
    pub stop_words: Vec<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            field1: FieldConfig::new(29, 1.0),
            field2: FieldConfig::new(29, 1.0),
            field3: FieldConfig::new(100, 1.0 / 3.0),
            expansion: ExpansionConfig::default(),
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}

impl PlannerConfig {
    /// Create config that plans over the input keywords only
    pub fn without_expansion() -> Self {
        Self {
            expansion: ExpansionConfig {
                enabled: false,
                ..ExpansionConfig::default()
            },
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn field(&self, id: FieldId) -> FieldConfig {
        match id {
            FieldId::Field1 => self.field1,
            FieldId::Field2 => self.field2,
            FieldId::Field3 => self.field3,
        }
    }

    /// Parse a TOML document; missing sections keep their defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate().map_err(PlannerError::invalid_config)?;
        Ok(config)
    }

    /// Read and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        log::debug!("Loaded planner config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.field1.validate("field1")?;
        self.field2.validate("field2")?;
        self.field3.validate("field3")?;

        if self.expansion.enabled && self.expansion.max_length == 0 {
            return Err("expansion.max_length must be > 0 when expansion is enabled".to_string());
        }

        if let Some(word) = self.stop_words.iter().find(|w| w.trim().is_empty()) {
            return Err(format!("stop_words contains a blank entry: {word:?}"));
        }

        Ok(())
    }
}
