use thiserror::Error;

/// Result type for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Errors that can occur while preparing a planning run
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file is not valid TOML for `PlannerConfig`
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PlannerError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
