//! Error types for Cue

use thiserror::Error;

/// Result type alias for Cue operations
pub type CueResult<T> = Result<T, CueError>;

/// Main error type for Cue
///
/// The evaluation path itself never surfaces these: by contract it degrades
/// to an empty activation result. They exist for the resolution and loader
/// seams that callers may drive directly.
#[derive(Error, Debug, Clone)]
pub enum CueError {
    /// Rule document errors
    #[error("Rules error: {0}")]
    Rules(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CueError {
    /// Create a new rules error
    pub fn rules(message: impl Into<String>) -> Self {
        Self::Rules(message.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<std::io::Error> for CueError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for CueError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}
