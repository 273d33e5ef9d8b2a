//! Error types for the fantasy scoring engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum ScoringError {
    /// A scoring configuration is unusable. Every problem found is listed.
    #[error("Invalid scoring configuration: {}", problems.join("; "))]
    Configuration { problems: Vec<String> },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Tiebreak method '{method}' requires a value for participant {participant}")]
    MissingTiebreakValue { method: String, participant: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid round: {round}")]
    InvalidRound { round: String },

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),
}

impl ScoringError {
    pub fn configuration(problem: impl Into<String>) -> Self {
        ScoringError::Configuration {
            problems: vec![problem.into()],
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        ScoringError::InvalidInput {
            message: message.into(),
        }
    }

    /// True for errors the caller should treat as a rejected configuration
    /// version (keep using the last-known-good one).
    pub fn is_configuration(&self) -> bool {
        matches!(self, ScoringError::Configuration { .. })
    }
}
