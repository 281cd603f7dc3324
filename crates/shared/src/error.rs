//! Error types for Agent Builder

use thiserror::Error;

/// Error returned when a memory kind name is not one of the five fixed kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown memory kind '{kind}'. Expected one of: {}", expected.join(", "))]
pub struct InvalidMemoryKindError {
    pub kind: String,
    pub expected: Vec<&'static str>,
}

/// Error returned when a phase number is outside 1..=3
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid phase {value}. Phases are numbered 1 to 3")]
pub struct InvalidPhaseError {
    pub value: u8,
}

/// General Agent Builder error type
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error(transparent)]
    InvalidMemoryKind(#[from] InvalidMemoryKindError),

    #[error(transparent)]
    InvalidPhase(#[from] InvalidPhaseError),

    #[error("Unsupported schema version {found} (this build understands up to {supported})")]
    UnsupportedSchemaVersion { found: u64, supported: u64 },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BuilderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_memory_kind_message() {
        let err = InvalidMemoryKindError {
            kind: "longTerm".to_string(),
            expected: vec!["shortTerm", "episodic"],
        };

        assert_eq!(
            err.to_string(),
            "Unknown memory kind 'longTerm'. Expected one of: shortTerm, episodic"
        );
    }

    #[test]
    fn test_builder_error_is_transparent() {
        let err: BuilderError = InvalidPhaseError { value: 4 }.into();
        assert_eq!(err.to_string(), "Invalid phase 4. Phases are numbered 1 to 3");
    }

    #[test]
    fn test_unsupported_version_message() {
        let err = BuilderError::UnsupportedSchemaVersion { found: 9, supported: 1 };
        assert!(err.to_string().contains("9"));
        assert!(err.to_string().contains("up to 1"));
    }
}
