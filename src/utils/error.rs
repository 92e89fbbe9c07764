use crate::domain::model::RecordKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("{kind} '{name}' not found. Options: {options}")]
    NotFound {
        kind: RecordKind,
        name: String,
        options: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GuideError {
    /// Lookup failures are reported as usage errors; everything else is a runtime failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GuideError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = GuideError::NotFound {
            kind: RecordKind::UseCase,
            name: "churn".to_string(),
            options: "A, B".to_string(),
        };
        assert_eq!(err.to_string(), "Use case 'churn' not found. Options: A, B");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_errors_are_not_lookup_failures() {
        let err = GuideError::ConfigError {
            message: "broken".to_string(),
        };
        assert!(!err.is_not_found());
    }
}
