use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    /// Display is the bare key so callers can compare against the path element.
    #[error("{key}")]
    MissingKey { key: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Task failed to complete: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl DrillError {
    pub fn missing_key(key: impl Into<String>) -> Self {
        DrillError::MissingKey { key: key.into() }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DrillError::MissingKey { .. } => "Check the key path against the payload structure",
            DrillError::ApiError(_) => "Check network connectivity and the endpoint URL",
            DrillError::IoError(_) => "Check that the file exists and is readable",
            DrillError::SerializationError(_) => "The response body was not valid JSON",
            DrillError::TaskError(_) => "A spawned task panicked or was cancelled",
            DrillError::ConfigError { .. }
            | DrillError::MissingConfigError { .. }
            | DrillError::InvalidConfigValueError { .. } => "Fix the configuration file and retry",
            DrillError::ValidationError { .. } => "Check the command arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_displays_bare_key() {
        let err = DrillError::missing_key("b");
        assert_eq!(err.to_string(), "b");
    }

    #[test]
    fn test_invalid_value_message() {
        let err = DrillError::InvalidConfigValueError {
            field: "delays.n".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for delays.n: '0' (Value must be at least 1)"
        );
        assert_eq!(err.recovery_suggestion(), "Fix the configuration file and retry");
    }
}
