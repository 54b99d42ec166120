use crate::domain::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PacingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid campaign inputs: {0}")]
    ValidationError(ValidationErrors),
}

impl From<ValidationErrors> for PacingError {
    fn from(errors: ValidationErrors) -> Self {
        PacingError::ValidationError(errors)
    }
}

pub type Result<T> = std::result::Result<T, PacingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PacingError::from(err);
        assert!(matches!(err, PacingError::JsonError(_)));
        assert!(err.to_string().starts_with("JSON error: "));
    }
}
