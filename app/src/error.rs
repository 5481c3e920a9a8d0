//! Application error handling

use nutrikit_core::errors::ValidationError;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error")]
    Storage(#[from] anyhow::Error),

    #[error("External service error: {0}")]
    External(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts() {
        let err: AppError = ValidationError::new("weight", "must be a number").into();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: weight: must be a number");
    }
}
