//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by contact book operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A phone, birthday or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist
    #[error("Contact '{0}' does not exist.")]
    NotFound(String),

    /// A command was issued without one of its required arguments
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// A command argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Loading or saving the snapshot failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while loading or saving a snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON or holds invalid records
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::NotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact 'John' does not exist.");

        let err = BookError::from(ValidationError::InvalidPhone("12".to_string()));
        assert_eq!(err.to_string(), "Invalid phone number: 12");

        let err = BookError::MissingArgument("phone");
        assert_eq!(err.to_string(), "Missing argument: phone");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_HORIZON_DAYS".to_string(),
            reason: "Must be between 0 and 366".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_HORIZON_DAYS: Must be between 0 and 366"
        );
    }

    #[test]
    fn test_storage_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BookError::from(StorageError::from(io));
        assert!(matches!(err, BookError::Storage(StorageError::Io(_))));
        assert!(err.to_string().contains("denied"));
    }
}
