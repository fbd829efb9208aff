//! Domain error types
//!
//! This module defines the error hierarchy for Docket. All errors are
//! domain-specific and don't expose third-party types.

use super::ids::ItemId;
use thiserror::Error;

/// Main Docket error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DocketError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Field-format validation errors (e.g. e-mail syntax)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Item store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Batch processing errors
    #[error("Processing error: {0}")]
    Processing(#[from] ProcessingError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Task-level processing failures
///
/// Each batch processing task terminates with exactly one of these causes.
/// None of them is retried; the first failure encountered in fold order
/// becomes the failure of the whole batch operation.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The item vanished between listing and processing
    #[error("Item {0} not found")]
    NotFound(ItemId),

    /// The processing wait was cancelled before the task could finish
    #[error("Interrupted while processing item {0}")]
    Interrupted(ItemId),

    /// The store rejected a read or write for the item
    #[error("Failed to persist item {id}: {cause}")]
    Persistence { id: ItemId, cause: String },
}

impl ProcessingError {
    /// The identifier of the item whose task failed
    pub fn item_id(&self) -> ItemId {
        match self {
            ProcessingError::NotFound(id) => *id,
            ProcessingError::Interrupted(id) => *id,
            ProcessingError::Persistence { id, .. } => *id,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for DocketError {
    fn from(err: std::io::Error) -> Self {
        DocketError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DocketError {
    fn from(err: serde_json::Error) -> Self {
        DocketError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DocketError {
    fn from(err: toml::de::Error) -> Self {
        DocketError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docket_error_display() {
        let err = DocketError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_processing_error_display() {
        let err = ProcessingError::NotFound(ItemId::new(2));
        assert_eq!(err.to_string(), "Item 2 not found");

        let err = ProcessingError::Interrupted(ItemId::new(5));
        assert_eq!(err.to_string(), "Interrupted while processing item 5");

        let err = ProcessingError::Persistence {
            id: ItemId::new(3),
            cause: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to persist item 3: disk full");
    }

    #[test]
    fn test_processing_error_conversion() {
        let processing_err = ProcessingError::NotFound(ItemId::new(1));
        let docket_err: DocketError = processing_err.into();
        assert!(matches!(docket_err, DocketError::Processing(_)));
    }

    #[test]
    fn test_processing_error_item_id() {
        assert_eq!(
            ProcessingError::NotFound(ItemId::new(4)).item_id(),
            ItemId::new(4)
        );
        assert_eq!(
            ProcessingError::Interrupted(ItemId::new(8)).item_id(),
            ItemId::new(8)
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let docket_err: DocketError = io_err.into();
        assert!(matches!(docket_err, DocketError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let docket_err: DocketError = json_err.into();
        assert!(matches!(docket_err, DocketError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let docket_err: DocketError = toml_err.into();
        assert!(matches!(docket_err, DocketError::Configuration(_)));
        assert!(docket_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = DocketError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;

        let err = ProcessingError::Interrupted(ItemId::new(1));
        let _: &dyn std::error::Error = &err;
    }
}
