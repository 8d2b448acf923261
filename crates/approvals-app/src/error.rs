// Rust guideline compliant 2026-10-18

//! Error handling for approval queue application services.

use approvals_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for machine-readable responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested reservation was not found.
    NotFound,
    /// The provided identifier matched multiple reservations.
    AmbiguousId,
    /// A priority value outside HIGH / MEDIUM / NORMAL.
    InvalidPriority,
    /// Record or configuration validation failed.
    ValidationError,
    /// IO failure while reading or writing workspace data.
    IoError,
    /// The `.approvals` workspace has not been initialized.
    NotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The approval handler refused or failed the action.
    HandlerError,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Workspace is missing or not initialized.
    #[error("Approval queue not initialized at {path}. Run 'aq init' first.")]
    NotInitialized {
        /// Path where `.approvals` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The approval handler failed to carry out the action.
    #[error("Approval handler failed: {0}")]
    Handler(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotInitialized { .. } => ErrorCode::NotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Handler(_) => ErrorCode::HandlerError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::InvalidPriority(_) => ErrorCode::InvalidPriority,
                CoreError::InvalidAction(_) => ErrorCode::InvalidInput,
                CoreError::InvalidReservation(_) | CoreError::Config(_) => {
                    ErrorCode::ValidationError
                }
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::NotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::AmbiguousId(partial, matches)) => Some(serde_json::json!({
                "partial": partial,
                "matches": matches,
            })),
            AppError::Core(CoreError::InvalidPriority(value)) => Some(serde_json::json!({
                "value": value,
                "allowed": ["HIGH", "MEDIUM", "NORMAL"],
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_priority_code_and_details() {
        let err = AppError::from(CoreError::InvalidPriority("LOW".to_string()));
        assert_eq!(err.code(), ErrorCode::InvalidPriority);
        let details = err.details().unwrap();
        assert_eq!(details["value"], "LOW");
    }

    #[test]
    fn test_not_initialized_message() {
        let err = AppError::NotInitialized {
            path: PathBuf::from("/tmp/x/.approvals"),
        };
        assert!(err.to_string().contains("aq init"));
        assert_eq!(err.code(), ErrorCode::NotInitialized);
    }
}
