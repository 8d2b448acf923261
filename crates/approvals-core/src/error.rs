// Rust guideline compliant 2026-10-18

//! Error types for the approval queue core library.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Priority value outside the closed HIGH / MEDIUM / NORMAL set.
    #[error("Invalid priority: {0:?} (expected HIGH, MEDIUM or NORMAL)")]
    InvalidPriority(String),

    /// Approval action outside approve / reject / request_changes.
    #[error("Invalid approval action: {0}")]
    InvalidAction(String),

    /// Reservation record failed validation.
    #[error("Invalid reservation: {0}")]
    InvalidReservation(String),

    /// Reservation not found.
    #[error("Reservation not found: {0}")]
    NotFound(String),

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// Configuration file or environment override is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
