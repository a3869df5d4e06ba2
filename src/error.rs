//! Error types for the memlayout engine.
//!
//! The layout pipeline itself never fails: degenerate input collapses to an
//! empty stack matrix and malformed addresses fail closed to `0`. These errors
//! surface only from the strict helpers around it (address parsing, loading
//! region trees and configuration).

use thiserror::Error;

/// Main error type for memlayout operations.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Address string is not a valid hexadecimal number
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Region tree is structurally invalid
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::Serialization(err.to_string())
    }
}

/// Result type alias for memlayout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
