//! Error types for lcdsim.

use thiserror::Error;

/// Main error type for lcdsim operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid panel dimensions
    #[error("Invalid panel dimensions: {rows}x{cols}")]
    InvalidDimensions {
        /// Number of rows
        rows: u16,
        /// Number of columns
        cols: u16,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed capture file
    #[error("Capture error: {0}")]
    Capture(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
