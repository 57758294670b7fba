//! Error types for building and rendering ABA files.

use thiserror::Error;

/// Result type alias for ABA operations
pub type Result<T> = std::result::Result<T, AbaError>;

/// Errors that can occur while building, rendering or loading an ABA file.
#[derive(Error, Debug)]
pub enum AbaError {
    /// A field value violates its format or range contract
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Render was requested before a descriptive record was set
    #[error("No descriptive record has been set")]
    NoHeader,

    /// Ledger index out of bounds
    #[error("No detail record at index {index} (ledger holds {len})")]
    NotFound { index: usize, len: usize },

    /// Invalid row in an input file
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

impl AbaError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AbaError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Returns `true` for field validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, AbaError::Validation { .. })
    }
}
