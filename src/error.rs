//! Error types for the Tsumugi library.
//!
//! All errors are represented by the [`TsumugiError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use tsumugi::error::{Result, TsumugiError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TsumugiError::not_fitted("call fit() before transform()"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Tsumugi operations.
///
/// This enum represents all possible errors that can occur in the Tsumugi
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods.
#[derive(Error, Debug)]
pub enum TsumugiError {
    /// I/O errors (snapshot files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A transform or inverse transform was requested before `fit`.
    #[error("Not fitted: {0}")]
    NotFitted(String),

    /// An id passed to inverse_transform is outside the fitted vocabulary.
    #[error("Unknown index {id}: vocabulary size is {vocab_size}")]
    UnknownIndex { id: u32, vocab_size: usize },

    /// Field-related errors (unknown field name, missing transformer)
    #[error("Field error: {0}")]
    Field(String),

    /// Analysis-related errors (tokenization, transform stages)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Snapshot persistence errors (version mismatch, corrupt data)
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TsumugiError.
pub type Result<T> = std::result::Result<T, TsumugiError>;

impl TsumugiError {
    /// Create a new not-fitted error.
    pub fn not_fitted<S: Into<String>>(msg: S) -> Self {
        TsumugiError::NotFitted(msg.into())
    }

    /// Create a new unknown-index error.
    pub fn unknown_index(id: u32, vocab_size: usize) -> Self {
        TsumugiError::UnknownIndex { id, vocab_size }
    }

    /// Create a new field error.
    pub fn field<S: Into<String>>(msg: S) -> Self {
        TsumugiError::Field(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TsumugiError::Analysis(msg.into())
    }

    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        TsumugiError::Snapshot(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TsumugiError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TsumugiError::not_fitted("Indexer has not been fit");
        assert_eq!(error.to_string(), "Not fitted: Indexer has not been fit");

        let error = TsumugiError::field("no transformer for field 'label'");
        assert_eq!(
            error.to_string(),
            "Field error: no transformer for field 'label'"
        );

        let error = TsumugiError::unknown_index(42, 10);
        assert_eq!(error.to_string(), "Unknown index 42: vocabulary size is 10");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let tsumugi_error = TsumugiError::from(io_error);

        match tsumugi_error {
            TsumugiError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
