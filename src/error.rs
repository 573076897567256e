//! Error types for mvd-search.
//!
//! All fallible operations in this crate return [`MvdError`] through the
//! [`Result`] alias. Failures are deterministic: they signal a caller bug
//! (a precondition violation) or corrupt/foreign data, never a transient
//! condition worth retrying.
//!
//! # Examples
//!
//! ```
//! use mvd_search::error::{MvdError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MvdError::invalid_argument("fragment index out of range"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for mvd-search operations.
#[derive(Error, Debug)]
pub enum MvdError {
    /// I/O errors while reading or writing persisted streams.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A compressed array whose header or payload cannot be decoded.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A caller supplied arguments that violate an operation's preconditions.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Persisted stream errors (bad checksum, truncated stream, ...).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with MvdError.
pub type Result<T> = std::result::Result<T, MvdError>;

impl MvdError {
    /// Create a new invalid format error.
    pub fn invalid_format<S: Into<String>>(msg: S) -> Self {
        MvdError::InvalidFormat(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MvdError::InvalidArgument(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        MvdError::Storage(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MvdError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MvdError::Other(msg.into())
    }
}
