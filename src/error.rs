//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Malformed input and missing entries are kept as separate kinds so callers can
//! report them differently.

use crate::domain::ValidationError;
use thiserror::Error;

/// A lookup for something that is not in the book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No phone with this value on the record
    #[error("Phone number not found: {0}")]
    Phone(String),

    /// No record with this name in the book
    #[error("Contact not found: {0}")]
    Contact(String),
}

/// Errors returned by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Input failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced phone or contact does not exist
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
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

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
