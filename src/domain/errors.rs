//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty after trimming.
    #[error("Name cannot be empty.")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Phone number must be exactly 10 digits: {0}")]
    InvalidPhone(String),

    /// The provided birthday is not a real DD.MM.YYYY date.
    #[error("Invalid date format. Use DD.MM.YYYY: {0}")]
    InvalidBirthday(String),
}
