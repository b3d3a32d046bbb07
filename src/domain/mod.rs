//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers and birthdays. Each value object is validated at
//! construction time, so an invalid value can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;

use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Capability shared by every validated contact field.
///
/// Parsing goes through `FromStr`, rendering through `Display`, and
/// `as_str` exposes the raw value that passed validation.
pub trait Field: fmt::Display + FromStr<Err = ValidationError> {
    /// Human-readable field kind, used in log output.
    const KIND: &'static str;

    /// Get the validated raw value.
    fn as_str(&self) -> &str;
}

/// Parse a raw value into a field, logging rejected input.
pub fn parse_field<F: Field>(raw: &str) -> Result<F, ValidationError> {
    raw.parse::<F>().map_err(|err| {
        debug!(kind = F::KIND, value = raw, "field rejected");
        err
    })
}
