//! ContactName value object.

use super::errors::ValidationError;
use super::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for contact names.
///
/// Surrounding whitespace is trimmed at construction and the remaining
/// value cannot be empty. The name is the identity of a record and never
/// changes once the record exists.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactName;
///
/// let name = ContactName::new("  Ann ").unwrap();
/// assert_eq!(name.as_str(), "Ann");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for ContactName {
    const KIND: &'static str = "name";

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContactName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
