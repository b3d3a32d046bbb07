//! Birthday value object.

use super::errors::ValidationError;
use super::Field;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Display and parse format for birthdays (DD.MM.YYYY).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").expect("Failed to compile birthday regex")
});

/// A type-safe wrapper for a birth date.
///
/// The raw value must have the exact `DD.MM.YYYY` shape and name a real
/// calendar day, so `31.02.2020` and `1.2.2020` are both rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
/// assert!(Birthday::new("30.02.1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format and the calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value does not have
    /// the `DD.MM.YYYY` shape or the day/month are out of range.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        let Some(date) = Self::parse(&raw) else {
            return Err(ValidationError::InvalidBirthday(raw));
        };

        Ok(Self { raw, date })
    }

    fn parse(raw: &str) -> Option<NaiveDate> {
        let caps = BIRTHDAY_SHAPE.captures(raw)?;
        let day = caps[1].parse::<u32>().ok()?;
        let month = caps[2].parse::<u32>().ok()?;
        let year = caps[3].parse::<i32>().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Get the birthday as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Field for Birthday {
    const KIND: &'static str = "birthday";

    fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
