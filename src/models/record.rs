//! Record model representing one contact in the address book.

use crate::domain::{parse_field, Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookResult, NotFoundError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder rendered when a record has no phones.
const NO_PHONES: &str = "no phones";

/// Placeholder rendered when a record has no birthday.
const NO_BIRTHDAY: &str = "not set";

/// A contact: a name, any number of phones and an optional birthday.
///
/// The name is fixed at construction. Every phone and the birthday went
/// through validation before being stored, so a `Record` never holds a
/// malformed field. Duplicate phones are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self::with_name(parse_field(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.push_phone(parse_field(phone)?);
        Ok(())
    }

    /// Append an already validated phone number.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone` and return it.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::Phone` if no phone matches; the list is untouched.
    pub fn remove_phone(&mut self, phone: &str) -> Result<PhoneNumber, NotFoundError> {
        let index = self
            .phone_position(phone)
            .ok_or_else(|| NotFoundError::Phone(phone.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace the first occurrence of `old` with `new`.
    ///
    /// The new phone is appended before the old one is removed, so editing a
    /// phone to its own value keeps it on the record.
    ///
    /// # Errors
    ///
    /// - `NotFoundError::Phone` if `old` is not on the record
    /// - `ValidationError::InvalidPhone` if `new` is malformed
    ///
    /// The record is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(NotFoundError::Phone(old.to_string()).into());
        }
        let replacement: PhoneNumber = parse_field(new)?;

        self.push_phone(replacement);
        self.remove_phone(old)?;
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn phone_position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(parse_field(birthday)?);
        Ok(())
    }

    /// Phones joined with `"; "`, or `None` when there are none.
    pub fn joined_phones(&self) -> Option<String> {
        if self.phones.is_empty() {
            return None;
        }
        Some(
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self.joined_phones();
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            phones.as_deref().unwrap_or(NO_PHONES),
            self.birthday
                .as_ref()
                .map_or(NO_BIRTHDAY, Birthday::as_str)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;

    fn phone_values(record: &Record) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_new_rejects_blank_name() {
        assert_eq!(Record::new("  "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(phone_values(&record), vec!["1234567890", "1234567890"]);
    }

    #[test]
    fn test_add_phone_rejects_malformed() {
        let mut record = Record::new("John").unwrap();
        assert!(matches!(
            record.add_phone("12345"),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_first_match() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        let removed = record.remove_phone("1111111111").unwrap();
        assert_eq!(removed.as_str(), "1111111111");
        assert_eq!(phone_values(&record), vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_phone_not_found_leaves_list() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1111111111").unwrap();

        let result = record.remove_phone("9999999999");
        assert_eq!(result, Err(NotFoundError::Phone("9999999999".to_string())));
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_edit_phone_replaces_value() {
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("1234567890").unwrap();

        record.edit_phone("1234567890", "0987654321").unwrap();
        assert_eq!(phone_values(&record), vec!["0987654321"]);
    }

    #[test]
    fn test_edit_phone_same_value_keeps_phone() {
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("1234567890").unwrap();

        record.edit_phone("1234567890", "1234567890").unwrap();
        assert_eq!(phone_values(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_edit_phone_missing_old_fails() {
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("1234567890").unwrap();

        let result = record.edit_phone("5555555555", "0987654321");
        assert!(matches!(
            result,
            Err(BookError::NotFound(NotFoundError::Phone(_)))
        ));
        assert_eq!(phone_values(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record() {
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("1234567890").unwrap();

        let result = record.edit_phone("1234567890", "bad");
        assert!(matches!(result, Err(BookError::Validation(_))));
        assert_eq!(phone_values(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("5555555555").unwrap();

        assert_eq!(
            record.find_phone("5555555555").map(PhoneNumber::as_str),
            Some("5555555555")
        );
        assert!(record.find_phone("1234567890").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("John").unwrap();
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().map(Birthday::as_str), Some("02.02.1992"));

        assert!(record.add_birthday("99.99.1999").is_err());
        assert_eq!(record.birthday().map(Birthday::as_str), Some("02.02.1992"));
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new("John").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: no phones, birthday: not set"
        );

        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_birthday("15.06.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: 15.06.1990"
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "John", "phones": ["1234567890"]})
        );
    }

    #[test]
    fn test_record_deserialization_validates_fields() {
        let json = r#"{"name":"John","phones":["123"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
