//! The address book: records keyed by contact name.
//!
//! Records are kept in insertion order. Replacing a record under an existing
//! name keeps its position; deleting and re-adding moves it to the end.

pub mod birthdays;

use crate::domain::{parse_field, ContactName, PhoneNumber};
use crate::error::BookResult;
use crate::models::{Record, UpcomingBirthday};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

pub use birthdays::DEFAULT_WINDOW_DAYS;

/// Rendering of a book with no records.
pub const EMPTY_BOOK: &str = "Contact list is empty.";

/// Outcome of [`AddressBook::upsert_contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new record was created for the name
    Created,
    /// The phone was added to an existing record
    Updated,
}

/// A keyed collection of contact records.
///
/// The key of every entry equals the name of the record stored under it.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, replacing any record with that name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key.clone(), record);
        if previous.is_none() {
            debug!(name = %key, "record created");
            self.order.push(key);
        }
        previous
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-match lookup by name for in-place updates.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record with this name. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        debug!(name, "record deleted");
        Some(removed)
    }

    /// Add `phone` to the record named `name`, creating the record if needed.
    ///
    /// Both values are validated before anything is stored, so a malformed
    /// phone never leaves an empty record behind.
    pub fn upsert_contact(&mut self, name: &str, phone: &str) -> BookResult<Upsert> {
        let name: ContactName = parse_field(name)?;
        let phone: PhoneNumber = parse_field(phone)?;

        if let Some(record) = self.records.get_mut(name.as_str()) {
            record.push_phone(phone);
            return Ok(Upsert::Updated);
        }

        let mut record = Record::with_name(name);
        record.push_phone(phone);
        self.add_record(record);
        Ok(Upsert::Created)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays within `window_days` of `reference`, in insertion order.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let upcoming = birthdays::upcoming_birthdays(self.iter(), reference, window_days);
        debug!(
            %reference,
            window_days,
            count = upcoming.len(),
            "upcoming birthdays computed"
        );
        upcoming
    }

    /// All records as a pretty-printed JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let records: Vec<&Record> = self.iter().collect();
        serde_json::to_string_pretty(&records)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", EMPTY_BOOK);
        }
        let lines: Vec<String> = self.iter().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
