//! Shared builders for integration tests.

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};

/// Build a date from day, month, year (panics on an invalid date).
#[allow(dead_code)]
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Build a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid test name");
    for phone in phones {
        record.add_phone(phone).expect("valid test phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid test birthday");
    }
    record
}

/// Build an address book from records, in order.
#[allow(dead_code)]
pub fn book_of(records: Vec<Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}
