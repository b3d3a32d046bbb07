//! Integration tests for records and the address book public API.

mod fixtures;

use contact_book::book::DEFAULT_WINDOW_DAYS;
use contact_book::{
    AddressBook, BookError, NotFoundError, PhoneNumber, Record, UpcomingBirthday, ValidationError,
};
use fixtures::{book_of, date, record};

fn phones_of(book: &AddressBook, name: &str) -> Vec<String> {
    book.find(name)
        .expect("record exists")
        .phones()
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}

#[test]
fn test_phone_validation_rejects_every_malformed_shape() {
    let malformed = [
        "", "1", "123456789", "12345678901", "12345abcde", "12345 6789", "(123)45678",
        "+380501234", "１２３４５６７８９０",
    ];
    for raw in malformed {
        assert!(
            matches!(PhoneNumber::new(raw), Err(ValidationError::InvalidPhone(_))),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_valid_phone_round_trips() {
    for raw in ["0123456789", "5555555555", "0000000000"] {
        assert_eq!(PhoneNumber::new(raw).unwrap().to_string(), raw);
    }
}

#[test]
fn test_record_lifecycle_from_original_walkthrough() {
    let mut book = book_of(vec![
        record("John", &["1234567890", "5555555555"], None),
        record("Jane", &["9876543210"], None),
    ]);

    let john = book.find_mut("John").unwrap();
    john.edit_phone("1234567890", "1112223333").unwrap();
    john.remove_phone("5555555555").unwrap();
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1112223333, birthday: not set"
    );
    assert!(john.find_phone("5555555555").is_none());

    book.delete("Jane");
    assert_eq!(
        book.to_string(),
        "Contact name: John, phones: 1112223333, birthday: not set"
    );
}

#[test]
fn test_remove_missing_phone_is_not_found() {
    let mut book = book_of(vec![record("Ann", &["1234567890"], None)]);
    let ann = book.find_mut("Ann").unwrap();

    assert_eq!(
        ann.remove_phone("0000000000"),
        Err(NotFoundError::Phone("0000000000".to_string()))
    );
    assert_eq!(phones_of(&book, "Ann"), vec!["1234567890"]);
}

#[test]
fn test_edit_phone_to_same_value_keeps_it() {
    let mut book = book_of(vec![record("Ann", &["1234567890", "1111111111"], None)]);

    book.find_mut("Ann")
        .unwrap()
        .edit_phone("1234567890", "1234567890")
        .unwrap();

    let mut phones = phones_of(&book, "Ann");
    phones.sort();
    assert_eq!(phones, vec!["1111111111", "1234567890"]);
}

#[test]
fn test_failed_edit_leaves_record_unchanged() {
    let mut book = book_of(vec![record("Ann", &["1234567890"], None)]);
    let before = book.find("Ann").unwrap().clone();

    let ann = book.find_mut("Ann").unwrap();
    assert!(matches!(
        ann.edit_phone("1234567890", "nope"),
        Err(BookError::Validation(_))
    ));
    assert!(matches!(
        ann.edit_phone("9999999999", "0987654321"),
        Err(BookError::NotFound(_))
    ));
    assert_eq!(book.find("Ann"), Some(&before));
}

#[test]
fn test_delete_absent_name_changes_nothing() {
    let mut book = book_of(vec![record("Ann", &["1234567890"], None)]);
    let before = book.to_string();

    assert!(book.delete("Bob").is_none());
    assert_eq!(book.to_string(), before);
    assert_eq!(book.len(), 1);
}

#[test]
fn test_end_to_end_edit_then_birthday() {
    let mut book = AddressBook::new();
    book.add_record(record("Ann", &["1234567890"], None));

    let ann = book.find_mut("Ann").unwrap();
    ann.edit_phone("1234567890", "0987654321").unwrap();
    assert_eq!(phones_of(&book, "Ann"), vec!["0987654321"]);

    book.find_mut("Ann").unwrap().add_birthday("15.06.2030").unwrap();
    let upcoming = book.upcoming_birthdays(date(10, 6, 2030), DEFAULT_WINDOW_DAYS);

    // 15.06.2030 falls on a Saturday, so the reminder moves to Monday
    assert_eq!(upcoming, vec![UpcomingBirthday::new("Ann", date(17, 6, 2030))]);
    assert_eq!(upcoming[0].to_string(), "Ann: 17.06.2030");
}

#[test]
fn test_birthday_today_on_weekday() {
    // 18.06.2030 is a Tuesday
    let book = book_of(vec![record("Ann", &[], Some("18.06.1990"))]);
    let upcoming = book.upcoming_birthdays(date(18, 6, 2030), DEFAULT_WINDOW_DAYS);
    assert_eq!(upcoming, vec![UpcomingBirthday::new("Ann", date(18, 6, 2030))]);
}

#[test]
fn test_birthday_eight_days_ahead_is_excluded() {
    let book = book_of(vec![record("Ann", &[], Some("18.06.1990"))]);
    assert!(book
        .upcoming_birthdays(date(10, 6, 2030), DEFAULT_WINDOW_DAYS)
        .is_empty());
}

#[test]
fn test_weekend_shifts() {
    // 15.06.2024 is a Saturday and 16.06.2024 a Sunday
    let book = book_of(vec![
        record("Sat", &[], Some("15.06.2000")),
        record("Sun", &[], Some("16.06.2000")),
        record("None", &["1234567890"], None),
    ]);
    let upcoming = book.upcoming_birthdays(date(12, 6, 2024), DEFAULT_WINDOW_DAYS);
    assert_eq!(
        upcoming,
        vec![
            UpcomingBirthday::new("Sat", date(17, 6, 2024)),
            UpcomingBirthday::new("Sun", date(17, 6, 2024)),
        ]
    );
}

#[test]
fn test_upcoming_birthdays_does_not_mutate() {
    let book = book_of(vec![record("Ann", &["1234567890"], Some("12.06.1990"))]);
    let before = book.to_string();
    let _ = book.upcoming_birthdays(date(10, 6, 2030), DEFAULT_WINDOW_DAYS);
    assert_eq!(book.to_string(), before);
}

#[test]
fn test_create_record_rejects_blank_name() {
    assert_eq!(Record::new(""), Err(ValidationError::EmptyName));
}
