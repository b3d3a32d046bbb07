//! Contact Book - an in-memory contact directory with birthday reminders.
//!
//! Contacts carry a validated name, any number of ten-digit phone numbers and
//! an optional birthday. The address book answers which birthdays fall within
//! the next few days, moving weekend dates to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: The contact record and the birthday report row
//! - **book**: The address book and the birthday scheduler
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **matching**: Name suggestions for failed lookups
//! - **commands**: Command parsing and dispatch
//! - **session**: The interactive read/print loop

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod session;

pub use book::{AddressBook, Upsert};
pub use commands::{Assistant, Command, CommandError, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, Field, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError, NotFoundError};
pub use matching::NameMatcher;
pub use models::{Record, UpcomingBirthday};
