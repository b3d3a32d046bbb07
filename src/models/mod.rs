//! Data models for the contact book.
//!
//! This module contains the contact record and the birthday report row.

pub mod record;
pub mod upcoming;

pub use record::Record;
pub use upcoming::UpcomingBirthday;
