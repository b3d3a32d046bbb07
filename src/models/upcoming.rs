//! Report row produced by the upcoming-birthdays query.

use crate::domain::birthday::BIRTHDAY_FORMAT;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// A contact whose birthday falls inside the reminder window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Weekend-adjusted date on which to congratulate
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(BIRTHDAY_FORMAT))
}

impl UpcomingBirthday {
    pub fn new(name: impl Into<String>, congratulation_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            congratulation_date,
        }
    }

    /// Congratulation date rendered as DD.MM.YYYY.
    pub fn date_string(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date_string())
    }
}
