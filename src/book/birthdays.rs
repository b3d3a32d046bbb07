//! Upcoming-birthday scheduling.
//!
//! For a reference date, each birthday is projected onto the reference year
//! (or the next one if it already passed) and reported when it lands inside
//! the forward window. Weekend occurrences are congratulated on the
//! following Monday.

use crate::models::{Record, UpcomingBirthday};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Default size of the forward-looking window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// The birthday's month/day in `year`.
///
/// 29 February falls back to 28 February in non-leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// The first occurrence of the birthday on or after `reference`.
pub fn next_occurrence(birthday: NaiveDate, reference: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, reference.year())?;
    if this_year < reference {
        occurrence_in_year(birthday, reference.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday forward to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> Option<NaiveDate> {
    let shift = match occurrence.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    occurrence.checked_add_days(Days::new(shift))
}

/// The next occurrence, if it is at most `window_days` after `reference`.
fn occurrence_within(
    birthday: NaiveDate,
    reference: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, reference)?;
    let days_diff = (occurrence - reference).num_days();
    (0..=i64::from(window_days))
        .contains(&days_diff)
        .then_some(occurrence)
}

/// Birthdays from `records` that fall within `window_days` of `reference`.
///
/// Records without a birthday are skipped. Output follows the iteration
/// order of `records`.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    reference: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?.date();
            let occurrence = occurrence_within(birthday, reference, window_days)?;
            let date = congratulation_date(occurrence)?;
            Some(UpcomingBirthday::new(record.name().as_str(), date))
        })
        .collect()
}
