//! Upcoming-birthday query.
//!
//! For each record with a birthday, the next anniversary on or after
//! `today` is computed. Records whose anniversary lands within
//! `[today, today + window]` are grouped by weekday, except that Saturday
//! and Sunday anniversaries are greeted on Monday. Only the bucket label
//! moves; the date itself is never shifted.

use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;
use tracing::debug;

/// Width of the birthday window in days past today.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// English name of a weekday, as shown to the user.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Names to greet on one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayBucket {
    pub day: Weekday,
    pub names: Vec<String>,
}

/// Result of the birthday query.
///
/// Buckets appear in the order their weekday was first seen while walking
/// the directory; names inside a bucket keep directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    buckets: Vec<BirthdayBucket>,
}

impl UpcomingBirthdays {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn buckets(&self) -> &[BirthdayBucket] {
        &self.buckets
    }

    /// Names in the bucket for `day`, if any.
    pub fn names_for(&self, day: Weekday) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|bucket| bucket.day == day)
            .map(|bucket| bucket.names.as_slice())
    }

    fn push(&mut self, day: Weekday, name: &str) {
        match self.buckets.iter_mut().find(|bucket| bucket.day == day) {
            Some(bucket) => bucket.names.push(name.to_string()),
            None => self.buckets.push(BirthdayBucket {
                day,
                names: vec![name.to_string()],
            }),
        }
    }
}

impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .buckets
            .iter()
            .map(|bucket| format!("{}: {}", weekday_name(bucket.day), bucket.names.join(", ")))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Weekend anniversaries are greeted on Monday.
fn greeting_day(date: NaiveDate) -> Weekday {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        day => day,
    }
}

/// Next anniversary of the record's birthday on or after `today`.
fn next_anniversary(record: &Record, today: NaiveDate) -> Option<NaiveDate> {
    let birthday = record.birthday()?;
    let this_year = birthday.anniversary_in(today.year())?;
    if this_year < today {
        birthday.anniversary_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Group the records whose next anniversary falls within `window_days` of
/// `today` (both ends inclusive).
pub fn upcoming_birthdays<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    today: NaiveDate,
    window_days: u32,
) -> UpcomingBirthdays {
    let window_end = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    let mut upcoming = UpcomingBirthdays::default();

    for record in records {
        let Some(anniversary) = next_anniversary(record, today) else {
            continue;
        };
        if anniversary > window_end {
            continue;
        }

        let day = greeting_day(anniversary);
        debug!(
            name = record.name().as_str(),
            %anniversary,
            day = weekday_name(day),
            "birthday within window"
        );
        upcoming.push(day, record.name().as_str());
    }

    upcoming
}
