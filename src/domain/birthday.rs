//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Years a birthday can fall in. There is no year 0, and `YYYY` has four digits.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Parsed from the strict `DD.MM.YYYY` form and stored as a calendar date,
/// so impossible dates such as `31.02.2024` never get in.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.2000").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.2000");
/// assert!(Birthday::new("2000-06-15").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the string is not
    /// two-digit day, two-digit month and four-digit year separated by dots,
    /// or when those numbers do not name a real Gregorian date.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !BIRTHDAY_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidBirthday(value));
        }

        match NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT) {
            Ok(date) if YEAR_RANGE.contains(&date.year()) => Ok(Self(date)),
            _ => Err(ValidationError::InvalidBirthday(value)),
        }
    }

    /// Get the stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl TryFrom<NaiveDate> for Birthday {
    type Error = ValidationError;

    /// Accepts the same years as [`Birthday::new`].
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if !YEAR_RANGE.contains(&date.year()) {
            return Err(ValidationError::InvalidBirthday(date.to_string()));
        }
        Ok(Self(date))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

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
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
