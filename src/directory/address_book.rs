//! The address book: contact records keyed by name.

use super::birthdays::{upcoming_birthdays, UpcomingBirthdays, DEFAULT_WINDOW_DAYS};
use crate::domain::ContactName;
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// In-memory store of contact records, keyed by the exact contact name.
///
/// Iteration follows insertion order. Replacing a record under an existing
/// name keeps that name's original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<ContactName, Record>,
    order: Vec<ContactName>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record stored under the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().clone();
        if self.records.insert(key.clone(), record).is_some() {
            debug!(name = %key, "replaced existing record");
        } else {
            debug!(name = %key, "added record");
            self.order.push(key);
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Absent names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key.as_str() != name);
        debug!(name, "deleted record");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Birthdays in the seven days following `today`, today included.
    pub fn birthdays_per_week(&self, today: NaiveDate) -> UpcomingBirthdays {
        self.birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays in `[today, today + window_days]`, grouped by greeting day.
    pub fn birthdays_within(&self, today: NaiveDate, window_days: u32) -> UpcomingBirthdays {
        upcoming_birthdays(self.iter(), today, window_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(ContactName::new(name).unwrap());
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));

        let found = book.find("John").unwrap();
        assert_eq!(found.name().as_str(), "John");
        assert!(book.find("john").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_overwrites_same_name_keeping_position() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1111111111"));
        book.add_record(record("Jane", "2222222222"));
        book.add_record(record("John", "3333333333"));

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["John", "Jane"]);
        assert_eq!(book.find("John").unwrap().phone_list(), "3333333333");
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1111111111"));

        book.find_mut("John").unwrap().add_phone("2222222222").unwrap();
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1111111111"));
        book.add_record(record("Jane", "2222222222"));

        assert!(book.delete("John").is_some());
        assert!(book.find("John").is_none());
        assert_eq!(book.iter().count(), 1);

        assert!(book.delete("John").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_empty_book() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.iter().count(), 0);
        assert!(book
            .birthdays_per_week(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
            .is_empty());
    }
}
