//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name, its phone numbers in the order they were added,
/// and an optional birthday.
///
/// Duplicate phone numbers are allowed; lookups return the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// The name the contact is stored under
    name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Date of birth, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with a birthday already set.
    pub fn with_birthday(name: ContactName, birthday: Birthday) -> Self {
        Self {
            birthday: Some(birthday),
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it to the phone list.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old_number` with `new_number`.
    ///
    /// `new_number` is validated before anything else. Returns `Ok(false)`
    /// when no phone matches `old_number`; the record is left untouched.
    pub fn edit_phone(
        &mut self,
        old_number: &str,
        new_number: &str,
    ) -> Result<bool, ValidationError> {
        let replacement = PhoneNumber::new(new_number)?;
        match self.phones.iter_mut().find(|phone| **phone == *old_number) {
            Some(phone) => {
                *phone = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// First phone equal to `number`, in insertion order.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| **phone == *number)
    }

    /// Set or overwrite the birthday.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Phones joined with `", "`, as printed by the `phone` and `all` commands.
    pub fn phone_list(&self) -> String {
        self.joined_phones(", ")
    }

    fn joined_phones(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.joined_phones("; ")
        )
    }
}
