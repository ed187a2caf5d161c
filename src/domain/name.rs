//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// The name a contact is stored under.
///
/// Names are opaque: no trimming or case folding happens, so `"anna"` and
/// `"Anna"` are different contacts. The only rule is that a name cannot be
/// empty.
///
/// `ContactName` borrows as `str`, so maps keyed by names can be searched
/// with a plain `&str` straight from user input.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::ContactName;
///
/// let name = ContactName::new("Anna").unwrap();
/// assert_eq!(name.as_str(), "Anna");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContactName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_keeps_value_verbatim() {
        let name = ContactName::new("Anna-Maria").unwrap();
        assert_eq!(name.as_str(), "Anna-Maria");
        assert_eq!(name.to_string(), "Anna-Maria");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_is_case_sensitive() {
        assert_ne!(ContactName::new("anna").unwrap(), ContactName::new("Anna").unwrap());
    }

    #[test]
    fn test_name_keyed_map_is_searchable_by_str() {
        use std::collections::HashMap;

        let mut ages: HashMap<ContactName, u32> = HashMap::new();
        ages.insert(ContactName::new("Anna").unwrap(), 30);
        assert_eq!(ages.get("Anna"), Some(&30));
        assert_eq!(ages.get("anna"), None);
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<ContactName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
