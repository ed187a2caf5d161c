//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real date in `DD.MM.YYYY` form.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "phone must be exactly 10 digits"),
            Self::InvalidBirthday(_) => write!(f, "birthday must match DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_do_not_echo_input() {
        let err = ValidationError::InvalidPhone("12ab".to_string());
        assert_eq!(err.to_string(), "phone must be exactly 10 digits");

        let err = ValidationError::InvalidBirthday("31.02.2024".to_string());
        assert_eq!(err.to_string(), "birthday must match DD.MM.YYYY");
    }
}
