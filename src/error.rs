//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror`. The display
//! strings of [`CommandError`] are exactly what the user sees.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can run into.
///
/// Handlers never let these escape: the dispatcher prints the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for the command
    #[error("Missing arguments")]
    MissingArguments,

    /// No contact (or no phone to replace) under that name
    #[error("Not found.")]
    NotFound,

    /// No contact to attach a birthday to
    #[error("Contact not found.")]
    ContactNotFound,

    /// Contact missing, or it has no birthday yet
    #[error("No birthday found for this contact.")]
    NoBirthday,

    /// Malformed phone or birthday
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The command word is not known
    #[error("Command '{0}' not recognized")]
    Unrecognized(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for handler results
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
