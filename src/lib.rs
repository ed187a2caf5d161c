//! Contact Assistant - an interactive command-line contact directory.
//!
//! Users add contacts with phone numbers and birthdays, look them up,
//! update them and list the birthdays coming up in the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact `Record`
//! - **directory**: The in-memory `AddressBook` and the birthday query
//! - **commands**: Input parsing and one handler per user command
//! - **repl**: The read-eval-print session over stdin/stdout
//! - **clock**: Where "today" comes from
//! - **config**: Configuration from environment variables
//! - **error**: Error types for handlers and configuration

pub mod clock;
pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{parse_input, Assistant, Command, ParsedInput, Reply};
pub use config::Config;
pub use directory::{AddressBook, BirthdayBucket, UpcomingBirthdays};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::Record;
