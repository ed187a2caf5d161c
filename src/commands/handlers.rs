//! Command handlers.
//!
//! Every handler returns a [`CommandResult`]; [`Assistant::handle`] turns
//! errors into their user-facing message, so nothing propagates past it.

use super::parser::{parse_input, Command, ParsedInput};
use crate::clock::Clock;
use crate::config::Config;
use crate::directory::AddressBook;
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use std::sync::Arc;
use tracing::{debug, info};

/// Output of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to print
    pub text: String,

    /// The session should end after printing
    pub exit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }
}

/// Take exactly `N` arguments or fail with `MissingArguments`.
fn exact_args<const N: usize>(args: &[String]) -> CommandResult<[&str; N]> {
    if args.len() != N {
        return Err(CommandError::MissingArguments);
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// Owns the address book for one session and executes commands on it.
pub struct Assistant {
    book: AddressBook,
    clock: Arc<dyn Clock>,
    window_days: u32,
}

impl Assistant {
    pub fn new(clock: Arc<dyn Clock>, window_days: u32) -> Self {
        Self {
            book: AddressBook::new(),
            clock,
            window_days,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.clock(), config.birthday_window_days)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Parse and execute one input line. Blank lines give `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        parse_input(line).map(|input| self.handle(&input))
    }

    /// Execute a parsed command. Errors become the reply text.
    pub fn handle(&mut self, input: &ParsedInput) -> Reply {
        debug!(command = %input.command, args = input.args.len(), "handling command");

        let args = input.args.as_slice();
        let result = match &input.command {
            Command::Hello => Ok(Self::hello()),
            Command::Add => self.add_contact(args),
            Command::Change => self.change_contact(args),
            Command::Phone => self.show_phone(args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday => self.add_birthday(args),
            Command::ShowBirthday => self.show_birthday(args),
            Command::Birthdays => Ok(self.birthdays()),
            Command::Exit => {
                return Reply {
                    text: "Good bye!".to_string(),
                    exit: true,
                }
            }
            Command::Unknown(word) => Err(CommandError::Unrecognized(word.clone())),
        };

        match result {
            Ok(text) => Reply::text(text),
            Err(e) => {
                debug!(command = %input.command, error = ?e, "command failed");
                Reply::text(e.to_string())
            }
        }
    }

    pub fn hello() -> String {
        "How can I help you?".to_string()
    }

    /// `add <name> <phone>`: store a new contact, replacing any contact
    /// with the same name.
    pub fn add_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone] = exact_args(args)?;
        let mut record = Record::new(ContactName::new(name)?);
        record.add_phone(phone)?;
        self.book.add_record(record);

        info!(name, "contact added");
        Ok("Contact added.".to_string())
    }

    /// `change <name> <phone>`: replace the contact's first phone.
    pub fn change_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone] = exact_args(args)?;
        let record = self.book.find_mut(name).ok_or(CommandError::NotFound)?;
        let old = record
            .phones()
            .first()
            .map(|p| p.as_str().to_string())
            .ok_or(CommandError::NotFound)?;

        if !record.edit_phone(&old, phone)? {
            return Err(CommandError::NotFound);
        }

        info!(name, "contact updated");
        Ok("Contact updated.".to_string())
    }

    /// `phone <name>`: the contact's phones, comma separated.
    pub fn show_phone(&self, args: &[String]) -> CommandResult<String> {
        let [name] = exact_args(args)?;
        self.book
            .find(name)
            .map(Record::phone_list)
            .ok_or(CommandError::NotFound)
    }

    /// `all`: one `name: phones` line per contact.
    pub fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts stored.".to_string();
        }

        self.book
            .iter()
            .map(|record| format!("{}: {}", record.name(), record.phone_list()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `add-birthday <name> <DD.MM.YYYY>`
    pub fn add_birthday(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, birthday] = exact_args(args)?;
        let record = self
            .book
            .find_mut(name)
            .ok_or(CommandError::ContactNotFound)?;
        record.add_birthday(birthday)?;

        info!(name, "birthday added");
        Ok("Birthday added.".to_string())
    }

    /// `show-birthday <name>`
    pub fn show_birthday(&self, args: &[String]) -> CommandResult<String> {
        let [name] = exact_args(args)?;
        self.book
            .find(name)
            .and_then(Record::birthday)
            .map(ToString::to_string)
            .ok_or(CommandError::NoBirthday)
    }

    /// `birthdays`: upcoming birthdays grouped by greeting day.
    pub fn birthdays(&self) -> String {
        let today = self.clock.today();
        let upcoming = self.book.birthdays_within(today, self.window_days);
        if upcoming.is_empty() {
            return "No birthdays next week.".to_string();
        }
        upcoming.to_string()
    }
}
