//! Splitting an input line into a command and its arguments.

use std::fmt;

/// Commands understood by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Anything else, lower-cased
    Unknown(String),
}

impl Command {
    /// Map a lower-cased command word to a command.
    pub fn from_word(word: &str) -> Self {
        match word {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
            Self::Unknown(word) => word,
        };
        write!(f, "{}", word)
    }
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split `line` on whitespace. The first token is the command (case
/// insensitive), the rest are arguments kept verbatim.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?.to_lowercase();
    Some(ParsedInput {
        command: Command::from_word(&word),
        args: tokens.map(str::to_string).collect(),
    })
}
