//! User commands.
//!
//! Input lines are split into a [`Command`] and its arguments by
//! [`parse_input`], then executed against the address book by an
//! [`Assistant`].

pub mod handlers;
pub mod parser;

pub use handlers::{Assistant, Reply};
pub use parser::{parse_input, Command, ParsedInput};
