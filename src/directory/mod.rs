//! In-memory contact directory.
//!
//! [`AddressBook`] maps contact names to [`Record`](crate::models::Record)s
//! and answers the "whose birthday is coming up" query.

pub mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::{weekday_name, BirthdayBucket, UpcomingBirthdays, DEFAULT_WINDOW_DAYS};
