//! Data models for the contact directory.
//!
//! A [`Record`] is everything the directory knows about one person.

pub mod record;

pub use record::Record;
