//! Shared fixtures for integration tests.

use chrono::NaiveDate;
use contact_assistant::{Assistant, FixedClock, Reply};
use std::sync::Arc;

/// Monday, 10 June 2024.
#[allow(dead_code)]
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// An assistant whose "today" is `today` and whose window is seven days.
#[allow(dead_code)]
pub fn assistant_on(today: NaiveDate) -> Assistant {
    Assistant::new(Arc::new(FixedClock(today)), 7)
}

/// Run one input line and return the printed text.
#[allow(dead_code)]
pub fn say(assistant: &mut Assistant, line: &str) -> String {
    let Reply { text, .. } = assistant
        .handle_line(line)
        .unwrap_or_else(|| panic!("no reply for {:?}", line));
    text
}
