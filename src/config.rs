//! Configuration management for the contact assistant.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file. Everything has a default, so an empty environment gives the
//! plain interactive assistant.

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::directory::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;
use std::sync::Arc;

/// Longest birthday window accepted, in days.
const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Days past today covered by `birthdays` (default: 7)
    pub birthday_window_days: u32,

    /// Pins "today" instead of reading the system clock
    pub today: Option<NaiveDate>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `BIRTHDAY_WINDOW_DAYS`: Birthday window in days, 0-366 (default: 7)
    /// - `ASSISTANT_TODAY`: Fixed current date as `YYYY-MM-DD`
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // .env is optional
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let today = Self::parse_env_date("ASSISTANT_TODAY")?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            prompt,
            birthday_window_days,
            today,
            log_level,
        })
    }

    /// The clock the assistant should use for "today".
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.today {
            Some(date) => Arc::new(FixedClock(date)),
            None => Arc::new(SystemClock),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an optional `YYYY-MM-DD` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => NaiveDate::parse_from_str(&val, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date as YYYY-MM-DD, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "Enter a command: ".to_string(),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            today: None,
            log_level: "error".to_string(),
        }
    }
}
