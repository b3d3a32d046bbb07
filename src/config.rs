//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::book::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted birthday window, in days.
const MAX_WINDOW_DAYS: u32 = 365;

/// Configuration for the contact book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Days ahead covered by the `birthdays` command (default: 7)
    pub birthday_window_days: u32,

    /// Maximum number of name suggestions on a failed lookup (default: 3)
    pub max_suggestions: usize,

    /// Minimum similarity score for a suggestion (0-100, default: 60)
    pub suggestion_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BOOK_BIRTHDAY_WINDOW_DAYS`: Birthday window in days (default: 7, max 365)
    /// - `BOOK_MAX_SUGGESTIONS`: Max "did you mean" names (default: 3)
    /// - `BOOK_SUGGESTION_THRESHOLD`: Min suggestion score (default: 60)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_u32("BOOK_BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_WINDOW_DAYS),
            });
        }

        let max_suggestions = Self::parse_env_usize("BOOK_MAX_SUGGESTIONS", 3)?;
        let suggestion_threshold = Self::parse_env_u8("BOOK_SUGGESTION_THRESHOLD", 60)?;

        if suggestion_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "BOOK_SUGGESTION_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            max_suggestions,
            suggestion_threshold,
            log_level,
        })
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

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            max_suggestions: 3,
            suggestion_threshold: 60,
            log_level: "error".to_string(),
        }
    }
}
