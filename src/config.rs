//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use crate::scheduling::DEFAULT_HORIZON_DAYS;
use std::env;
use std::path::PathBuf;

/// Longest horizon accepted for the upcoming-birthday report.
pub const MAX_HORIZON_DAYS: u32 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot file the book is loaded from and saved to
    pub data_path: PathBuf,

    /// Default horizon for `birthdays` when no day count is given (default: 7)
    pub birthday_horizon_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: snapshot file (default: "addressbook.json")
    /// - `BIRTHDAY_HORIZON_DAYS`: default report horizon, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let data_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.data_path,
        };

        let birthday_horizon_days =
            Self::parse_env_u32("BIRTHDAY_HORIZON_DAYS", defaults.birthday_horizon_days)?;
        if birthday_horizon_days > MAX_HORIZON_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_HORIZON_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            data_path,
            birthday_horizon_days,
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
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from("addressbook.json"),
            birthday_horizon_days: DEFAULT_HORIZON_DAYS,
            log_level: "error".to_string(),
        }
    }
}
