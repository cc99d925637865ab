//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday does not parse as a calendar date.
    InvalidBirthday(String),

    /// The provided weekday index is outside 0 (Monday) ..= 6 (Sunday).
    InvalidWeekday(u8),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday(raw) => {
                write!(f, "Invalid birthday: {} (expected DD.MM.YYYY)", raw)
            }
            Self::InvalidWeekday(index) => write!(f, "Invalid weekday index: {}", index),
        }
    }
}

impl std::error::Error for ValidationError {}
