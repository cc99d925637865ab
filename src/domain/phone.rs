//! PhoneNumber value object.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};
use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly ten ASCII digits, nothing else.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// Rule for phone numbers.
///
/// # Validation Rules
///
/// - Must be exactly 10 characters long
/// - Every character must be an ASCII decimal digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    type Value = String;

    fn parse(raw: &str) -> Result<String, ValidationError> {
        if !PHONE_RE.is_match(raw) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(raw.to_string())
    }

    fn format(value: &String) -> String {
        value.clone()
    }
}

/// A type-safe wrapper for phone numbers.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(PhoneNumber::new("050-123-45").is_err());
/// ```
pub type PhoneNumber = ValidatedField<PhoneRule>;

impl ValidatedField<PhoneRule> {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }

    /// Replace the number, re-running validation.
    ///
    /// On error the previous number is kept. Birthdays have no setter.
    pub fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        *self = Self::new(raw)?;
        Ok(())
    }
}
