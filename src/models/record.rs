//! Contact record: one name, its phone numbers and an optional birthday.

use crate::domain::{BirthdayDate, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the book.
///
/// The name is the record's identity inside a [`ContactStore`](crate::store::ContactStore).
/// Phones keep insertion order and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct ContactRecord {
    name: String,

    phones: Vec<PhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

/// Unchecked shape of a serialized record.
#[derive(Deserialize)]
struct RawRecord {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

impl TryFrom<RawRecord> for ContactRecord {
    type Error = ValidationError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let mut record = ContactRecord::new(raw.name)?;
        record.phones = raw.phones;
        record.birthday = raw.birthday;
        Ok(record)
    }
}

/// Listing row for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSummary {
    pub name: String,

    /// `None` when the contact has no phones.
    pub phones: Option<Vec<String>>,

    /// Canonical "DD.MM.YYYY" text, when set.
    pub birthday: Option<String>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`. Absent phones are ignored.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) {
        if let Some(index) = self.position(phone) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// A missing `old` is a silent no-op, not an error.
    pub fn edit_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) {
        if let Some(index) = self.position(old) {
            self.phones[index] = new;
        }
    }

    pub fn find_phone(&self, phone: &PhoneNumber) -> bool {
        self.phones.contains(phone)
    }

    /// Parse `raw` as a birthday and store it, replacing any previous one.
    ///
    /// On error the previous birthday is kept.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(BirthdayDate::new(raw)?);
        Ok(())
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Human-readable one-liner: name plus semicolon-joined phones.
    pub fn describe(&self) -> String {
        format!(
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )
    }

    /// Phones joined with "; ".
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            name: self.name.clone(),
            phones: if self.phones.is_empty() {
                None
            } else {
                Some(self.phones.iter().map(|p| p.as_str().to_string()).collect())
            },
            birthday: self.birthday.as_ref().map(ToString::to_string),
        }
    }

    fn position(&self, phone: &PhoneNumber) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
