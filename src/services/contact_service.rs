//! Contact service layer.
//!
//! Business logic for the contact commands: adding and changing phones,
//! birthdays, listings and the upcoming-birthday report.

use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use crate::models::{ContactRecord, RecordSummary};
use crate::scheduling::UpcomingBirthday;
use crate::store::ContactStore;
use chrono::NaiveDate;

/// Command operations over an owned [`ContactStore`].
///
/// Inputs are validated before the store is touched, so a rejected command
/// never leaves a half-created record behind.
#[derive(Debug, Default)]
pub struct ContactService {
    store: ContactStore,
}

impl ContactService {
    /// Create a service over an existing store.
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn into_store(self) -> ContactStore {
        self.store
    }

    /// Add `phone` to the contact `name`, creating the contact if needed.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<String> {
        let phone = PhoneNumber::new(phone)?;

        if let Some(record) = self.store.find_mut(name) {
            record.add_phone(phone);
            tracing::debug!(contact = name, "Phone added to existing contact");
            return Ok("Contact updated.".to_string());
        }

        let mut record = ContactRecord::new(name)?;
        record.add_phone(phone);
        self.store.add_record(record);
        tracing::debug!(contact = name, "Contact created");
        Ok("Contact added.".to_string())
    }

    /// Replace `old` with `new` on the contact `name`.
    ///
    /// # Errors
    ///
    /// `NotFound` if the contact does not exist. A contact without `old` is
    /// left unchanged and still reported as updated.
    pub fn change_contact(&mut self, name: &str, old: &str, new: &str) -> BookResult<String> {
        let old = PhoneNumber::new(old)?;
        let new = PhoneNumber::new(new)?;

        let record = self
            .store
            .find_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;

        if !record.find_phone(&old) {
            tracing::debug!(contact = name, phone = %old, "Phone to replace not on contact");
        }
        record.edit_phone(&old, new);

        Ok(format!("Phone number for contact '{}' has been updated", name))
    }

    /// Remove the contact `name`.
    pub fn delete_contact(&mut self, name: &str) -> BookResult<String> {
        self.store
            .delete(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        tracing::debug!(contact = name, "Contact deleted");
        Ok(format!("Contact '{}' deleted.", name))
    }

    /// One line per contact: `"{name}: {phone1}; {phone2}"`.
    pub fn list_phones(&self) -> String {
        if self.store.is_empty() {
            return "No contacts found.".to_string();
        }

        self.store
            .iter()
            .map(|record| format!("{}: {}", record.name(), record.phones_joined()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn list_all(&self) -> Vec<RecordSummary> {
        self.store.list_all()
    }

    /// Set the birthday of `name`, creating the contact if needed.
    pub fn add_birthday(&mut self, name: &str, raw: &str) -> BookResult<String> {
        if let Some(record) = self.store.find_mut(name) {
            record.add_birthday(raw)?;
            tracing::debug!(contact = name, "Birthday updated");
            return Ok("Contact updated.".to_string());
        }

        let mut record = ContactRecord::new(name)?;
        record.add_birthday(raw)?;
        self.store.add_record(record);
        tracing::debug!(contact = name, "Contact created with birthday");
        Ok("Birthday added.".to_string())
    }

    pub fn show_birthday(&self, name: &str) -> BookResult<String> {
        let record = self
            .store
            .find(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;

        Ok(match record.birthday() {
            Some(birthday) => format!("Birthday for contact '{}': {}", name, birthday),
            None => format!("Birthday for contact '{}' does not exist.", name),
        })
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, horizon_days: u32) -> Vec<UpcomingBirthday> {
        self.store.upcoming_birthdays(today, horizon_days)
    }
}
