//! The contact store: every record in the book, keyed by name.

use crate::models::{ContactRecord, RecordSummary};
use crate::scheduling::{self, PreparedUser, UpcomingBirthday};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Keyed collection of contact records.
///
/// Names are unique. Iteration follows insertion order; deleting a record
/// does not reorder the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    records: IndexMap<String, ContactRecord>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: ContactRecord) {
        let name = record.name().to_string();
        if self.records.insert(name, record).is_some() {
            tracing::debug!("Replaced existing record");
        }
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record named `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        self.records.shift_remove(name)
    }

    pub fn list_all(&self) -> Vec<RecordSummary> {
        self.records.values().map(ContactRecord::summary).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within `horizon_days` of `today`,
    /// computed from the records' own birthday fields.
    pub fn upcoming_birthdays(&self, today: NaiveDate, horizon_days: u32) -> Vec<UpcomingBirthday> {
        let users: Vec<PreparedUser> = self
            .iter()
            .filter_map(|record| {
                record.birthday().map(|birthday| PreparedUser {
                    name: record.name().to_string(),
                    birthday: birthday.date(),
                })
            })
            .collect();

        scheduling::upcoming_birthdays(&users, today, horizon_days)
    }
}

/// Borrowed on-disk shape of a store.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    records: Vec<&'a ContactRecord>,
}

/// Owned on-disk shape of a store.
#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    records: Vec<ContactRecord>,
}

// Serde support - serialize as {"records": [...]} in store order
impl Serialize for ContactStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SnapshotRef {
            records: self.records.values().collect(),
        }
        .serialize(serializer)
    }
}

// Serde support - every record re-validated on the way in
impl<'de> Deserialize<'de> for ContactStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let snapshot = Snapshot::deserialize(deserializer)?;
        let mut store = ContactStore::new();
        for record in snapshot.records {
            store.add_record(record);
        }
        Ok(store)
    }
}
