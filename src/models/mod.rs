//! Data models for the contact book.
//!
//! A [`ContactRecord`] is one contact's stored data. [`RecordSummary`] is the
//! flattened row used when listing the whole book.

pub mod record;

pub use record::{ContactRecord, RecordSummary};
