//! Contact Book - a personal contact directory with birthday reminders.
//!
//! Stores named records (phone numbers and an optional birthday), persists
//! them as a JSON snapshot between runs, and reports which contacts have a
//! birthday coming up, moving weekend congratulations to the next Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (phone numbers, birthdays)
//! - **models**: The contact record
//! - **store**: The keyed collection of records
//! - **scheduling**: Upcoming-birthday computation
//! - **repositories**: Snapshot persistence
//! - **services**: Command operations over a store
//! - **commands**: Input parsing for the interactive binary
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod scheduling;
pub mod services;
pub mod store;

pub use commands::{execute, parse_input, Command, Outcome};
pub use config::Config;
pub use domain::{BirthdayDate, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{ContactRecord, RecordSummary};
pub use repositories::{JsonFileRepository, SnapshotRepository};
pub use scheduling::{PreparedUser, UpcomingBirthday, UserBirthday};
pub use services::ContactService;
pub use store::ContactStore;
