//! Domain value objects and types.
//!
//! This module contains the validated field types stored on a contact record.
//! Every field is validated when it is built and again on every write, so an
//! invalid phone number or birthday can never be represented in the system.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod phone;

pub use birthday::{BirthdayDate, BirthdayRule, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use field::{FieldRule, ValidatedField};
pub use phone::{PhoneNumber, PhoneRule};
