//! BirthdayDate value object.

use super::errors::ValidationError;
use super::field::{FieldRule, ValidatedField};
use chrono::NaiveDate;

/// Canonical textual form of a stored birthday ("DD.MM.YYYY").
///
/// This is deliberately distinct from
/// [`SCHEDULE_DATE_FORMAT`](crate::scheduling::SCHEDULE_DATE_FORMAT), which is
/// what the batch birthday preprocessor and its output use.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Rule for birthdays: the text must parse as a real calendar date under
/// [`BIRTHDAY_FORMAT`]. Single-digit days and months are accepted and
/// normalised to two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    type Value = NaiveDate;

    fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    fn format(value: &NaiveDate) -> String {
        value.format(BIRTHDAY_FORMAT).to_string()
    }
}

/// A contact's birthday.
///
/// # Example
///
/// ```
/// use contact_book::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// assert!(BirthdayDate::new("1990.03.15").is_err());
/// ```
pub type BirthdayDate = ValidatedField<BirthdayRule>;

impl ValidatedField<BirthdayRule> {
    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        *self.value()
    }
}
