//! Birthday horizon computation with weekend shifting.

use crate::domain::ValidationError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Date format of the batch preprocessor input and of congratulation dates
/// ("YYYY.MM.DD"). Stored birthdays use
/// [`BIRTHDAY_FORMAT`](crate::domain::BIRTHDAY_FORMAT) instead.
pub const SCHEDULE_DATE_FORMAT: &str = "%Y.%m.%d";

/// Horizon used when the caller does not pick one.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Unparsed batch entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBirthday {
    pub name: String,
    pub birthday: String,
}

/// Batch entry with a parsed birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedUser {
    pub name: String,
    pub birthday: NaiveDate,
}

/// One report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Formatted with [`SCHEDULE_DATE_FORMAT`].
    pub congratulation_date: String,
}

/// Map 0 = Monday .. 6 = Sunday to a `Weekday`.
pub fn weekday_from_index(index: u8) -> Result<Weekday, ValidationError> {
    match index {
        0 => Ok(Weekday::Mon),
        1 => Ok(Weekday::Tue),
        2 => Ok(Weekday::Wed),
        3 => Ok(Weekday::Thu),
        4 => Ok(Weekday::Fri),
        5 => Ok(Weekday::Sat),
        6 => Ok(Weekday::Sun),
        _ => Err(ValidationError::InvalidWeekday(index)),
    }
}

/// First date strictly after `d` that falls on `weekday`.
///
/// When `d` is already on `weekday` the result is a full week later, never `d`.
pub fn next_weekday(d: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead =
        weekday.num_days_from_monday() as i64 - d.weekday().num_days_from_monday() as i64;
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    d + Duration::days(days_ahead)
}

/// Parse each entry's birthday under [`SCHEDULE_DATE_FORMAT`].
///
/// Entries that fail to parse are logged and dropped; the rest keep their order.
pub fn prepare_users(users: &[UserBirthday]) -> Vec<PreparedUser> {
    users
        .iter()
        .filter_map(|user| {
            match NaiveDate::parse_from_str(&user.birthday, SCHEDULE_DATE_FORMAT) {
                Ok(birthday) => Some(PreparedUser {
                    name: user.name.clone(),
                    birthday,
                }),
                Err(e) => {
                    tracing::warn!(
                        user = %user.name,
                        birthday = %user.birthday,
                        "Skipping user with invalid birthday: {}",
                        e
                    );
                    None
                }
            }
        })
        .collect()
}

/// Birthdays falling within `[today, today + horizon_days]`.
///
/// A birthday already past this year rolls to next year. Congratulations on a
/// Saturday or Sunday move to the following Monday. Output order follows
/// `users`.
pub fn upcoming_birthdays(
    users: &[PreparedUser],
    today: NaiveDate,
    horizon_days: u32,
) -> Vec<UpcomingBirthday> {
    let horizon = i64::from(horizon_days);

    users
        .iter()
        .filter_map(|user| {
            let mut birthday_this_year = anniversary_in(user.birthday, today.year());
            if birthday_this_year < today {
                birthday_this_year = anniversary_in(user.birthday, today.year() + 1);
            }

            let days_until = (birthday_this_year - today).num_days();
            if !(0..=horizon).contains(&days_until) {
                return None;
            }

            let congratulation = if is_weekend(birthday_this_year) {
                next_weekday(birthday_this_year, Weekday::Mon)
            } else {
                birthday_this_year
            };

            Some(UpcomingBirthday {
                name: user.name.clone(),
                congratulation_date: congratulation.format(SCHEDULE_DATE_FORMAT).to_string(),
            })
        })
        .collect()
}

/// `birthday` moved into `year`. Feb 29 becomes Feb 28 in non-leap years.
///
/// `year` outside chrono's supported range (about +/-262,000) has no
/// anniversary; the birth date itself is returned, which always precedes any
/// `today` in range and so never enters a report.
fn anniversary_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
        .unwrap_or(birthday)
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
