//! Upcoming-birthday scheduling.
//!
//! Pure functions over plain data: nothing here knows about the store.

pub mod birthdays;

pub use birthdays::{
    next_weekday, prepare_users, upcoming_birthdays, weekday_from_index, PreparedUser,
    UpcomingBirthday, UserBirthday, DEFAULT_HORIZON_DAYS, SCHEDULE_DATE_FORMAT,
};
