//! Command-line parsing and dispatch for the interactive binary.

use crate::error::{BookError, BookResult};
use crate::services::ContactService;
use chrono::NaiveDate;

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Delete { name: String },
    Phone,
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays { days: Option<u32> },
    Exit,
    Unknown(String),
}

/// What the loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit,
}

impl Command {
    /// Whether a successful run changes the store.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Change { .. }
                | Command::Delete { .. }
                | Command::AddBirthday { .. }
        )
    }
}

/// Parse one input line. Returns `Ok(None)` for a blank line.
///
/// The command word is case-insensitive; arguments are whitespace separated
/// and extra arguments are ignored.
pub fn parse_input(line: &str) -> BookResult<Option<Command>> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();
    let arg = |index: usize, label: &'static str| -> BookResult<String> {
        args.get(index)
            .map(|s| s.to_string())
            .ok_or(BookError::MissingArgument(label))
    };

    let command = match word.to_lowercase().as_str() {
        "hello" => Command::Hello,
        "add" => Command::Add {
            name: arg(0, "name")?,
            phone: arg(1, "phone")?,
        },
        "change" => Command::Change {
            name: arg(0, "name")?,
            old: arg(1, "old phone")?,
            new: arg(2, "new phone")?,
        },
        "delete" => Command::Delete {
            name: arg(0, "name")?,
        },
        "phone" => Command::Phone,
        "all" => Command::All,
        "add-birthday" => Command::AddBirthday {
            name: arg(0, "name")?,
            birthday: arg(1, "birthday")?,
        },
        "show-birthday" => Command::ShowBirthday {
            name: arg(0, "name")?,
        },
        "birthdays" => {
            let days = match args.first() {
                Some(raw) => Some(raw.parse::<u32>().map_err(|_| {
                    BookError::InvalidArgument(format!("days must be a number, got: {}", raw))
                })?),
                None => None,
            };
            Command::Birthdays { days }
        }
        "close" | "exit" => Command::Exit,
        other => Command::Unknown(other.to_string()),
    };

    Ok(Some(command))
}

/// Run `command` against `service`.
///
/// `today` and `default_horizon` feed the `birthdays` report.
pub fn execute(
    command: Command,
    service: &mut ContactService,
    today: NaiveDate,
    default_horizon: u32,
) -> BookResult<Outcome> {
    let reply = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add { name, phone } => service.add_contact(&name, &phone)?,
        Command::Change { name, old, new } => service.change_contact(&name, &old, &new)?,
        Command::Delete { name } => service.delete_contact(&name)?,
        Command::Phone => service.list_phones(),
        Command::All => {
            let rows = service.list_all();
            if rows.is_empty() {
                "No contacts found.".to_string()
            } else {
                rows.iter()
                    .map(|row| {
                        format!(
                            "{} | phones: {} | birthday: {}",
                            row.name,
                            row.phones
                                .as_ref()
                                .map(|p| p.join("; "))
                                .unwrap_or_else(|| "-".to_string()),
                            row.birthday.as_deref().unwrap_or("-")
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::AddBirthday { name, birthday } => service.add_birthday(&name, &birthday)?,
        Command::ShowBirthday { name } => service.show_birthday(&name)?,
        Command::Birthdays { days } => {
            let horizon = days.unwrap_or(default_horizon);
            let upcoming = service.upcoming_birthdays(today, horizon);
            if upcoming.is_empty() {
                format!("No upcoming birthdays in the next {} days.", horizon)
            } else {
                upcoming
                    .iter()
                    .map(|u| format!("{}: {}", u.name, u.congratulation_date))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::Exit => return Ok(Outcome::Exit),
        Command::Unknown(_) => "Invalid command.".to_string(),
    };

    Ok(Outcome::Reply(reply))
}
