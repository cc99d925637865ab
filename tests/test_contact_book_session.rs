//! Command sessions across process boundaries.
//!
//! Each "run" loads the book from the repository, executes commands the way
//! the binary does, and saves after every successful change.

mod mocks;

use chrono::NaiveDate;
use contact_book::repositories::SnapshotRepository;
use contact_book::{execute, parse_input, BookError, ContactService, Outcome};
use mocks::MockSnapshotRepository;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
}

/// Run `lines` as one process lifetime and return each reply or error text.
fn run_session(repo: &MockSnapshotRepository, lines: &[&str]) -> Vec<String> {
    let mut service = ContactService::new(repo.load().unwrap());
    let mut output = Vec::new();

    for line in lines {
        let command = match parse_input(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                output.push(e.to_string());
                continue;
            }
        };
        let mutating = command.is_mutating();

        match execute(command, &mut service, today(), 7) {
            Ok(Outcome::Reply(text)) => {
                output.push(text);
                if mutating {
                    repo.save(service.store()).unwrap();
                }
            }
            Ok(Outcome::Exit) => break,
            Err(e) => output.push(e.to_string()),
        }
    }

    output
}

#[test]
fn test_book_survives_restart() {
    let repo = MockSnapshotRepository::new();

    run_session(
        &repo,
        &[
            "add John 1111111111",
            "add John 2222222222",
            "add-birthday John 02.01.1980",
            "add Jane 3333333333",
            "exit",
        ],
    );

    let output = run_session(&repo, &["phone", "show-birthday John", "birthdays"]);
    assert_eq!(
        output,
        vec![
            "John: 1111111111; 2222222222\nJane: 3333333333".to_string(),
            "Birthday for contact 'John': 02.01.1980".to_string(),
            "John: 2025.01.02".to_string(),
        ]
    );
}

#[test]
fn test_only_successful_mutations_are_saved() {
    let repo = MockSnapshotRepository::new();

    run_session(
        &repo,
        &[
            "hello",
            "add John 1111111111",
            "add John 12345",
            "phone",
            "all",
            "show-birthday John",
        ],
    );

    assert_eq!(repo.get_call_count("load"), 1);
    assert_eq!(repo.get_call_count("save"), 1);
}

#[test]
fn test_read_only_session_writes_no_snapshot() {
    let repo = MockSnapshotRepository::new();

    run_session(&repo, &["hello", "phone", "all", "birthdays", "exit"]);

    assert_eq!(repo.get_call_count("save"), 0);
    assert!(repo.raw_snapshot().is_none());

    run_session(&repo, &["hello", "add-birthday Jane 01.01.1990", "exit"]);

    assert_eq!(repo.get_call_count("save"), 1);
    assert!(repo.raw_snapshot().is_some());
}

#[test]
fn test_errors_are_reported_and_session_continues() {
    let repo = MockSnapshotRepository::new();

    let output = run_session(
        &repo,
        &[
            "add John abc",
            "change Ghost 1111111111 2222222222",
            "add-birthday Jane 2000.01.01",
            "add",
            "add Jane 4444444444",
        ],
    );

    assert_eq!(
        output,
        vec![
            "Invalid phone number: abc".to_string(),
            "Contact 'Ghost' does not exist.".to_string(),
            "Invalid birthday: 2000.01.01 (expected DD.MM.YYYY)".to_string(),
            "Missing argument: name".to_string(),
            "Contact added.".to_string(),
        ]
    );
}

#[test]
fn test_change_with_unknown_old_phone_keeps_numbers() {
    let repo = MockSnapshotRepository::new();
    run_session(&repo, &["add John 1111111111"]);

    let output = run_session(
        &repo,
        &["change John 9999999999 2222222222", "phone"],
    );
    assert_eq!(
        output,
        vec![
            "Phone number for contact 'John' has been updated".to_string(),
            "John: 1111111111".to_string(),
        ]
    );
}

#[test]
fn test_delete_is_persisted() {
    let repo = MockSnapshotRepository::new();
    run_session(&repo, &["add John 1111111111", "add Jane 2222222222", "delete John"]);

    let store = repo.load().unwrap();
    assert!(store.find("John").is_none());
    assert!(store.find("Jane").is_some());
}

#[test]
fn test_service_errors_are_typed() {
    let mut service = ContactService::default();
    let err = service.show_birthday("Nobody").unwrap_err();
    assert!(matches!(err, BookError::NotFound(name) if name == "Nobody"));
}
