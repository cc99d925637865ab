//! Contact Book - Main entry point
//!
//! Interactive command loop over the contact book. Reads one command per
//! line from stdin, prints the result to stdout, and saves the book after
//! every successful change.

use anyhow::Result;
use contact_book::{
    execute, parse_input, Config, ContactService, JsonFileRepository, Outcome, SnapshotRepository,
};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout carries command output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact book with snapshot: {}",
        config.data_path.display()
    );

    let repository = JsonFileRepository::new(&config.data_path);
    let mut service = ContactService::new(repository.load()?);

    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_input(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let mutating = command.is_mutating();
        let today = chrono::Local::now().date_naive();

        match execute(command, &mut service, today, config.birthday_horizon_days) {
            Ok(Outcome::Reply(text)) => {
                println!("{}", text);
                if mutating {
                    if let Err(e) = repository.save(service.store()) {
                        error!("Failed to save contact book: {}", e);
                        println!("Could not save changes: {}", e);
                    }
                }
            }
            Ok(Outcome::Exit) => {
                println!("Good bye!");
                break;
            }
            Err(e) => println!("{}", e),
        }
    }

    info!("Contact book shutdown complete");
    Ok(())
}
