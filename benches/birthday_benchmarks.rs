//! Performance benchmarks for the upcoming-birthday report.
//!
//! These benchmarks measure:
//! - The store-level report for different book sizes
//! - The batch preprocessor over raw "YYYY.MM.DD" strings

use chrono::{Duration, NaiveDate};
use contact_book::scheduling::{prepare_users, upcoming_birthdays, UserBirthday};
use contact_book::{ContactRecord, ContactStore, PhoneNumber};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a store where every record has one phone and a birthday spread
/// across the year.
fn create_test_store(size: usize) -> ContactStore {
    let base = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
    let mut store = ContactStore::new();

    for i in 0..size {
        let mut record = ContactRecord::new(format!("Contact {}", i)).unwrap();
        record.add_phone(PhoneNumber::new(&format!("{:010}", i)).unwrap());
        let birthday = base + Duration::days((i * 37 % 365) as i64);
        record
            .add_birthday(&birthday.format("%d.%m.%Y").to_string())
            .unwrap();
        store.add_record(record);
    }

    store
}

/// Benchmark the store report with different book sizes.
fn bench_store_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
    let mut group = c.benchmark_group("store_upcoming_birthdays");

    for size in [100, 1_000, 10_000].iter() {
        let store = create_test_store(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(store.upcoming_birthdays(today, 7)));
        });
    }

    group.finish();
}

/// Benchmark parsing plus report over raw batch entries.
fn bench_batch_pipeline(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
    let users: Vec<UserBirthday> = (0..1_000)
        .map(|i| UserBirthday {
            name: format!("User {}", i),
            birthday: format!("19{:02}.{:02}.{:02}", i % 100, i % 12 + 1, i % 28 + 1),
        })
        .collect();

    c.bench_function("batch_prepare_and_report", |b| {
        b.iter(|| {
            let prepared = prepare_users(black_box(&users));
            black_box(upcoming_birthdays(&prepared, today, 7))
        });
    });
}

criterion_group!(benches, bench_store_upcoming_birthdays, bench_batch_pipeline);
criterion_main!(benches);
