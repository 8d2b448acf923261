// Rust guideline compliant 2026-10-18

use approvals_core::{Organizer, Priority, Reservation, Storage};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

fn build_reservations(count: usize) -> Vec<Reservation> {
    (0..count)
        .map(|i| {
            Reservation::new(
                format!("res-{i:06}"),
                format!("Event {i}"),
                Organizer {
                    name: "bench".to_string(),
                    id_number: format!("{i}"),
                    organization: format!("Org {}", i % 37),
                },
                Priority::ALL[i % 3],
                i as i64,
            )
        })
        .collect()
}

fn bench_load_all(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let storage =
        Storage::new(temp_dir.path().join("pending.jsonl")).expect("Failed to create storage");
    storage
        .save_all(&build_reservations(1000))
        .expect("Failed to save benchmark reservations");

    c.bench_function("load_all_1000", |b| {
        b.iter(|| black_box(storage.load_all()))
    });
}

criterion_group!(benches, bench_load_all);
criterion_main!(benches);
