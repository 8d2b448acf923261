// Rust guideline compliant 2026-10-18

use approvals_app::select;
use approvals_core::{Organizer, Priority, Reservation};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

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
                (count - i) as i64,
            )
        })
        .collect()
}

fn bench_select(c: &mut Criterion) {
    let small = build_reservations(500);
    let large = build_reservations(20_000);

    c.bench_function("select_500_unfiltered", |b| {
        b.iter(|| black_box(select(&small, "", None)))
    });
    c.bench_function("select_20000_text_and_priority", |b| {
        b.iter(|| black_box(select(&large, "org 3", Some(Priority::High))))
    });
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
