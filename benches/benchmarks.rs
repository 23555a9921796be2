use arc200_dashboard::models::Transfer;
use arc200_dashboard::slots::StatSlots;
use arc200_dashboard::stats::DashboardStats;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_derive(c: &mut Criterion) {
    let mut slots = StatSlots::default();
    slots.transfers = (0..10_000)
        .map(|i| Transfer {
            amount: "250000000".to_string(),
            sender: "SENDER".to_string(),
            receiver: format!("RECEIVER{}", i % 500),
            timestamp: i,
        })
        .collect();

    c.bench_function("derive_10k_transfers", |b| {
        b.iter(|| DashboardStats::derive(black_box(&slots)))
    });
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
