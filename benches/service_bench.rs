use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;
use txledger::service::TransactionService;
use txledger::storage::{NewTransaction, SkipListStorage, TransactionType};

fn setup() -> TransactionService {
    TransactionService::new(Arc::new(SkipListStorage::new()))
}

fn sample(i: usize) -> NewTransaction {
    NewTransaction::new(
        dec!(100.00),
        TransactionType::ALL[i % 3],
        &format!("Bench transaction {}", i),
        "bench",
    )
}

fn seed_data(service: &TransactionService, count: usize) {
    for i in 0..count {
        service.create(sample(i)).unwrap();
    }
}

fn bench_create(c: &mut Criterion) {
    let service = setup();
    let payload = sample(0);

    c.bench_function("create", |b| {
        b.iter(|| service.create(black_box(payload.clone())).unwrap())
    });
}

fn bench_read_cached(c: &mut Criterion) {
    let service = setup();
    seed_data(&service, 5_000);

    c.bench_function("read_cached", |b| {
        b.iter(|| service.read(black_box(3_000)))
    });
}

fn bench_list(c: &mut Criterion) {
    let service = setup();
    seed_data(&service, 5_000);

    c.bench_function("list_first_page", |b| {
        b.iter(|| service.list(black_box(0), black_box(50)).unwrap())
    });
    c.bench_function("list_deep_page", |b| {
        b.iter(|| service.list(black_box(90), black_box(50)).unwrap())
    });
}

fn bench_update(c: &mut Criterion) {
    let service = setup();
    seed_data(&service, 1_000);
    let payload = sample(1);

    c.bench_function("update", |b| {
        b.iter(|| service.update(black_box(1_500), payload.clone()).unwrap())
    });
}

criterion_group!(
    benches,
    bench_create,
    bench_read_cached,
    bench_list,
    bench_update
);
criterion_main!(benches);
