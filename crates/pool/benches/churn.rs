//! Acquire/release churn benchmarks.
//!
//! The steady-state cycle must stay amortized O(1): pops and pushes on the
//! free-list plus a handful of host calls, with growth only at the floor.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use recycler_pool::testing::MockHost;
use recycler_pool::{Pool, PoolInflation};

fn steady_state_churn(c: &mut Criterion) {
    let mut host = MockHost::new();
    let template = host.spawn("cell");
    let mut pool = Pool::new(&mut host, "cell", &template, None, 64, PoolInflation::Double);

    c.bench_function("acquire_release_steady_state", |b| {
        b.iter(|| {
            let entry = pool.next_available(&mut host, false).expect("warm pool");
            black_box(entry.handle());
            pool.return_to_pool(&mut host, &entry).expect("own entry");
        });
    });
}

fn burst_churn(c: &mut Criterion) {
    let mut host = MockHost::new();
    let template = host.spawn("cell");
    let mut pool = Pool::new(&mut host, "cell", &template, None, 256, PoolInflation::Double);

    c.bench_function("acquire_release_burst_64", |b| {
        b.iter(|| {
            let mut held = Vec::with_capacity(64);
            for _ in 0..64 {
                held.push(pool.next_available(&mut host, false).expect("warm pool"));
            }
            for entry in &held {
                pool.return_to_pool(&mut host, entry).expect("own entry");
            }
            black_box(held.len())
        });
    });
}

criterion_group!(benches, steady_state_churn, burst_churn);
criterion_main!(benches);
