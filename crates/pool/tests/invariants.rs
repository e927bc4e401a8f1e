//! Property tests for the pool's bookkeeping invariants.
//!
//! Random acquire/release interleavings, including duplicate returns, must
//! keep `in_use + available == created`, never shrink the managed
//! population, and never hand one instance to two callers at once.

use std::sync::Arc;

use proptest::prelude::*;
use recycler_pool::testing::MockHost;
use recycler_pool::{Pool, PoolInflation, PooledRef};

#[derive(Debug, Clone, Copy)]
enum Op {
    Acquire,
    Release,
    DuplicateRelease,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => Just(Op::Acquire),
        2 => Just(Op::Release),
        1 => Just(Op::DuplicateRelease),
    ]
}

proptest! {
    #[test]
    fn bookkeeping_survives_arbitrary_interleavings(
        ops in proptest::collection::vec(op_strategy(), 1..128),
        initial in 0usize..6,
        double in proptest::bool::ANY,
    ) {
        let inflation = if double { PoolInflation::Double } else { PoolInflation::Increment };
        let mut host = MockHost::new();
        let template = host.spawn("cell");
        let mut pool = Pool::new(&mut host, "cell", &template, None, initial, inflation);

        let mut held: Vec<PooledRef<MockHost>> = Vec::new();
        let mut parked: Vec<PooledRef<MockHost>> = Vec::new();
        let mut last_total = pool.available() + pool.in_use();

        for op in ops {
            match op {
                Op::Acquire => {
                    if let Some(entry) = pool.next_available(&mut host, true) {
                        prop_assert!(!entry.is_pooled());
                        // Nobody else may hold this instance right now.
                        prop_assert!(!held.iter().any(|h| Arc::ptr_eq(h, &entry)));
                        held.push(entry);
                    }
                }
                Op::Release => {
                    if let Some(entry) = held.pop() {
                        pool.return_to_pool(&mut host, &entry).unwrap();
                        prop_assert!(entry.is_pooled());
                        parked.push(entry);
                    }
                }
                Op::DuplicateRelease => {
                    // Only entries still sitting in the free-list qualify;
                    // a parked entry may have been re-acquired since.
                    if let Some(entry) = parked.iter().rev().find(|e| e.is_pooled()) {
                        let before = (pool.available(), pool.in_use());
                        pool.return_to_pool(&mut host, entry).unwrap();
                        prop_assert_eq!((pool.available(), pool.in_use()), before);
                    }
                }
            }

            prop_assert_eq!(pool.in_use(), held.len());
            prop_assert_eq!(
                pool.available() + pool.in_use(),
                pool.stats().created as usize
            );
            // The free-list floor holds.
            prop_assert!(pool.available() >= 1);
            // The managed population never shrinks.
            let total = pool.available() + pool.in_use();
            prop_assert!(total >= last_total);
            last_total = total;
        }
    }
}
