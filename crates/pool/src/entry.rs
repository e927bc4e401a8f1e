//! Managed-instance records

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::host::InstanceHost;

/// Shared handle to a pool-managed instance.
///
/// The pool's free-list and every caller that checked the instance out hold
/// the same `Arc`, so the `pooled` flag is visible to all of them.
pub type PooledRef<H> = Arc<PoolEntry<<H as InstanceHost>::Handle>>;

/// One instance managed by a pool.
///
/// Carries the host-side handle plus the two bookkeeping attributes the
/// engine needs: the owning pool's name (set once at creation, immutable
/// thereafter) and whether the instance currently sits in the free-list.
///
/// Invariant: an entry is in its pool's free-list iff `is_pooled()` is true.
#[derive(Debug)]
pub struct PoolEntry<T> {
    handle: T,
    pool_name: Arc<str>,
    pooled: AtomicBool,
}

impl<T> PoolEntry<T> {
    pub(crate) fn new(handle: T, pool_name: Arc<str>) -> Self {
        Self { handle, pool_name, pooled: AtomicBool::new(false) }
    }

    /// Handle to the underlying host instance.
    pub fn handle(&self) -> &T {
        &self.handle
    }

    /// Name of the pool this instance belongs to.
    pub fn pool_name(&self) -> &str {
        &self.pool_name
    }

    /// True while the instance sits in the free-list, false while checked out.
    pub fn is_pooled(&self) -> bool {
        self.pooled.load(Ordering::Relaxed)
    }

    pub(crate) fn set_pooled(&self, pooled: bool) {
        self.pooled.store(pooled, Ordering::Relaxed);
    }
}
