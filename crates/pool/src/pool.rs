//! Core pool implementation

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::entry::{PoolEntry, PooledRef};
use crate::error::{PoolError, PoolResult};
use crate::host::InstanceHost;
use crate::policy::PoolInflation;
use crate::stats::PoolStats;

/// One named collection of interchangeable instances.
///
/// A pool owns a LIFO free-list of parked instances and a count of checked
/// out ones. When the free-list is exhausted it manufactures new instances
/// from its own stock according to the configured [`PoolInflation`] policy.
/// Instances are never destroyed, only recycled, so
/// `available() + in_use()` equals the total ever created.
///
/// The free-list keeps a floor of one entry: [`Pool::next_available`] pops
/// only while more than one entry remains. The survivor is the clone source
/// for all future growth, so the pool stays functional even if the template
/// it was built from becomes unavailable.
///
/// # Example
/// ```
/// use recycler_pool::testing::MockHost;
/// use recycler_pool::{Pool, PoolInflation};
///
/// let mut host = MockHost::new();
/// let template = host.spawn("enemy");
/// let mut pool = Pool::new(&mut host, "enemy", &template, None, 3, PoolInflation::Double);
///
/// let entry = pool.next_available(&mut host, true).expect("warm pool");
/// assert!(!entry.is_pooled());
/// pool.return_to_pool(&mut host, &entry).unwrap();
/// assert!(entry.is_pooled());
/// ```
pub struct Pool<H: InstanceHost> {
    name: Arc<str>,
    available: Vec<PooledRef<H>>,
    in_use: usize,
    inflation: PoolInflation,
    root: H::Handle,
    stats: PoolStats,
}

impl<H: InstanceHost> Pool<H> {
    /// Create a pool and pre-warm its free-list.
    ///
    /// Clones `template` once so the pool owns a live instance to grow from,
    /// then populates `max(initial_count, 1)` more. Idle instances are
    /// parked, deactivated, under a fresh `{name}Pool` grouping node, which
    /// is attached to `parent` when one is given.
    pub fn new(
        host: &mut H,
        name: &str,
        template: &H::Handle,
        parent: Option<&H::Handle>,
        initial_count: usize,
        inflation: PoolInflation,
    ) -> Self {
        let name: Arc<str> = Arc::from(name);
        let root = host.create_node(&format!("{name}Pool"));
        if let Some(parent) = parent {
            host.reparent(&root, Some(parent));
        }

        let mut pool = Self {
            name,
            available: Vec::new(),
            in_use: 0,
            inflation,
            root,
            stats: PoolStats::default(),
        };

        // The retained clone source: this entry is protected by the
        // free-list floor and never leaves the pool.
        let first = host.instantiate(template);
        pool.stats.record_created();
        let entry = Arc::new(PoolEntry::new(first, Arc::clone(&pool.name)));
        pool.add_to_pool(host, entry);

        pool.populate(host, initial_count.max(1));
        pool
    }

    /// Park an entry in the free-list. O(1).
    ///
    /// Deactivates the instance, relabels it with the pool's name, and moves
    /// it under the pool root.
    fn add_to_pool(&mut self, host: &mut H, entry: PooledRef<H>) {
        host.set_active(entry.handle(), false);
        host.set_display_name(entry.handle(), &self.name);
        host.reparent(entry.handle(), Some(&self.root));
        entry.set_pooled(true);
        self.available.push(entry);
    }

    /// Manufacture `count` instances by cloning the current top of the
    /// free-list, parking each one. O(count).
    fn populate(&mut self, host: &mut H, count: usize) {
        for _ in 0..count {
            let Some(template) = self.available.last() else {
                // Unreachable through the public API: construction seeds the
                // free-list and the floor keeps it non-empty.
                error!(pool = %self.name, "populate with an empty free-list");
                return;
            };
            let handle = host.instantiate(template.handle());
            self.stats.record_created();
            let entry = Arc::new(PoolEntry::new(handle, Arc::clone(&self.name)));
            self.add_to_pool(host, entry);
        }
    }

    /// Check an instance out of the pool. O(1) amortized.
    ///
    /// Pops from the free-list while more than one entry remains; at the
    /// floor, inflates the pool per its policy first. Returns `None` only
    /// when the policy yields no growth, which is a legitimate empty-pool
    /// signal rather than an error.
    ///
    /// On success the entry is marked checked out and, with `auto_activate`,
    /// activated on the host.
    pub fn next_available(&mut self, host: &mut H, auto_activate: bool) -> Option<PooledRef<H>> {
        let entry = if self.available.len() > 1 {
            self.available.pop()
        } else {
            let grow_by = self.inflation.amount(self.available.len(), self.in_use);
            if grow_by > 0 {
                debug!(pool = %self.name, grow_by, "free-list exhausted, inflating");
                self.populate(host, grow_by);
                self.stats.record_inflation();
                self.available.pop()
            } else {
                None
            }
        };

        let Some(entry) = entry else {
            self.stats.record_failed_acquire();
            return None;
        };

        self.in_use += 1;
        self.stats.record_acquire(self.in_use);
        entry.set_pooled(false);
        if auto_activate {
            host.set_active(entry.handle(), true);
        }
        Some(entry)
    }

    /// Return a checked-out instance to the pool. O(1).
    ///
    /// Rejects entries tagged for another pool without touching any state.
    /// Returning an entry that is already parked is a benign no-op: it is
    /// logged as a warning and counted, and the in-use counter is left
    /// alone.
    pub fn return_to_pool(&mut self, host: &mut H, entry: &PooledRef<H>) -> PoolResult<()> {
        if entry.pool_name() != &*self.name {
            error!(
                pool = %self.name,
                owner = entry.pool_name(),
                "instance returned to the wrong pool"
            );
            return Err(PoolError::foreign_instance(&*self.name, entry.pool_name()));
        }

        // Tag check instead of a free-list membership scan: the scan would
        // be O(n) on every release.
        if entry.is_pooled() {
            warn!(pool = %self.name, "instance is already pooled, ignoring duplicate return");
            self.stats.record_double_return();
            return Ok(());
        }

        self.in_use = self.in_use.saturating_sub(1);
        self.stats.record_release();
        self.add_to_pool(host, Arc::clone(entry));
        Ok(())
    }

    /// The pool's name, its key in the registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of parked instances ready for reuse.
    pub fn available(&self) -> usize {
        self.available.len()
    }

    /// Number of checked-out instances.
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// The configured growth policy.
    pub fn inflation(&self) -> PoolInflation {
        self.inflation
    }

    /// Grouping node idle instances are parked under.
    pub fn root_handle(&self) -> &H::Handle {
        &self.root
    }

    /// Snapshot of the pool's lifetime counters.
    pub fn stats(&self) -> PoolStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::MockHost;

    fn warm_pool(host: &mut MockHost, name: &str, initial: usize, inflation: PoolInflation) -> Pool<MockHost> {
        let template = host.spawn(name);
        Pool::new(host, name, &template, None, initial, inflation)
    }

    #[test]
    fn construction_seeds_requested_size_plus_clone_source() {
        let mut host = MockHost::new();
        let pool = warm_pool(&mut host, "enemy", 3, PoolInflation::Double);

        assert_eq!(pool.available(), 4);
        assert_eq!(pool.in_use(), 0);
        assert_eq!(pool.stats().created, 4);
    }

    #[test]
    fn construction_treats_zero_as_one() {
        let mut host = MockHost::new();
        let pool = warm_pool(&mut host, "enemy", 0, PoolInflation::Increment);

        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn parked_instances_are_inactive_renamed_and_reparented() {
        let mut host = MockHost::new();
        let template = host.spawn("enemy-template");
        let pool = Pool::new(&mut host, "enemy", &template, None, 1, PoolInflation::Double);

        let entry = pool.available.last().expect("warm free-list");
        let object = host.object(*entry.handle());
        assert!(!object.active);
        assert_eq!(object.label, "enemy");
        assert_eq!(object.parent, Some(*pool.root_handle()));

        // The template itself is untouched.
        assert_eq!(host.object(template).label, "enemy-template");
    }

    #[test]
    fn pool_root_attaches_under_given_parent() {
        let mut host = MockHost::new();
        let parent = host.create_node("registry");
        let template = host.spawn("enemy");
        let pool = Pool::new(&mut host, "enemy", &template, Some(&parent), 1, PoolInflation::Double);

        assert_eq!(host.object(*pool.root_handle()).parent, Some(parent));
        assert_eq!(host.object(*pool.root_handle()).label, "enemyPool");
    }

    #[test]
    fn acquire_activates_and_marks_checked_out() {
        let mut host = MockHost::new();
        let mut pool = warm_pool(&mut host, "enemy", 3, PoolInflation::Double);

        let entry = pool.next_available(&mut host, true).expect("warm pool");
        assert!(!entry.is_pooled());
        assert!(host.object(*entry.handle()).active);
        assert_eq!(pool.available(), 3);
        assert_eq!(pool.in_use(), 1);
    }

    #[test]
    fn acquire_without_auto_activate_leaves_instance_inactive() {
        let mut host = MockHost::new();
        let mut pool = warm_pool(&mut host, "enemy", 3, PoolInflation::Double);

        let entry = pool.next_available(&mut host, false).expect("warm pool");
        assert!(!host.object(*entry.handle()).active);
    }

    #[test]
    fn increment_pool_serves_first_acquire_from_stock_then_grows_by_one() {
        let mut host = MockHost::new();
        let mut pool = warm_pool(&mut host, "enemy", 1, PoolInflation::Increment);
        assert_eq!(pool.available(), 2);

        // Stock above the floor: no growth.
        let first = pool.next_available(&mut host, true).expect("stocked");
        assert_eq!(pool.available(), 1);
        assert_eq!(pool.stats().created, 2);
        assert_eq!(pool.stats().inflations, 0);

        // At the floor: grow by exactly one, then pop.
        let second = pool.next_available(&mut host, true).expect("grown");
        assert_eq!(pool.available(), 1);
        assert_eq!(pool.in_use(), 2);
        assert_eq!(pool.stats().created, 3);
        assert_eq!(pool.stats().inflations, 1);

        drop((first, second));
    }

    #[test]
    fn double_pool_grows_by_outstanding_population_at_the_floor() {
        let mut host = MockHost::new();
        let mut pool = warm_pool(&mut host, "enemy", 2, PoolInflation::Double);
        assert_eq!(pool.available(), 3);

        let _a = pool.next_available(&mut host, true).expect("stocked");
        let _b = pool.next_available(&mut host, true).expect("stocked");
        assert_eq!(pool.available(), 1);
        assert_eq!(pool.in_use(), 2);

        // Boundary: one free, two in use, so growth is 1 + 2 = 3.
        let _c = pool.next_available(&mut host, true).expect("grown");
        assert_eq!(pool.stats().created, 6);
        assert_eq!(pool.available(), 3);
        assert_eq!(pool.in_use(), 3);
    }

    #[test]
    fn release_parks_deactivates_and_decrements() {
        let mut host = MockHost::new();
        let mut pool = warm_pool(&mut host, "enemy", 2, PoolInflation::Double);

        let entry = pool.next_available(&mut host, true).expect("warm pool");
        pool.return_to_pool(&mut host, &entry).unwrap();

        assert!(entry.is_pooled());
        assert!(!host.object(*entry.handle()).active);
        assert_eq!(host.object(*entry.handle()).parent, Some(*pool.root_handle()));
        assert_eq!(pool.in_use(), 0);
        assert_eq!(pool.available(), 3);
    }

    #[test]
    fn double_return_changes_nothing() {
        let mut host = MockHost::new();
        let mut pool = warm_pool(&mut host, "enemy", 2, PoolInflation::Double);

        let entry = pool.next_available(&mut host, true).expect("warm pool");
        pool.return_to_pool(&mut host, &entry).unwrap();

        let available = pool.available();
        let in_use = pool.in_use();
        pool.return_to_pool(&mut host, &entry).unwrap();

        assert_eq!(pool.available(), available);
        assert_eq!(pool.in_use(), in_use);
        assert_eq!(pool.stats().double_returns, 1);
        assert_eq!(pool.stats().releases, 1);
    }

    #[test]
    fn foreign_instance_is_rejected_without_state_change() {
        let mut host = MockHost::new();
        let mut enemies = warm_pool(&mut host, "enemy", 1, PoolInflation::Double);
        let mut bullets = warm_pool(&mut host, "bullet", 1, PoolInflation::Double);

        let stray = enemies.next_available(&mut host, true).expect("warm pool");
        let available = bullets.available();
        let in_use = bullets.in_use();

        let err = bullets.return_to_pool(&mut host, &stray).unwrap_err();
        assert_eq!(err, PoolError::foreign_instance("bullet", "enemy"));
        assert_eq!(bullets.available(), available);
        assert_eq!(bullets.in_use(), in_use);
        assert!(!stray.is_pooled());
    }

    #[test]
    fn total_population_only_grows() {
        let mut host = MockHost::new();
        let mut pool = warm_pool(&mut host, "enemy", 1, PoolInflation::Double);

        let mut total = pool.available() + pool.in_use();
        let mut held = Vec::new();
        for _ in 0..10 {
            held.push(pool.next_available(&mut host, true).expect("pool grows on demand"));
            let now = pool.available() + pool.in_use();
            assert!(now >= total);
            total = now;
        }
        for entry in &held {
            pool.return_to_pool(&mut host, entry).unwrap();
            assert_eq!(pool.available() + pool.in_use(), total);
        }
    }
}
