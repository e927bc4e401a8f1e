//! Per-pool operation counters

/// Counters for one pool's lifetime.
///
/// Plain integers: a pool is driven through `&mut self`, so there is no
/// concurrent writer to guard against. The struct is `Copy` and can be
/// snapshotted at any point via [`crate::Pool::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolStats {
    /// Successful acquires.
    pub acquires: u64,
    /// Successful releases (double returns excluded).
    pub releases: u64,
    /// Instances manufactured, including the construction warm-up.
    pub created: u64,
    /// Growth events (one per exhausted acquire that inflated the pool).
    pub inflations: u64,
    /// Acquires that found the pool empty and unable to grow.
    pub failed_acquires: u64,
    /// Returns of instances that were already in the free-list.
    pub double_returns: u64,
    /// Highest number of simultaneously checked-out instances observed.
    pub peak_in_use: usize,
}

impl PoolStats {
    pub(crate) fn record_created(&mut self) {
        self.created += 1;
    }

    pub(crate) fn record_acquire(&mut self, in_use: usize) {
        self.acquires += 1;
        self.peak_in_use = self.peak_in_use.max(in_use);
    }

    pub(crate) fn record_release(&mut self) {
        self.releases += 1;
    }

    pub(crate) fn record_inflation(&mut self) {
        self.inflations += 1;
    }

    pub(crate) fn record_failed_acquire(&mut self) {
        self.failed_acquires += 1;
    }

    pub(crate) fn record_double_return(&mut self) {
        self.double_returns += 1;
    }
}
