//! Growth policies for pools

/// Rule governing how many new instances a pool manufactures when its
/// free-list is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolInflation {
    /// Grow by exactly one instance per exhausted acquire. Cheapest per
    /// event, O(n) clones amortized over n acquires.
    Increment,
    /// Double the outstanding population (free plus in use). Fewer growth
    /// events, amortized O(1) clones per acquire.
    Double,
}

impl Default for PoolInflation {
    fn default() -> Self {
        Self::Double
    }
}

impl PoolInflation {
    /// Number of instances to manufacture at the exhaustion boundary.
    ///
    /// A result of zero means the pool cannot grow and the acquire fails.
    pub(crate) fn amount(self, available: usize, in_use: usize) -> usize {
        match self {
            Self::Increment => 1,
            Self::Double => available + in_use,
        }
    }
}
