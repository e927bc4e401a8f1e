//! # recycler-pool
//!
//! Keyed object pooling for scene-graph hosts: named free-lists of
//! interchangeable instances with lazy, policy-driven growth.
//!
//! ## Key Components
//!
//! - [`Pool`]: one named collection. LIFO free-list for cache-friendly
//!   reuse, in-use tracking, amortized O(1) acquire/release, growth per
//!   [`PoolInflation`] (increment by one, or double the outstanding
//!   population).
//! - [`PoolRegistry`]: owns pools by name, creates them lazily from a
//!   [`TemplateSource`], and routes releases back to the owning pool via
//!   the tag every [`PoolEntry`] carries.
//! - [`InstanceHost`]: the seam to whatever actually owns the instances.
//!   The engine only ever clones a template, toggles activation, renames,
//!   and reparents.
//! - [`testing`]: an in-memory host and template source.
//!
//! The engine is synchronous and `&mut`-threaded. Hosts that share a
//! registry across call sites put one mutex around it; the companion
//! `recycler-scroll` crate ships that as `SharedRegistry`.
//!
//! ## Usage
//!
//! ```rust
//! use recycler_pool::testing::{MapTemplates, MockHost};
//! use recycler_pool::{AcquireOptions, PoolInflation, PoolRegistry};
//!
//! # fn main() -> Result<(), recycler_pool::PoolError> {
//! let mut host = MockHost::new();
//! let enemy = host.spawn("enemy");
//! let bullet = host.spawn("bullet");
//! let templates = MapTemplates::new().with("enemy", enemy).with("bullet", bullet);
//!
//! let mut registry = PoolRegistry::new(&mut host, templates);
//! registry.ensure_pool(&mut host, "enemy", 3, PoolInflation::Double)?;
//!
//! // Pools inflate on demand, so a warm pool always serves.
//! let entry = registry.acquire(&mut host, "enemy")?.expect("pool grows on demand");
//! assert!(!entry.is_pooled());
//!
//! // Releases route by the entry's recorded owner.
//! registry.release(&mut host, &entry)?;
//! assert!(entry.is_pooled());
//!
//! // Missing pools can be created on first use.
//! let options = AcquireOptions::new().with_auto_create(2);
//! let shot = registry.acquire_with(&mut host, "bullet", options)?.expect("auto-created");
//! assert!(registry.contains("bullet"));
//! # drop(shot);
//! # Ok(())
//! # }
//! ```

pub mod entry;
pub mod error;
pub mod host;
pub mod policy;
pub mod pool;
pub mod registry;
pub mod stats;
pub mod testing;

pub use entry::{PoolEntry, PooledRef};
pub use error::{PoolError, PoolResult};
pub use host::{InstanceHost, TemplateSource};
pub use policy::PoolInflation;
pub use pool::Pool;
pub use registry::{AcquireOptions, PoolRegistry};
pub use stats::PoolStats;

/// Common imports for crates building on the pool engine.
pub mod prelude {
    pub use crate::{
        AcquireOptions, InstanceHost, Pool, PoolEntry, PoolError, PoolInflation, PoolRegistry,
        PoolResult, PoolStats, PooledRef, TemplateSource,
    };
}
