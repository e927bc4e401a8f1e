//! Name-keyed pool registry

use std::collections::HashMap;

use tracing::{error, warn};

use crate::entry::PooledRef;
use crate::error::{PoolError, PoolResult};
use crate::host::{InstanceHost, TemplateSource};
use crate::policy::PoolInflation;
use crate::pool::Pool;

/// Options for [`PoolRegistry::acquire_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcquireOptions {
    /// Activate the instance on the host before handing it out.
    pub activate: bool,
    /// When non-zero and the pool does not exist yet, create it with this
    /// warm-up size first. Auto-created pools use [`PoolInflation::Increment`]:
    /// their sizing was not pre-planned, so they grow conservatively.
    pub auto_create: usize,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self { activate: true, auto_create: 0 }
    }
}

impl AcquireOptions {
    /// Options with activation on and no auto-creation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the acquired instance is activated.
    pub fn with_activate(mut self, activate: bool) -> Self {
        self.activate = activate;
        self
    }

    /// Set the warm-up size used to auto-create a missing pool.
    pub fn with_auto_create(mut self, size: usize) -> Self {
        self.auto_create = size;
        self
    }
}

/// Owner of every [`Pool`], keyed by name.
///
/// The registry lazily creates pools from its [`TemplateSource`] and routes
/// acquire/release calls by name. It is an explicitly constructed value:
/// callers hold it (or share it behind a mutex, see `recycler-scroll`'s
/// `SharedRegistry`) and tear it down by dropping it. The host-side
/// instances themselves stay owned by the host.
///
/// # Example
/// ```
/// use recycler_pool::testing::{MapTemplates, MockHost};
/// use recycler_pool::{PoolInflation, PoolRegistry};
///
/// # fn main() -> Result<(), recycler_pool::PoolError> {
/// let mut host = MockHost::new();
/// let enemy = host.spawn("enemy");
/// let templates = MapTemplates::new().with("enemy", enemy);
/// let mut registry = PoolRegistry::new(&mut host, templates);
///
/// registry.ensure_pool(&mut host, "enemy", 3, PoolInflation::Double)?;
/// let entry = registry.acquire(&mut host, "enemy")?.expect("warm pool");
/// registry.release(&mut host, &entry)?;
/// # Ok(())
/// # }
/// ```
pub struct PoolRegistry<H: InstanceHost> {
    pools: HashMap<String, Pool<H>>,
    templates: Box<dyn TemplateSource<H>>,
    root: H::Handle,
}

impl<H: InstanceHost> PoolRegistry<H> {
    /// Create an empty registry resolving templates through `templates`.
    ///
    /// A grouping node is created on the host; every pool root is parked
    /// under it.
    pub fn new(host: &mut H, templates: impl TemplateSource<H> + 'static) -> Self {
        let root = host.create_node("PoolRegistry");
        Self { pools: HashMap::new(), templates: Box::new(templates), root }
    }

    /// Create the named pool if it does not exist yet. Idempotent.
    ///
    /// Template resolution failure is a configuration error: it is logged,
    /// no pool is registered, and the registry is left unchanged.
    pub fn ensure_pool(
        &mut self,
        host: &mut H,
        name: &str,
        size: usize,
        inflation: PoolInflation,
    ) -> PoolResult<()> {
        if self.pools.contains_key(name) {
            return Ok(());
        }

        let Some(template) = self.templates.lookup(host, name) else {
            error!(pool = name, "no template available for pool");
            return Err(PoolError::template_not_found(name));
        };

        let pool = Pool::new(host, name, &template, Some(&self.root), size, inflation);
        self.pools.insert(name.to_owned(), pool);
        Ok(())
    }

    /// Acquire an instance from the named pool with default options
    /// (activate, no auto-creation).
    pub fn acquire(&mut self, host: &mut H, name: &str) -> PoolResult<Option<PooledRef<H>>> {
        self.acquire_with(host, name, AcquireOptions::default())
    }

    /// Acquire an instance from the named pool.
    ///
    /// `Ok(None)` means the pool exists but had no instance to hand out, a
    /// legitimate empty-pool signal. An unregistered name (with no
    /// `auto_create`) is a caller mistake and maps to
    /// [`PoolError::UnknownPool`].
    pub fn acquire_with(
        &mut self,
        host: &mut H,
        name: &str,
        options: AcquireOptions,
    ) -> PoolResult<Option<PooledRef<H>>> {
        if !self.pools.contains_key(name) && options.auto_create > 0 {
            self.ensure_pool(host, name, options.auto_create, PoolInflation::Increment)?;
        }

        let Some(pool) = self.pools.get_mut(name) else {
            error!(pool = name, "acquire from an unregistered pool");
            return Err(PoolError::unknown_pool(name));
        };

        let entry = pool.next_available(host, options.activate);
        if entry.is_none() {
            warn!(pool = name, "no instance available");
        }
        Ok(entry)
    }

    /// Return an instance to the pool recorded in its tag.
    ///
    /// An entry tagged for a pool this registry never created is rejected
    /// without touching any state.
    pub fn release(&mut self, host: &mut H, entry: &PooledRef<H>) -> PoolResult<()> {
        let Some(pool) = self.pools.get_mut(entry.pool_name()) else {
            warn!(
                pool = entry.pool_name(),
                "released instance does not belong to any registered pool"
            );
            return Err(PoolError::unknown_pool(entry.pool_name()));
        };
        pool.return_to_pool(host, entry)
    }

    /// Look up a pool by name.
    pub fn pool(&self, name: &str) -> Option<&Pool<H>> {
        self.pools.get(name)
    }

    /// Whether a pool with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.pools.contains_key(name)
    }

    /// Number of registered pools.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether any pool is registered.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Names of all registered pools, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pools.keys().map(String::as_str)
    }

    /// Grouping node all pool roots are parked under.
    pub fn root_handle(&self) -> &H::Handle {
        &self.root
    }
}
