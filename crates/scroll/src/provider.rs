//! Cell provisioning over a shared pool registry

use std::sync::Arc;

use parking_lot::Mutex;
use recycler_pool::{InstanceHost, PoolInflation, PoolRegistry, PoolResult, PooledRef, TemplateSource};
use tracing::debug;

/// A [`PoolRegistry`] behind one mutex, shareable across cell providers.
///
/// This is the whole-registry locking model: every operation is a short,
/// bounded state transition, so a single lock matches the engine's
/// single-owner semantics without per-pool lock bookkeeping.
pub type SharedRegistry<H> = Arc<Mutex<PoolRegistry<H>>>;

/// Create a [`SharedRegistry`] over a fresh registry.
pub fn shared_registry<H: InstanceHost>(
    host: &mut H,
    templates: impl TemplateSource<H> + 'static,
) -> SharedRegistry<H> {
    Arc::new(Mutex::new(PoolRegistry::new(host, templates)))
}

/// Default warm-up size for lazily created cell pools.
pub const DEFAULT_WARM_UP: usize = 5;

/// Provisions list cells for one template name.
///
/// The backing pool is created lazily on the first [`CellProvider::get_cell`]
/// call, warmed to [`DEFAULT_WARM_UP`] instances (or the size set with
/// [`CellProvider::with_warm_up`]) under the doubling growth policy. An
/// optional recycle hook runs just before a cell is returned, giving the
/// list a chance to strip row state off the instance.
pub struct CellProvider<H: InstanceHost> {
    registry: SharedRegistry<H>,
    template_name: String,
    warm_up: usize,
    initialized: bool,
    recycle_hook: Option<Box<dyn FnMut(&mut H, &H::Handle)>>,
}

impl<H: InstanceHost> CellProvider<H> {
    /// Create a provider for `template_name` over `registry`.
    pub fn new(registry: SharedRegistry<H>, template_name: impl Into<String>) -> Self {
        Self {
            registry,
            template_name: template_name.into(),
            warm_up: DEFAULT_WARM_UP,
            initialized: false,
            recycle_hook: None,
        }
    }

    /// Set the warm-up size used when the pool is first created.
    pub fn with_warm_up(mut self, warm_up: usize) -> Self {
        self.warm_up = warm_up;
        self
    }

    /// Run `hook` on every cell just before it is returned to the pool.
    pub fn with_recycle_hook(mut self, hook: impl FnMut(&mut H, &H::Handle) + 'static) -> Self {
        self.recycle_hook = Some(Box::new(hook));
        self
    }

    /// Check a cell out, creating and warming the pool on first use.
    pub fn get_cell(&mut self, host: &mut H) -> PoolResult<Option<PooledRef<H>>> {
        if !self.initialized {
            debug!(pool = %self.template_name, warm_up = self.warm_up, "warming cell pool");
            self.registry.lock().ensure_pool(
                host,
                &self.template_name,
                self.warm_up,
                PoolInflation::Double,
            )?;
            self.initialized = true;
        }
        self.registry.lock().acquire(host, &self.template_name)
    }

    /// Return a cell to its pool, running the recycle hook first.
    pub fn return_cell(&mut self, host: &mut H, cell: &PooledRef<H>) -> PoolResult<()> {
        if let Some(hook) = self.recycle_hook.as_mut() {
            hook(host, cell.handle());
        }
        self.registry.lock().release(host, cell)
    }

    /// The template name cells are provisioned from.
    pub fn template_name(&self) -> &str {
        &self.template_name
    }
}
