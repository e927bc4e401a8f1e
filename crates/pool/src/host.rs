//! Seams to the two external collaborators
//!
//! The engine owns no knowledge of how instances are actually created,
//! drawn, or arranged. It reaches the outside world exclusively through
//! [`InstanceHost`] (clone / activate / rename / reparent) and
//! [`TemplateSource`] (pool name to clonable template). Anything that can
//! satisfy these two traits can be pooled: a scene graph, an ECS world, a
//! widget tree, or the in-memory mock in [`crate::testing`].

/// Host-side operations on pooled instances.
///
/// All engine operations take the host as an explicit `&mut` parameter; the
/// engine never stores a host reference. Implementations are expected to be
/// cheap and synchronous: growth is pure in-memory cloning on the caller's
/// thread.
pub trait InstanceHost {
    /// Opaque ownership handle to one host-side instance.
    type Handle;

    /// Manufacture a new instance as a copy of `template`.
    fn instantiate(&mut self, template: &Self::Handle) -> Self::Handle;

    /// Toggle whether the instance participates in the host's update cycle.
    /// Parked instances are kept inactive.
    fn set_active(&mut self, handle: &Self::Handle, active: bool);

    /// Rename the instance's externally visible label.
    fn set_display_name(&mut self, handle: &Self::Handle, name: &str);

    /// Move the instance under a new owner in the host's hierarchy.
    /// `None` detaches it.
    fn reparent(&mut self, handle: &Self::Handle, parent: Option<&Self::Handle>);

    /// Create an empty grouping node. Pools park their idle instances under
    /// one of these.
    fn create_node(&mut self, name: &str) -> Self::Handle;
}

/// Resolves a pool name to a clonable template instance.
///
/// "Not found" is a hard configuration error at the call site: the registry
/// logs it and registers no pool. Lookups are not retried.
pub trait TemplateSource<H: InstanceHost> {
    /// Resolve `name` to a template handle, or `None` if no template exists.
    fn lookup(&mut self, host: &mut H, name: &str) -> Option<H::Handle>;
}

impl<H, F> TemplateSource<H> for F
where
    H: InstanceHost,
    F: FnMut(&mut H, &str) -> Option<H::Handle>,
{
    fn lookup(&mut self, host: &mut H, name: &str) -> Option<H::Handle> {
        self(host, name)
    }
}
