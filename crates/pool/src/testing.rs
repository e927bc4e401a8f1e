//! In-memory host and template source for tests, benches, and examples
//!
//! [`MockHost`] is the smallest useful [`InstanceHost`]: handles are `u32`
//! ids and every host operation is recorded on a [`MockObject`] so tests can
//! assert on activation, labels, and hierarchy. Helpers here panic on
//! unknown handles instead of propagating errors; a dangling handle in a
//! test is a test bug.

use std::collections::HashMap;

use crate::host::{InstanceHost, TemplateSource};

/// Recorded state of one mock instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockObject {
    /// Externally visible label.
    pub label: String,
    /// Whether the instance participates in the "update cycle".
    pub active: bool,
    /// Owning node in the mock hierarchy, if attached.
    pub parent: Option<u32>,
    /// Handle this instance was cloned from, `None` for originals.
    pub cloned_from: Option<u32>,
}

/// An [`InstanceHost`] backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MockHost {
    next: u32,
    objects: HashMap<u32, MockObject>,
}

impl MockHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a standalone, active instance; use it as a pool template.
    pub fn spawn(&mut self, label: &str) -> u32 {
        self.insert(MockObject {
            label: label.to_owned(),
            active: true,
            parent: None,
            cloned_from: None,
        })
    }

    /// Recorded state of `handle`.
    ///
    /// # Panics
    /// Panics if the handle was never issued by this host.
    pub fn object(&self, handle: u32) -> &MockObject {
        &self.objects[&handle]
    }

    /// Total instances ever created, grouping nodes included.
    pub fn created(&self) -> usize {
        self.objects.len()
    }

    fn insert(&mut self, object: MockObject) -> u32 {
        let handle = self.next;
        self.next += 1;
        self.objects.insert(handle, object);
        handle
    }

    fn object_mut(&mut self, handle: u32) -> &mut MockObject {
        self.objects.get_mut(&handle).expect("handle was never issued by this host")
    }
}

impl InstanceHost for MockHost {
    type Handle = u32;

    fn instantiate(&mut self, template: &u32) -> u32 {
        let source = self.object(*template).clone();
        self.insert(MockObject {
            label: source.label,
            active: source.active,
            parent: None,
            cloned_from: Some(*template),
        })
    }

    fn set_active(&mut self, handle: &u32, active: bool) {
        self.object_mut(*handle).active = active;
    }

    fn set_display_name(&mut self, handle: &u32, name: &str) {
        name.clone_into(&mut self.object_mut(*handle).label);
    }

    fn reparent(&mut self, handle: &u32, parent: Option<&u32>) {
        self.object_mut(*handle).parent = parent.copied();
    }

    fn create_node(&mut self, name: &str) -> u32 {
        self.insert(MockObject {
            label: name.to_owned(),
            active: true,
            parent: None,
            cloned_from: None,
        })
    }
}

/// A [`TemplateSource`] backed by a name-to-handle map.
#[derive(Debug, Default)]
pub struct MapTemplates {
    templates: HashMap<String, u32>,
}

impl MapTemplates {
    /// Create an empty template map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` as the template for `name`.
    pub fn with(mut self, name: &str, handle: u32) -> Self {
        self.templates.insert(name.to_owned(), handle);
        self
    }
}

impl TemplateSource<MockHost> for MapTemplates {
    fn lookup(&mut self, _host: &mut MockHost, name: &str) -> Option<u32> {
        self.templates.get(name).copied()
    }
}
