//! # Host Contracts
//!
//! The platform that actually shows containers to viewers lives outside this
//! crate. It plugs in through three traits:
//!
//! - [`Host`] - creates container surfaces
//! - [`Container`] - a slot-addressed surface the host tracks viewers on
//! - [`Viewer`] - whoever looks at a view: can be identified and can open a container
//!
//! An in-memory implementation lives in [`crate::testing`] behind the
//! `test-helpers` feature.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::element::ItemStack;
use crate::error::HostError;

/// Identity of a viewer session
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewerId(String);

impl ViewerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ViewerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

/// Opaque token identifying the view that holds a container
///
/// Handed to [`Host::create_container`] so the host can map a container back
/// to its view without the view implementing any host-specific interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerOwner(u64);

impl ContainerOwner {
    /// Allocate a process-unique token
    pub fn next() -> Self {
        Self(NEXT_OWNER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ContainerOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "view-{}", self.0)
    }
}

/// A host-owned, slot-addressed rendering surface
#[cfg_attr(test, mockall::automock)]
pub trait Container {
    /// Number of slots
    fn size(&self) -> usize;

    /// Write `payload` into `slot`
    fn set_cell(&mut self, slot: usize, payload: &ItemStack);

    /// Viewers the host currently shows this container to
    fn active_viewers(&self) -> HashSet<ViewerId>;

    fn is_viewed_by(&self, viewer: &ViewerId) -> bool {
        self.active_viewers().contains(viewer)
    }
}

/// Factory for container surfaces
#[cfg_attr(test, mockall::automock(type Container = MockContainer;))]
pub trait Host {
    type Container: Container;

    /// Create an empty container of `size` slots held by `owner`
    fn create_container(&self, owner: ContainerOwner, size: usize, title: &str) -> Self::Container;
}

/// Capability of an entity that can look at views
pub trait Viewer {
    type Container: Container;

    fn id(&self) -> ViewerId;

    /// Ask the host to present `container` to this viewer.
    ///
    /// Fails with a host-defined error when the viewer session is gone.
    fn open(&self, container: &Self::Container) -> std::result::Result<(), HostError>;
}
