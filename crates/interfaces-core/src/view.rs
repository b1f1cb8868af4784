//! # Views
//!
//! A [`View`] binds one [`Interface`], one [`Viewer`] and one
//! [`InterfaceArgument`] into a renderable object. Building a view:
//!
//! 1. runs the interface's transformations, in order, on a fresh pane
//! 2. asks the host for a container (only once step 1 fully succeeded)
//! 3. projects every pane cell into its container slot
//!
//! ## Lifecycle
//!
//! ```text
//! build() ──► Ready ──open()──► Open ──host closes──► Closed
//! ```
//!
//! `Open` and `Closed` are never stored: [`View::viewing`] asks the container
//! every time whether the viewer is still among its active viewers.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::argument::InterfaceArgument;
use crate::error::{Error, Result};
use crate::host::{Container, ContainerOwner, Host, Viewer};
use crate::interface::Interface;
use crate::pane::Pane;

/// Observable lifecycle state of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Built and projected, never successfully opened
    Ready,
    /// The host currently shows the container to the viewer
    Open,
    /// Was opened, the host no longer lists the viewer
    Closed,
}

/// A live view of an interface for one viewer
pub struct View<V: Viewer> {
    owner: ContainerOwner,
    interface: Arc<Interface>,
    viewer: Arc<V>,
    argument: InterfaceArgument,
    pane: Pane,
    container: V::Container,
    opened: bool,
}

impl<V: Viewer> View<V> {
    /// Build a view and project it into a new host container.
    ///
    /// All-or-nothing: when a transformation fails no container is created.
    pub fn build<H>(
        interface: Arc<Interface>,
        viewer: Arc<V>,
        argument: InterfaceArgument,
        host: &H,
    ) -> Result<Self>
    where
        H: Host<Container = V::Container>,
    {
        let viewer_id = viewer.id();
        let pane = interface.build_pane(&viewer_id, &argument).map_err(|e| {
            warn!(viewer = %viewer_id, title = interface.title(), "View construction failed: {}", e);
            e
        })?;

        let owner = ContainerOwner::next();
        let mut container = host.create_container(owner, interface.size(), interface.title());
        project(&pane, &mut container);

        debug!(
            %owner,
            viewer = %viewer_id,
            rows = interface.rows(),
            transforms = interface.transforms().len(),
            "Built view"
        );

        Ok(Self {
            owner,
            interface,
            viewer,
            argument,
            pane,
            container,
            opened: false,
        })
    }

    pub fn owner(&self) -> ContainerOwner {
        self.owner
    }

    pub fn viewer(&self) -> &Arc<V> {
        &self.viewer
    }

    pub fn argument(&self) -> &InterfaceArgument {
        &self.argument
    }

    pub fn interface(&self) -> &Arc<Interface> {
        &self.interface
    }

    pub fn pane(&self) -> &Pane {
        &self.pane
    }

    /// The host container this view projects into
    pub fn container(&self) -> &V::Container {
        &self.container
    }

    /// Ask the viewer to open this view's container.
    ///
    /// Re-invokes the host on every call. On failure the view is left as it
    /// was and the call may be retried.
    pub fn open(&mut self) -> Result<()> {
        if let Err(source) = self.viewer.open(&self.container) {
            let viewer = self.viewer.id();
            warn!(owner = %self.owner, %viewer, "Failed to open view: {}", source);
            return Err(Error::host_open(viewer, source));
        }

        self.opened = true;
        debug!(owner = %self.owner, viewer = %self.viewer.id(), "Opened view");
        Ok(())
    }

    /// Whether the host currently shows this view's container to its viewer
    pub fn viewing(&self) -> bool {
        self.container.is_viewed_by(&self.viewer.id())
    }

    pub fn state(&self) -> ViewState {
        if self.viewing() {
            ViewState::Open
        } else if self.opened {
            ViewState::Closed
        } else {
            ViewState::Ready
        }
    }

    /// Rebuild the pane from scratch and re-project all of it.
    ///
    /// On failure the previous pane and container contents stay in place.
    pub fn redraw(&mut self) -> Result<()> {
        let pane = self
            .interface
            .build_pane(&self.viewer.id(), &self.argument)?;
        project(&pane, &mut self.container);
        self.pane = pane;

        debug!(owner = %self.owner, "Redrew view");
        Ok(())
    }
}

impl<V: Viewer> std::fmt::Debug for View<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("owner", &self.owner)
            .field("viewer", &self.viewer.id())
            .field("interface", &self.interface)
            .field("argument", &self.argument)
            .field("opened", &self.opened)
            .finish_non_exhaustive()
    }
}

/// Write every pane cell into its container slot. Full overwrite, no diffing.
fn project<C: Container>(pane: &Pane, container: &mut C) {
    let mapper = pane.mapper();
    for (pos, element) in pane.iter() {
        let slot = mapper.grid_to_slot(pos.x, pos.y);
        trace!(slot, %pos, "Projecting cell");
        container.set_cell(slot, element.rendered_payload());
    }
}
