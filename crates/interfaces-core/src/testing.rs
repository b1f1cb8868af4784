//! In-memory host for tests
//!
//! [`MemoryHost`] hands out [`MemoryContainer`] handles; clones of a handle
//! share the same slots and viewer set, so a test can keep one handle to play
//! the platform (closing containers, disconnecting viewers) while a view owns
//! another.
//!
//! A viewer is shown at most one container per host: opening a container
//! removes the viewer from every other container of the same host.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use crate::element::ItemStack;
use crate::error::HostError;
use crate::grid::CHEST_WIDTH;
use crate::host::{Container, ContainerOwner, Host, Viewer, ViewerId};

#[derive(Debug)]
struct ContainerState {
    owner: ContainerOwner,
    title: String,
    cells: Vec<ItemStack>,
    viewers: HashSet<ViewerId>,
}

#[derive(Debug, Default)]
struct HostState {
    containers: Vec<Weak<RefCell<ContainerState>>>,
    created: usize,
    opens: usize,
}

/// In-memory container factory
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    state: Rc<RefCell<HostState>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A connected viewer bound to this host
    pub fn viewer(&self, id: impl Into<String>) -> MemoryViewer {
        MemoryViewer {
            id: ViewerId::new(id),
            host: self.clone(),
            connected: Cell::new(true),
        }
    }

    /// Number of containers created so far
    pub fn created_count(&self) -> usize {
        self.state.borrow().created
    }

    /// Number of successful opens so far
    pub fn open_count(&self) -> usize {
        self.state.borrow().opens
    }

    /// Containers that are still alive
    pub fn containers(&self) -> Vec<MemoryContainer> {
        self.state
            .borrow()
            .containers
            .iter()
            .filter_map(Weak::upgrade)
            .map(|state| MemoryContainer { state })
            .collect()
    }

    /// Remove `viewer` from every container of this host
    pub fn close_all(&self, viewer: &ViewerId) {
        for container in self.containers() {
            container.close(viewer);
        }
    }

    fn show(&self, container: &MemoryContainer, viewer: &ViewerId) {
        self.close_all(viewer);
        container.state.borrow_mut().viewers.insert(viewer.clone());
        self.state.borrow_mut().opens += 1;
    }
}

impl Host for MemoryHost {
    type Container = MemoryContainer;

    fn create_container(&self, owner: ContainerOwner, size: usize, title: &str) -> MemoryContainer {
        let state = Rc::new(RefCell::new(ContainerState {
            owner,
            title: title.to_string(),
            cells: vec![ItemStack::air(); size],
            viewers: HashSet::new(),
        }));

        let mut host = self.state.borrow_mut();
        host.containers.retain(|c| c.strong_count() > 0);
        host.containers.push(Rc::downgrade(&state));
        host.created += 1;

        MemoryContainer { state }
    }
}

/// Shared handle to an in-memory container
#[derive(Debug, Clone)]
pub struct MemoryContainer {
    state: Rc<RefCell<ContainerState>>,
}

impl MemoryContainer {
    pub fn owner(&self) -> ContainerOwner {
        self.state.borrow().owner
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    pub fn cell(&self, slot: usize) -> Option<ItemStack> {
        self.state.borrow().cells.get(slot).cloned()
    }

    pub fn cells(&self) -> Vec<ItemStack> {
        self.state.borrow().cells.clone()
    }

    /// Stop showing this container to `viewer`
    pub fn close(&self, viewer: &ViewerId) {
        self.state.borrow_mut().viewers.remove(viewer);
    }

    /// One line per chest row; `.` for air, otherwise the material's first letter
    pub fn render(&self) -> String {
        let state = self.state.borrow();
        state
            .cells
            .chunks(CHEST_WIDTH)
            .map(|row| {
                row.iter()
                    .map(|item| {
                        if item.is_air() {
                            '.'
                        } else {
                            item.material
                                .chars()
                                .next()
                                .map_or('?', |c| c.to_ascii_uppercase())
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Container for MemoryContainer {
    fn size(&self) -> usize {
        self.state.borrow().cells.len()
    }

    fn set_cell(&mut self, slot: usize, payload: &ItemStack) {
        if let Some(cell) = self.state.borrow_mut().cells.get_mut(slot) {
            *cell = payload.clone();
        }
    }

    fn active_viewers(&self) -> HashSet<ViewerId> {
        self.state.borrow().viewers.clone()
    }
}

/// A viewer session on a [`MemoryHost`]
#[derive(Debug)]
pub struct MemoryViewer {
    id: ViewerId,
    host: MemoryHost,
    connected: Cell<bool>,
}

impl MemoryViewer {
    /// End the session: the viewer leaves every container and further opens fail
    pub fn disconnect(&self) {
        self.connected.set(false);
        self.host.close_all(&self.id);
    }

    pub fn reconnect(&self) {
        self.connected.set(true);
    }

    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }
}

impl Viewer for MemoryViewer {
    type Container = MemoryContainer;

    fn id(&self) -> ViewerId {
        self.id.clone()
    }

    fn open(&self, container: &MemoryContainer) -> std::result::Result<(), HostError> {
        if !self.connected.get() {
            return Err(format!("viewer {} is not connected", self.id).into());
        }
        self.host.show(container, &self.id);
        Ok(())
    }
}
