//! Named interface definitions
//!
//! The registry is filled once from configuration (or by hand) and then only
//! read: every lookup hands out the same shared [`Interface`].

use std::collections::BTreeMap;
use std::sync::Arc;

use interfaces_core::prelude::*;
use interfaces_core::{Host, Interface, InterfaceArgument, View, Viewer};

use crate::config::Settings;

/// Interfaces by name
#[derive(Debug, Clone, Default)]
pub struct InterfaceRegistry {
    interfaces: BTreeMap<String, Arc<Interface>>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every interface declared in `settings`.
    ///
    /// Fails on the first invalid definition or duplicate name.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut registry = Self::new();
        for config in &settings.interfaces {
            registry.register(config.name.clone(), config.build()?)?;
        }
        info!("Registered {} interface(s)", registry.len());
        Ok(registry)
    }

    pub fn register(&mut self, name: impl Into<String>, interface: Interface) -> Result<()> {
        let name = name.into();
        if self.interfaces.contains_key(&name) {
            return Err(Error::config(format!("Duplicate interface name: {}", name)));
        }
        debug!(%name, rows = interface.rows(), "Registered interface");
        self.interfaces.insert(name, Arc::new(interface));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<Interface>> {
        self.interfaces
            .get(name)
            .cloned()
            .ok_or_else(|| Error::unknown_interface(name))
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.interfaces.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Look up `name`, build a view of it for `viewer` and open it
    pub fn open<V, H>(
        &self,
        name: &str,
        viewer: Arc<V>,
        argument: InterfaceArgument,
        host: &H,
    ) -> Result<View<V>>
    where
        V: Viewer,
        H: Host<Container = V::Container>,
    {
        self.get(name)?.open(viewer, argument, host)
    }
}
