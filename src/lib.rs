//! Interfaces Library
//!
//! Declarative grid interfaces: an interface definition lists ordered
//! transformations, a view runs them on a fresh pane for one viewer and
//! projects the result into a host container.
//!
//! The domain core lives in `interfaces-core` and is re-exported here. This
//! crate adds configuration loading and a registry of named interfaces.

// Module declarations
pub mod config;
pub mod registry;

// Re-export the core
pub use interfaces_core::*;
pub use registry::InterfaceRegistry;

use std::path::Path;

/// Load `.interfaces/config.toml` under `project_path`, start logging as it
/// configures and build the registry of its interfaces.
///
/// Call once per process: logging installs a global subscriber.
pub fn init(project_path: &Path) -> Result<InterfaceRegistry> {
    let settings = config::load_settings(project_path);
    logging::init(&settings.logging.to_options()).context("Failed to initialize logging")?;
    InterfaceRegistry::from_settings(&settings)
}
