//! # interfaces-core - Pane and View Binding
//!
//! Foundation crate for grid interfaces. Builds a two-dimensional pane from an
//! ordered list of transformations, projects it onto a slot-addressed host
//! container and binds the result to a viewer as a [`View`].
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Grid (`grid`, `pane`, `element`)
//! - [`GridMapper`] - Slot <-> `(x, y)` mapping for a fixed row width
//! - [`Pane`] - Owned grid of [`Element`]s, every cell always populated
//! - [`Element`], [`ItemStack`] - Cell value and the payload it renders to
//!
//! ### Definitions (`interface`, `transform`, `argument`)
//! - [`Interface`] - Rows, title and ordered transformations of a GUI type
//! - [`Transform`] - Pane-building behavior; closures and [`Transformation`]
//! - [`InterfaceArgument`] - Typed values passed through to transformations
//!
//! ### Views (`view`, `host`)
//! - [`View`] - One interface + one viewer + one argument, projected into a container
//! - [`Host`], [`Container`], [`Viewer`] - Contracts the platform implements
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `recoverable` vs programming-error classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use interfaces_core::prelude::*;
//! ```

pub mod argument;
pub mod element;
pub mod error;
pub mod grid;
pub mod host;
pub mod interface;
pub mod logging;
pub mod pane;
pub mod transform;
pub mod view;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

/// Prelude for common imports used throughout the interfaces crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use argument::{ArgumentBuilder, ArgumentKey, InterfaceArgument};
pub use element::{Element, ItemStack, AIR};
pub use error::{Error, HostError, Result, ResultExt};
pub use grid::{grid_to_slot, slot_to_grid, GridMapper, GridPos, CHEST_WIDTH};
pub use host::{Container, ContainerOwner, Host, Viewer, ViewerId};
pub use interface::{Interface, InterfaceBuilder};
pub use logging::LogOptions;
pub use pane::Pane;
pub use transform::{Transform, Transformation, ViewContext};
pub use view::{View, ViewState};
