//! Interface definitions
//!
//! An [`Interface`] is the immutable description of a GUI type: how many rows
//! it has, its title, and the ordered transformations that fill it. One
//! definition is shared by every view opened from it.

use std::sync::Arc;

use crate::argument::InterfaceArgument;
use crate::error::{Error, Result};
use crate::grid::{GridMapper, CHEST_WIDTH};
use crate::host::{Host, Viewer, ViewerId};
use crate::pane::Pane;
use crate::transform::{Transform, ViewContext};
use crate::view::View;

/// A chest-style interface definition
#[derive(Clone)]
pub struct Interface {
    rows: usize,
    title: String,
    mapper: GridMapper,
    transforms: Vec<Arc<dyn Transform>>,
}

impl Interface {
    pub fn builder() -> InterfaceBuilder {
        InterfaceBuilder::default()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mapper(&self) -> GridMapper {
        self.mapper
    }

    /// Number of host container slots a view of this interface occupies
    pub fn size(&self) -> usize {
        self.mapper.width() * self.rows
    }

    pub fn transforms(&self) -> &[Arc<dyn Transform>] {
        &self.transforms
    }

    /// Build a fresh pane by running every transformation in order.
    ///
    /// Stops at the first failing transformation; the partial pane is dropped.
    pub fn build_pane(&self, viewer: &ViewerId, argument: &InterfaceArgument) -> Result<Pane> {
        let mut pane = Pane::new(self.mapper, self.rows);
        let context = ViewContext::new(viewer, argument, self);

        for (index, transform) in self.transforms.iter().enumerate() {
            transform
                .apply(&mut pane, &context)
                .map_err(|e| Error::transformation(index, e))?;
        }

        Ok(pane)
    }

    /// Construct a view of this interface for `viewer` and open it.
    ///
    /// A construction failure yields no view. An open failure is returned
    /// with the view dropped; use [`View::build`] and [`View::open`]
    /// separately to keep the view around for a retry.
    pub fn open<V, H>(
        self: &Arc<Self>,
        viewer: Arc<V>,
        argument: InterfaceArgument,
        host: &H,
    ) -> Result<View<V>>
    where
        V: Viewer,
        H: Host<Container = V::Container>,
    {
        let mut view = View::build(Arc::clone(self), viewer, argument, host)?;
        view.open()?;
        Ok(view)
    }
}

impl std::fmt::Debug for Interface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interface")
            .field("rows", &self.rows)
            .field("title", &self.title)
            .field("width", &self.mapper.width())
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

/// Builder for [`Interface`]
pub struct InterfaceBuilder {
    rows: usize,
    title: String,
    width: usize,
    transforms: Vec<Arc<dyn Transform>>,
}

impl Default for InterfaceBuilder {
    fn default() -> Self {
        Self {
            rows: 1,
            title: String::new(),
            width: CHEST_WIDTH,
            transforms: Vec::new(),
        }
    }
}

impl InterfaceBuilder {
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Override the grid width. Only hosts with non-chest grids need this.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Append a transformation; it runs after every one added before it
    pub fn transform(mut self, transform: impl Transform + 'static) -> Self {
        self.transforms.push(Arc::new(transform));
        self
    }

    /// Append a transformation that is already shared
    pub fn transform_arc(mut self, transform: Arc<dyn Transform>) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn build(self) -> Result<Interface> {
        if self.rows == 0 {
            return Err(Error::InvalidRows { rows: self.rows });
        }
        if self.width == 0 {
            return Err(Error::config("interface width must be at least 1"));
        }
        if self.width.checked_mul(self.rows).is_none() {
            return Err(Error::grid_too_large(self.width, self.rows));
        }

        Ok(Interface {
            rows: self.rows,
            title: self.title,
            mapper: GridMapper::new(self.width),
            transforms: self.transforms,
        })
    }
}
