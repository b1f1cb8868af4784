//! # Transformations
//!
//! A transformation mutates a [`Pane`] while a view is being built. The
//! interface definition holds an ordered list of them; each runs exactly once
//! per build, in list order, and sees everything earlier ones wrote.
//!
//! Two kinds are provided:
//! - closures: any `Fn(&mut Pane, &ViewContext) -> Result<()>`
//! - [`Transformation`]: declarative variants that can be loaded from config

use serde::{Deserialize, Serialize};

use crate::argument::InterfaceArgument;
use crate::element::{Element, ItemStack};
use crate::error::Result;
use crate::host::ViewerId;
use crate::interface::Interface;
use crate::pane::Pane;

/// What a transformation can see of the view under construction
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    viewer: &'a ViewerId,
    argument: &'a InterfaceArgument,
    interface: &'a Interface,
}

impl<'a> ViewContext<'a> {
    pub fn new(
        viewer: &'a ViewerId,
        argument: &'a InterfaceArgument,
        interface: &'a Interface,
    ) -> Self {
        Self {
            viewer,
            argument,
            interface,
        }
    }

    pub fn viewer(&self) -> &'a ViewerId {
        self.viewer
    }

    pub fn argument(&self) -> &'a InterfaceArgument {
        self.argument
    }

    pub fn interface(&self) -> &'a Interface {
        self.interface
    }
}

/// A unit of pane-building behavior
pub trait Transform: Send + Sync {
    fn apply(&self, pane: &mut Pane, view: &ViewContext<'_>) -> Result<()>;
}

impl<F> Transform for F
where
    F: Fn(&mut Pane, &ViewContext<'_>) -> Result<()> + Send + Sync,
{
    fn apply(&self, pane: &mut Pane, view: &ViewContext<'_>) -> Result<()> {
        self(pane, view)
    }
}

/// Declarative transformations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transformation {
    /// Every cell
    Fill { item: ItemStack },

    /// A single cell
    Set { x: usize, y: usize, item: ItemStack },

    /// Every cell of row `y`
    Row { y: usize, item: ItemStack },

    /// Every cell of column `x`
    Column { x: usize, item: ItemStack },

    /// The outer ring of cells
    Border { item: ItemStack },
}

impl Transform for Transformation {
    fn apply(&self, pane: &mut Pane, _view: &ViewContext<'_>) -> Result<()> {
        match self {
            Transformation::Fill { item } => {
                pane.fill(item.clone());
                Ok(())
            }
            Transformation::Set { x, y, item } => pane.set(*x, *y, item.clone()),
            Transformation::Row { y, item } => {
                let element = Element::new(item.clone());
                for x in 0..pane.width() {
                    pane.set(x, *y, element.clone())?;
                }
                Ok(())
            }
            Transformation::Column { x, item } => {
                let element = Element::new(item.clone());
                for y in 0..pane.height() {
                    pane.set(*x, y, element.clone())?;
                }
                Ok(())
            }
            Transformation::Border { item } => {
                let element = Element::new(item.clone());
                let (width, height) = (pane.width(), pane.height());
                let edges: Vec<_> = pane
                    .positions()
                    .filter(|p| p.x == 0 || p.y == 0 || p.x + 1 == width || p.y + 1 == height)
                    .collect();
                for pos in edges {
                    pane.set(pos.x, pos.y, element.clone())?;
                }
                Ok(())
            }
        }
    }
}
