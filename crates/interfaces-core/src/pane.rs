//! # Pane
//!
//! The owned two-dimensional grid of [`Element`]s backing one view. Every cell
//! always holds an element; cells nobody wrote hold [`Element::empty`].

use crate::element::Element;
use crate::error::Result;
use crate::grid::{GridMapper, GridPos};

/// A `width x height` grid of elements, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    mapper: GridMapper,
    height: usize,
    elements: Vec<Element>,
}

impl Pane {
    /// Create an empty pane with rows of `mapper.width()` cells
    pub fn new(mapper: GridMapper, height: usize) -> Self {
        Self {
            mapper,
            height,
            elements: vec![Element::empty(); mapper.width() * height],
        }
    }

    /// Create an empty chest-width pane
    pub fn chest(rows: usize) -> Self {
        Self::new(GridMapper::chest(), rows)
    }

    pub fn width(&self) -> usize {
        self.mapper.width()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mapper(&self) -> GridMapper {
        self.mapper
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&Element> {
        let index = self.mapper.checked_slot(x, y, self.height)?;
        Ok(&self.elements[index])
    }

    /// Replace the element at `(x, y)`; the last write to a cell wins.
    pub fn set(&mut self, x: usize, y: usize, element: impl Into<Element>) -> Result<()> {
        let index = self.mapper.checked_slot(x, y, self.height)?;
        self.elements[index] = element.into();
        Ok(())
    }

    /// Set every cell to `element`
    pub fn fill(&mut self, element: impl Into<Element>) {
        let element = element.into();
        self.elements.fill(element);
    }

    /// Reset every cell to the empty element
    pub fn clear(&mut self) {
        self.fill(Element::empty());
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.elements.len()).map(|slot| self.mapper.slot_to_grid(slot))
    }

    /// All cells with their positions, row-major
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &Element)> + '_ {
        self.elements
            .iter()
            .enumerate()
            .map(|(slot, element)| (self.mapper.slot_to_grid(slot), element))
    }

    /// The full grid as rows, indexed `[y][x]`
    pub fn snapshot(&self) -> Vec<Vec<Element>> {
        if self.width() == 0 {
            return Vec::new();
        }
        self.elements
            .chunks(self.width())
            .map(<[Element]>::to_vec)
            .collect()
    }
}
