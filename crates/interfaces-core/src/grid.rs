//! # Coordinate Mapping
//!
//! Translation between the linear slot index a host container is addressed by
//! and the `(x, y)` position a [`Pane`](crate::pane::Pane) is addressed by.
//!
//! Layout is row-major: `x` varies fastest, so slot `9` on a chest is the
//! first cell of the second row.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The width of a chest-style container grid.
pub const CHEST_WIDTH: usize = 9;

/// A cell position inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bidirectional mapping between slots and grid positions for a fixed row width.
///
/// Both directions are pure and total; range checks live in
/// [`GridMapper::checked_slot`] and [`GridMapper::checked_pos`], which callers
/// use before anything reaches a host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMapper {
    width: usize,
}

impl GridMapper {
    /// Create a mapper for rows of `width` cells. `width` must be non-zero.
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Mapper for a chest-style container
    pub const fn chest() -> Self {
        Self::new(CHEST_WIDTH)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn slot_to_grid(&self, slot: usize) -> GridPos {
        GridPos::new(slot % self.width, slot / self.width)
    }

    pub const fn grid_to_slot(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Map `(x, y)` to a slot, failing with [`Error::OutOfBounds`] if the
    /// position lies outside a grid of `rows` rows.
    pub fn checked_slot(&self, x: usize, y: usize, rows: usize) -> Result<usize> {
        if x >= self.width || y >= rows {
            return Err(Error::out_of_bounds(x, y, self.width, rows));
        }
        Ok(self.grid_to_slot(x, y))
    }

    /// Map a slot to `(x, y)`, failing with [`Error::SlotOutOfBounds`] if the
    /// slot lies outside a grid of `rows` rows.
    pub fn checked_pos(&self, slot: usize, rows: usize) -> Result<GridPos> {
        let size = self.width * rows;
        if slot >= size {
            return Err(Error::SlotOutOfBounds { slot, size });
        }
        Ok(self.slot_to_grid(slot))
    }
}

impl Default for GridMapper {
    fn default() -> Self {
        Self::chest()
    }
}

/// Converts a chest slot index to an x/y position.
pub const fn slot_to_grid(slot: usize) -> GridPos {
    GridMapper::chest().slot_to_grid(slot)
}

/// Converts an x/y position to a chest slot index.
pub const fn grid_to_slot(x: usize, y: usize) -> usize {
    GridMapper::chest().grid_to_slot(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_chest_positions() {
        assert_eq!(slot_to_grid(0), GridPos::new(0, 0));
        assert_eq!(slot_to_grid(8), GridPos::new(8, 0));
        assert_eq!(slot_to_grid(9), GridPos::new(0, 1));
        assert_eq!(grid_to_slot(0, 1), 9);
        assert_eq!(grid_to_slot(8, 2), 26);
    }

    #[test]
    fn test_slot_round_trip_over_chest_sizes() {
        let mapper = GridMapper::chest();
        for rows in 1..=6 {
            for slot in 0..CHEST_WIDTH * rows {
                let pos = mapper.slot_to_grid(slot);
                assert_eq!(mapper.grid_to_slot(pos.x, pos.y), slot);
            }
            for y in 0..rows {
                for x in 0..CHEST_WIDTH {
                    let slot = mapper.grid_to_slot(x, y);
                    assert_eq!(mapper.slot_to_grid(slot), GridPos::new(x, y));
                }
            }
        }
    }

    #[test]
    fn test_custom_width() {
        let mapper = GridMapper::new(5);
        assert_eq!(mapper.width(), 5);
        assert_eq!(mapper.slot_to_grid(7), GridPos::new(2, 1));
        assert_eq!(mapper.grid_to_slot(4, 3), 19);
    }

    #[test]
    fn test_checked_slot_rejects_out_of_range() {
        let mapper = GridMapper::chest();
        assert_eq!(mapper.checked_slot(4, 2, 3).unwrap(), 22);

        let err = mapper.checked_slot(9, 0, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfBounds {
                x: 9,
                y: 0,
                width: 9,
                height: 3
            }
        ));

        assert!(mapper.checked_slot(0, 3, 3).is_err());
    }

    #[test]
    fn test_checked_pos_rejects_out_of_range() {
        let mapper = GridMapper::chest();
        assert_eq!(mapper.checked_pos(26, 3).unwrap(), GridPos::new(8, 2));

        let err = mapper.checked_pos(27, 3).unwrap_err();
        assert!(matches!(err, Error::SlotOutOfBounds { slot: 27, size: 27 }));
    }

    #[test]
    fn test_grid_pos_display_and_from() {
        let pos: GridPos = (3, 1).into();
        assert_eq!(pos, GridPos::new(3, 1));
        assert_eq!(pos.to_string(), "(3, 1)");
    }
}
