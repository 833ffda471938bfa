//! Cells and their arena indices.

use honeycomb_topology::{RingCoord, SIDES};

/// Stable index of a cell in the grid arena.
///
/// Equals the cell's ring-major traversal position, so it doubles as the
/// coordinate's `flat_index`. Non-owning; the grid owns the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub usize);

/// One hexagonal cell.
#[derive(Debug, Clone)]
pub struct Cell {
    /// The letter this cell holds
    pub letter: char,
    /// Ring/offset position in the tessellation
    pub coord: RingCoord,
    /// Up to six adjacent cells, by fixed slot role; absent slots are `None`
    pub neighbors: [Option<CellId>; SIDES],
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.letter, self.coord)
    }
}
