//! The grid arena and its by-letter index.

use std::collections::HashMap;

use honeycomb_topology::{cells_in_ring, neighbors, total_cells_through, RingCoord};

use crate::cell::{Cell, CellId};
use crate::error::{GridError, Result};

/// A fully built honeycomb grid.
///
/// Owns every cell; neighbor slots and letter buckets hold arena indices
/// only. Adjacency is wired once during construction and stable afterward.
#[derive(Debug)]
pub struct Honeycomb {
    cells: Vec<Cell>,
    ring_count: u32,
    by_letter: HashMap<char, Vec<CellId>>,
}

impl Honeycomb {
    /// Build a grid from ring text, ring 0 (one center letter) outward.
    ///
    /// Line r must hold exactly `cells_in_ring(r)` characters; anything else
    /// is rejected with [`GridError::RingSize`] rather than silently
    /// producing out-of-range adjacency. An empty slice yields an empty
    /// grid, which every search trivially misses.
    pub fn from_rings<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        for (ring, line) in lines.iter().enumerate() {
            let expected = cells_in_ring(ring as u32) as usize;
            let found = line.as_ref().chars().count();
            if found != expected {
                return Err(GridError::RingSize {
                    ring,
                    expected,
                    found,
                });
            }
        }

        let ring_count = lines.len() as u32;
        let capacity = match ring_count {
            0 => 0,
            n => total_cells_through(n - 1) as usize,
        };
        let mut cells = Vec::with_capacity(capacity);
        let mut by_letter: HashMap<char, Vec<CellId>> = HashMap::new();

        for (ring, line) in lines.iter().enumerate() {
            for (offset, letter) in line.as_ref().chars().enumerate() {
                let coord = RingCoord::new(ring as u32, offset as u32);
                let id = CellId(cells.len());
                debug_assert_eq!(id.0, coord.flat_index());

                by_letter.entry(letter).or_default().push(id);
                cells.push(Cell {
                    letter,
                    coord,
                    neighbors: [None; honeycomb_topology::SIDES],
                });
            }
        }

        // All cells exist now; wire the neighbor slots in a second pass.
        for index in 0..cells.len() {
            let slots = neighbors(cells[index].coord, ring_count);
            cells[index].neighbors = slots.map(|slot| slot.map(|c| CellId(c.flat_index())));
        }

        Ok(Self {
            cells,
            ring_count,
            by_letter,
        })
    }

    /// Look up a cell by arena index.
    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    /// All cells in ring-major, offset-minor order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of rings, including the center.
    pub fn ring_count(&self) -> u32 {
        self.ring_count
    }

    /// Cells holding `letter`, in discovery order. Empty for absent letters.
    pub fn cells_with_letter(&self, letter: char) -> &[CellId] {
        self.by_letter
            .get(&letter)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Arena index of the cell at `coord`, if it lies inside the grid.
    pub fn cell_at(&self, coord: RingCoord) -> Option<CellId> {
        let in_range = coord.ring < self.ring_count && coord.offset < cells_in_ring(coord.ring);
        in_range.then(|| CellId(coord.flat_index()))
    }
}
