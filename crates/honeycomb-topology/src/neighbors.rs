//! Six-slot neighbor derivation.
//!
//! Each cell carries six fixed neighbor slots with directional roles. The
//! roles are arbitrary for correctness but fixed, so traversal order is
//! deterministic and reproducible:
//!
//! | slot | role                                             |
//! |------|--------------------------------------------------|
//! | 0    | inner (corner) / inner-right (edge)              |
//! | 1    | same-ring left                                   |
//! | 2    | same-ring right                                  |
//! | 3    | outer middle                                     |
//! | 4    | outer right                                      |
//! | 5    | inner-left (edge) / outer-left (corner)          |
//!
//! Slot 5 is shared: an edge cell reaches one extra inner cell, a corner
//! cell one extra outer cell, never both. All offsets follow in closed form
//! from `offset / ring` (the side) and `offset % ring` (position along the
//! side); the ring-boundary wraparounds reduce to plain modulo arithmetic.

use crate::ring::{cells_in_ring, RingCoord};
use crate::SIDES;

/// Directional role of a neighbor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum NeighborSlot {
    /// Inner neighbor for corners, inner-right for edge cells
    Inner = 0,
    /// Same-ring left neighbor
    Left = 1,
    /// Same-ring right neighbor
    Right = 2,
    /// Outer-middle neighbor
    OuterMiddle = 3,
    /// Outer-right neighbor
    OuterRight = 4,
    /// Inner-left for edge cells, outer-left for corner cells
    Diagonal = 5,
}

impl NeighborSlot {
    /// All slots in traversal order.
    pub const ALL: [Self; SIDES] = [
        Self::Inner,
        Self::Left,
        Self::Right,
        Self::OuterMiddle,
        Self::OuterRight,
        Self::Diagonal,
    ];

    /// Index of this slot in a neighbor array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Compute the neighbors of `coord` in a grid of `ring_count` rings.
///
/// Slots whose neighbor does not exist are `None`: outer roles on the
/// outermost ring, the diagonal role the cell's kind does not use, and
/// every slot of a single-cell grid's center. `coord` must lie inside the
/// grid.
pub fn neighbors(coord: RingCoord, ring_count: u32) -> [Option<RingCoord>; SIDES] {
    let mut slots = [None; SIDES];
    debug_assert!(coord.ring < ring_count, "coordinate {} outside grid", coord);
    debug_assert!(coord.offset < cells_in_ring(coord.ring));

    // The center is adjacent to all of ring 1, in offset order.
    if coord.ring == 0 {
        if ring_count > 1 {
            for (slot, offset) in slots.iter_mut().zip(0..) {
                *slot = Some(RingCoord::new(1, offset));
            }
        }
        return slots;
    }

    let (r, c) = (coord.ring, coord.offset);
    let n = cells_in_ring(r);
    let side = c / r;
    let along = c % r;

    // Inner neighbor. The formula lands exactly on the inner ring size at
    // the last offset, so the modulo realizes the wrap to offset 0.
    let inner = ((r - 1) * side + along) % cells_in_ring(r - 1);
    slots[NeighborSlot::Inner.index()] = Some(RingCoord::new(r - 1, inner));
    if !coord.is_corner() {
        slots[NeighborSlot::Diagonal.index()] = Some(RingCoord::new(r - 1, (r - 1) * side + along - 1));
    }

    // Same-ring neighbors.
    slots[NeighborSlot::Left.index()] = Some(RingCoord::new(r, (c + n - 1) % n));
    slots[NeighborSlot::Right.index()] = Some(RingCoord::new(r, (c + 1) % n));

    // Outer neighbors, absent on the outermost ring.
    if r + 1 < ring_count {
        let outer = cells_in_ring(r + 1);
        let mid = (r + 1) * side + along;
        debug_assert!(mid + 1 < outer);
        slots[NeighborSlot::OuterMiddle.index()] = Some(RingCoord::new(r + 1, mid));
        slots[NeighborSlot::OuterRight.index()] = Some(RingCoord::new(r + 1, mid + 1));
        if coord.is_corner() {
            // Wraps to the last outer offset at c == 0.
            let outer_left = ((r + 1) * side + outer - 1) % outer;
            slots[NeighborSlot::Diagonal.index()] = Some(RingCoord::new(r + 1, outer_left));
        }
    }

    slots
}

/// Check whether two coordinates are adjacent.
pub fn are_neighbors(a: RingCoord, b: RingCoord, ring_count: u32) -> bool {
    neighbors(a, ring_count).contains(&Some(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::Rings;
    use proptest::prelude::*;

    fn present(coord: RingCoord, ring_count: u32) -> Vec<RingCoord> {
        neighbors(coord, ring_count).into_iter().flatten().collect()
    }

    #[test]
    fn center_alone_has_no_neighbors() {
        assert!(present(RingCoord::CENTER, 1).is_empty());
    }

    #[test]
    fn center_touches_all_of_ring_one_in_order() {
        let slots = neighbors(RingCoord::CENTER, 2);
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(*slot, Some(RingCoord::new(1, i as u32)));
        }
    }

    #[test]
    fn ring_one_to_ring_two_mapping() {
        // Corner (1, k) reaches outer cells 2k-1, 2k, 2k+1 (mod 12).
        let slots = neighbors(RingCoord::new(1, 3), 3);
        assert_eq!(slots[NeighborSlot::OuterMiddle.index()], Some(RingCoord::new(2, 6)));
        assert_eq!(slots[NeighborSlot::OuterRight.index()], Some(RingCoord::new(2, 7)));
        assert_eq!(slots[NeighborSlot::Diagonal.index()], Some(RingCoord::new(2, 5)));
    }

    #[test]
    fn outer_left_wraps_at_offset_zero() {
        let slots = neighbors(RingCoord::new(1, 0), 3);
        assert_eq!(slots[NeighborSlot::Diagonal.index()], Some(RingCoord::new(2, 11)));

        let slots = neighbors(RingCoord::new(2, 0), 4);
        assert_eq!(slots[NeighborSlot::Diagonal.index()], Some(RingCoord::new(3, 17)));
    }

    #[test]
    fn inner_wraps_at_last_offset() {
        let slots = neighbors(RingCoord::new(2, 11), 3);
        assert_eq!(slots[NeighborSlot::Inner.index()], Some(RingCoord::new(1, 0)));

        let slots = neighbors(RingCoord::new(3, 17), 4);
        assert_eq!(slots[NeighborSlot::Inner.index()], Some(RingCoord::new(2, 0)));
    }

    #[test]
    fn edge_cells_have_two_inner_neighbors() {
        let slots = neighbors(RingCoord::new(2, 3), 3);
        assert_eq!(slots[NeighborSlot::Inner.index()], Some(RingCoord::new(1, 2)));
        assert_eq!(slots[NeighborSlot::Diagonal.index()], Some(RingCoord::new(1, 1)));
    }

    #[test]
    fn neighbor_counts_by_kind() {
        let ring_count = 5;
        for coord in Rings::new(ring_count).filter(|c| c.ring > 0) {
            let slots = neighbors(coord, ring_count);
            let inner = slots
                .iter()
                .flatten()
                .filter(|c| c.ring == coord.ring - 1)
                .count();
            let same = slots
                .iter()
                .flatten()
                .filter(|c| c.ring == coord.ring)
                .count();
            let outer = slots
                .iter()
                .flatten()
                .filter(|c| c.ring == coord.ring + 1)
                .count();

            assert_eq!(inner, if coord.is_corner() { 1 } else { 2 }, "inner of {}", coord);
            assert_eq!(same, 2, "same-ring of {}", coord);
            let outermost = coord.ring == ring_count - 1;
            let expected_outer = match (outermost, coord.is_corner()) {
                (true, _) => 0,
                (false, true) => 3,
                (false, false) => 2,
            };
            assert_eq!(outer, expected_outer, "outer of {}", coord);
        }
    }

    #[test]
    fn adjacency_is_symmetric_exhaustively() {
        for ring_count in 1..=6 {
            for coord in Rings::new(ring_count) {
                for other in present(coord, ring_count) {
                    assert!(
                        are_neighbors(other, coord, ring_count),
                        "{} lists {} but not vice versa ({} rings)",
                        coord,
                        other,
                        ring_count
                    );
                }
            }
        }
    }

    #[test]
    fn neighbors_are_distinct() {
        let ring_count = 5;
        for coord in Rings::new(ring_count) {
            let mut cells = present(coord, ring_count);
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), present(coord, ring_count).len(), "duplicate neighbor of {}", coord);
        }
    }

    proptest! {
        #[test]
        fn adjacency_is_symmetric(ring_count in 1u32..9, ring in 0u32..9, seed: u32) {
            prop_assume!(ring < ring_count);
            let coord = RingCoord::new(ring, seed % cells_in_ring(ring));
            for other in neighbors(coord, ring_count).into_iter().flatten() {
                prop_assert!(are_neighbors(other, coord, ring_count));
            }
        }

        #[test]
        fn computed_offsets_in_range(ring_count in 1u32..9, ring in 0u32..9, seed: u32) {
            prop_assume!(ring < ring_count);
            let coord = RingCoord::new(ring, seed % cells_in_ring(ring));
            for other in neighbors(coord, ring_count).into_iter().flatten() {
                prop_assert!(other.ring < ring_count);
                prop_assert!(other.offset < cells_in_ring(other.ring));
            }
        }
    }
}
