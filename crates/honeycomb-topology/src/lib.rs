//! Honeycomb Ring Topology
//!
//! Coordinate math for a honeycomb tessellation laid out in concentric rings.
//!
//! # Mathematical Foundation
//!
//! Ring 0 is the single center cell. Ring r >= 1 holds exactly `6r` cells,
//! indexed by an offset counted from the ring's first corner. A cell is a
//! *corner* of its ring when its offset is divisible by the ring number;
//! corners sit at the start of one of the ring's six sides and have a
//! different neighbor pattern than edge cells.
//!
//! # Adjacency
//!
//! Every cell has up to six neighbors, derived in closed form from ring and
//! offset alone - no floating-point trigonometry. Because ring r + 1 holds
//! six more cells than ring r, the cell-to-cell mapping between adjacent
//! rings is non-uniform: corners gain an extra diagonal neighbor on the
//! outer ring, edge cells gain one on the inner ring.

mod neighbors;
mod ring;

pub use neighbors::{are_neighbors, neighbors, NeighborSlot};
pub use ring::{cells_in_ring, total_cells_through, RingCoord, Rings};

/// Number of sides of each cell, and so the maximum neighbor count.
pub const SIDES: usize = 6;

/// Neighbor slots on the inner ring (both only for edge cells).
pub const INNER_CONNECTIONS: usize = 2;

/// Neighbor slots on the same ring (always present off the center).
pub const SAME_RING_CONNECTIONS: usize = 2;

/// Neighbor slots on the outer ring (all three only for corner cells).
pub const OUTER_CONNECTIONS: usize = 3;

// A cell never holds inner-left and outer-left at once, so six slots suffice.
const _: () = assert!(INNER_CONNECTIONS + SAME_RING_CONNECTIONS + OUTER_CONNECTIONS == SIDES + 1);
