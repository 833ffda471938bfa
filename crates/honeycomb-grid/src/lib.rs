//! Honeycomb Grid
//!
//! Owns the cells of one honeycomb tessellation. Cells live in a flat arena
//! indexed by [`CellId`]; neighbor links and the by-letter index are plain
//! arena indices, so nothing in the grid owns anything twice.
//!
//! # Construction
//!
//! A grid is built from ring text: line r holds the concatenated letters of
//! ring r, one character per cell, starting with the single-letter center
//! line. Construction validates the geometry (line r must hold exactly
//! `cells_in_ring(r)` characters), allocates every cell, buckets it by
//! letter in discovery order, and then wires all neighbor slots through
//! `honeycomb-topology`. After that the grid is immutable: searches only
//! ever read it.

mod cell;
mod error;
mod honeycomb;

pub use cell::{Cell, CellId};
pub use error::{GridError, Result};
pub use honeycomb::Honeycomb;
