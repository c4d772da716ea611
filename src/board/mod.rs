//! Bordered board model.
//!
//! The board owns the grid and nothing else:
//! - Bounded (interior) and buffered (with stub ring) coordinate access
//! - Placement primitives that enforce the occupancy rules
//! - Neighbor queries
//!
//! It never evaluates rules; the `rules` module reads it.

pub mod grid;
pub mod neighbors;

pub use grid::Board;
pub use neighbors::{Direction, Neighbors};
