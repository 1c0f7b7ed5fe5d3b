//! The board: cells and the ring they form.
//!
//! ## Key Types
//!
//! - `Cell`: one position (safety flag + per-pawn occupancy)
//! - `Board`: the ordered ring of cells, built once from a `BoardConfig`
//!
//! The two home cells (index 0 and the ring midpoint) are fixed by the board
//! topology, not by configuration.

pub mod cell;
pub mod track;

pub use cell::Cell;
pub use track::Board;
