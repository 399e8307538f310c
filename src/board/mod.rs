//! Board geometry and occupancy.
//!
//! ## Key Types
//!
//! - `Position`: A (row, col) cell coordinate
//! - `Board`: Fixed-size grid of optional units

pub mod grid;

pub use grid::{Board, Position};
