//! **pathgrid-core** — geometry primitives and the occupancy grid.
//!
//! This crate provides the value types shared across the *pathgrid*
//! workspace: integer points, half-open rectangles, and the boolean
//! occupancy [`Grid`] that the search crate runs over.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{DIRECTIONS_8, Grid};
