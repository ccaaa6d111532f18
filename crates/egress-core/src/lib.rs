//! **egress-core** — foundational types for the egress maze solver.
//!
//! This crate provides the types shared across the *egress* workspace:
//! geometry primitives, weighted cost cells, and the owned rectangular
//! grid they live in.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::{CostGrid, GridError};
