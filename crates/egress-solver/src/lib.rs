//! Minimum-cost escape routes through weighted mazes.
//!
//! Given a rectangular grid of non-negative integers (0 = wall, positive =
//! traversal cost incurred when leaving the cell) and a start coordinate,
//! [`solve`] returns the lowest total cost of reaching any cell on the
//! grid's outer boundary, or an error if no exit is reachable.
//!
//! The pipeline, in order:
//!
//! - **Expansion** ([`expand`]) — wrap the grid in a sentinel
//!   [`Cell::Boundary`](egress_core::Cell) ring representing "outside".
//! - **Flood selection** ([`flood_select`]) — depth-first discovery of the
//!   region reachable from the start, building a [`RegionGraph`] with one
//!   discovery edge per vertex (a spanning tree of the region, with ring
//!   cells as leaves).
//! - **Shortest paths** ([`shortest_paths`]) — single-source Dijkstra over
//!   the region graph, yielding a [`DistanceMap`].
//! - **Extraction** — the minimum distance across the ring vertices is the
//!   escape cost.
//!
//! Each solve owns its grid, graph, and distance map exclusively;
//! independent solves can run in parallel without locking.

mod dijkstra;
mod error;
mod expand;
mod flood;
mod graph;
mod solve;
mod validate;

pub use dijkstra::{DistanceMap, shortest_paths};
pub use error::SolveError;
pub use expand::expand;
pub use flood::flood_select;
pub use graph::{RegionGraph, WeightedEdge};
pub use solve::{escape_cost, solve};
