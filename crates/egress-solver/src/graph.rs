//! The region graph: vertices keyed by coordinate plus weighted edges.

use std::collections::HashSet;

use egress_core::Point;

/// An undirected edge between two vertices.
///
/// The weight is the traversal cost of whichever endpoint discovered the
/// other during flood selection, and the one stored weight applies to both
/// directions of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge {
    pub a: Point,
    pub b: Point,
    pub weight: i32,
}

impl WeightedEdge {
    /// Whether this edge connects `u` and `v` (in either orientation).
    #[inline]
    pub fn joins(&self, u: Point, v: Point) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }

    /// Whether `p` is one of the edge's endpoints.
    #[inline]
    pub fn touches(&self, p: Point) -> bool {
        self.a == p || self.b == p
    }
}

/// The connected region reachable from a solve's start cell, as a graph.
///
/// Holds a vertex set (with discovery order) and an edge list; adjacency
/// is not precomputed here, the shortest-path engine derives its own.
/// Built once per solve by [`flood_select`](crate::flood_select) and
/// immutable afterward.
#[derive(Debug, Clone, Default)]
pub struct RegionGraph {
    vertices: Vec<Point>,
    members: HashSet<Point>,
    edges: Vec<WeightedEdge>,
}

impl RegionGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a vertex. Returns `false` if it was already present.
    pub(crate) fn insert_vertex(&mut self, p: Point) -> bool {
        if !self.members.insert(p) {
            return false;
        }
        self.vertices.push(p);
        true
    }

    pub(crate) fn insert_edge(&mut self, a: Point, b: Point, weight: i32) {
        self.edges.push(WeightedEdge { a, b, weight });
    }

    /// Whether `p` has been selected as a vertex.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.members.contains(&p)
    }

    /// The vertices in discovery order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The discovery edges.
    #[inline]
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
