//! Single-source shortest paths over a region graph.

use std::collections::{BinaryHeap, HashMap};

use egress_core::Point;
use log::trace;

use crate::graph::RegionGraph;

/// Sentinel distance meaning "not reached".
const UNREACHABLE: i32 = i32::MAX;

/// Reference into the vertex arena, ordered by distance for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct QueueRef {
    idx: usize,
    dist: i32,
}

impl Ord for QueueRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest distance.
        other.dist.cmp(&self.dist)
    }
}

impl PartialOrd for QueueRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances from a solve's source vertex, produced by
/// [`shortest_paths`].
///
/// Vertices the search never reached are absent.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    index: HashMap<Point, usize>,
    dist: Vec<i32>,
}

impl DistanceMap {
    /// The shortest known distance from the source to `p`, if reached.
    pub fn get(&self, p: Point) -> Option<i32> {
        let &i = self.index.get(&p)?;
        let d = self.dist[i];
        if d == UNREACHABLE { None } else { Some(d) }
    }
}

/// Compute shortest distances from `source` to every reachable vertex.
///
/// Edges are undirected and carry one weight each (the discoverer's cell
/// cost); that weight is applied in both directions of travel. Classic
/// label-setting relaxation: pop the unsettled vertex with minimum known
/// distance, settle it, relax its incident edges, re-queue improvements.
/// Stale heap entries are skipped on pop. A source not present in the
/// graph yields an empty map.
pub fn shortest_paths(graph: &RegionGraph, source: Point) -> DistanceMap {
    let n = graph.vertex_count();
    let mut index = HashMap::with_capacity(n);
    for (i, &p) in graph.vertices().iter().enumerate() {
        index.insert(p, i);
    }

    // The graph stores a bare edge list; the search derives its own
    // adjacency, entering each edge under both endpoints.
    let mut adjacency: Vec<Vec<(usize, i32)>> = vec![Vec::new(); n];
    for edge in graph.edges() {
        let (Some(&ai), Some(&bi)) = (index.get(&edge.a), index.get(&edge.b)) else {
            continue;
        };
        adjacency[ai].push((bi, edge.weight));
        adjacency[bi].push((ai, edge.weight));
    }

    let mut dist = vec![UNREACHABLE; n];
    let mut settled = vec![false; n];
    let mut open: BinaryHeap<QueueRef> = BinaryHeap::new();

    if let Some(&si) = index.get(&source) {
        dist[si] = 0;
        open.push(QueueRef { idx: si, dist: 0 });
    }

    while let Some(current) = open.pop() {
        let ci = current.idx;
        if settled[ci] {
            continue;
        }
        settled[ci] = true;
        trace!(
            "settled vertex {} at distance {}",
            graph.vertices()[ci],
            dist[ci]
        );

        for &(ni, weight) in &adjacency[ci] {
            if settled[ni] {
                continue;
            }
            let tentative = dist[ci] + weight;
            if tentative < dist[ni] {
                dist[ni] = tentative;
                open.push(QueueRef {
                    idx: ni,
                    dist: tentative,
                });
            }
        }
    }

    DistanceMap { index, dist }
}
