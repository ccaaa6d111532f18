//! Flood selection: building the region graph from an expanded grid.

use egress_core::{CostGrid, Point};
use log::trace;

use crate::graph::RegionGraph;

/// Work items pop in +x, −x, +y, −y order, so neighbors are pushed
/// reversed.
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Select the connected region reachable from `source` as a graph.
///
/// Expects an [expanded](crate::expand) grid and an expanded source
/// coordinate; on a bare grid the sentinel ring is missing and no exit
/// can ever be found.
///
/// Discovery is depth-first over a work list of `(previous, candidate)`
/// pairs. A candidate is rejected if it is out of bounds, if `previous`
/// lies on the sentinel ring (ring cells are leaves: once reached, the
/// walk never continues from them), if it was already selected, or if its
/// cell is not traversable. Each accepted vertex therefore joins through
/// exactly one edge, weighted by the cost of the cell being left, and the
/// result is a spanning tree of the reachable region with ring cells as
/// leaves.
pub fn flood_select(grid: &CostGrid, source: Point) -> RegionGraph {
    let bounds = grid.bounds();
    let mut graph = RegionGraph::new();
    let mut work: Vec<(Option<Point>, Point)> = vec![(None, source)];

    while let Some((previous, candidate)) = work.pop() {
        if !bounds.contains(candidate) {
            continue;
        }
        if let Some(prev) = previous {
            if bounds.on_border(prev) {
                continue;
            }
        }
        if graph.contains(candidate) || !grid.at(candidate).is_traversable() {
            continue;
        }

        graph.insert_vertex(candidate);
        trace!("selected vertex {candidate}");

        if let Some(prev) = previous {
            if let Some(weight) = grid.at(prev).cost() {
                graph.insert_edge(prev, candidate, weight);
                trace!("selected edge {prev} - {candidate}, weight {weight}");
            }
        }

        for d in DIRS {
            work.push((Some(candidate), candidate + d));
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand;
    use egress_core::CostGrid;

    fn region_of(rows: &[Vec<i32>], x: i32, y: i32) -> RegionGraph {
        let grid = CostGrid::from_rows(rows).unwrap();
        flood_select(&expand(&grid), Point::new(x + 1, y + 1))
    }

    #[test]
    fn spanning_tree_even_with_cycles() {
        // A fully open block has many grid cycles; the discovery rule
        // still links each vertex exactly once.
        let graph = region_of(&[vec![1, 1, 1], vec![1, 1, 1], vec![1, 1, 1]], 1, 1);
        assert_eq!(graph.edge_count(), graph.vertex_count() - 1);
    }

    #[test]
    fn ring_vertices_are_leaves() {
        let grid = CostGrid::from_rows(&[vec![1, 1], vec![1, 1]]).unwrap();
        let expanded = expand(&grid);
        let graph = flood_select(&expanded, Point::new(1, 1));
        let bounds = expanded.bounds();
        for &v in graph.vertices() {
            if !bounds.on_border(v) {
                continue;
            }
            let degree = graph.edges().iter().filter(|e| e.touches(v)).count();
            assert_eq!(degree, 1, "ring vertex {v} must join exactly once");
        }
    }

    #[test]
    fn walls_are_not_selected() {
        let graph = region_of(&[vec![1, 0, 1]], 0, 0);
        // The wall splits the row; only the left cell and its adjacent
        // ring cells are selected.
        assert!(graph.contains(Point::new(1, 1)));
        assert!(!graph.contains(Point::new(2, 1)));
        assert!(!graph.contains(Point::new(3, 1)));
    }

    #[test]
    fn isolated_source_selects_only_itself() {
        let graph = region_of(&[vec![0, 0, 0], vec![0, 9, 0], vec![0, 0, 0]], 1, 1);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.contains(Point::new(2, 2)));
    }

    #[test]
    fn edge_weight_is_the_cost_of_the_cell_left() {
        let graph = region_of(&[vec![5, 7]], 0, 0);
        // (1,1) discovers (2,1): the edge carries 5, the discoverer's cost.
        let e = graph
            .edges()
            .iter()
            .find(|e| e.joins(Point::new(1, 1), Point::new(2, 1)))
            .unwrap();
        assert_eq!(e.weight, 5);
        // (2,1) discovers its own ring exits at its cost of 7.
        let exit = graph
            .edges()
            .iter()
            .find(|e| e.joins(Point::new(2, 1), Point::new(3, 1)))
            .unwrap();
        assert_eq!(exit.weight, 7);
    }

    #[test]
    fn discovery_order_is_deterministic() {
        let rows = vec![vec![1, 1, 1], vec![1, 1, 1]];
        let a = region_of(&rows, 1, 0);
        let b = region_of(&rows, 1, 0);
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn depth_first_explores_positive_x_first() {
        // From the source, the +x neighbor is discovered before any other;
        // its subtree is exhausted before the −x sibling is examined.
        let graph = region_of(&[vec![1, 1, 1]], 1, 0);
        let vs = graph.vertices();
        assert_eq!(vs[0], Point::new(2, 1)); // source
        assert_eq!(vs[1], Point::new(3, 1)); // +x neighbor
    }
}
