//! The solve facade: validation, pipeline orchestration, result
//! extraction.

use egress_core::{CostGrid, Point};
use log::{debug, error, info};

use crate::dijkstra::shortest_paths;
use crate::error::SolveError;
use crate::expand::expand;
use crate::flood::flood_select;
use crate::validate;

/// Solve a raw maze: the lowest total cost of escaping past any border
/// cell, starting from `(x, y)`.
///
/// `rows` is a rectangular table of non-negative integers, `0` for walls,
/// positive for the cost incurred when leaving a cell. The escape cost
/// accumulates one weight per cell exited, including the border cell the
/// maze is exited through. Input validation failures and inescapable
/// mazes are reported as distinct [`SolveError`] variants.
pub fn solve(rows: &[Vec<i32>], x: i32, y: i32) -> Result<i32, SolveError> {
    let grid = CostGrid::from_rows(rows)?;
    let start = Point::new(x, y);
    validate::check_start(&grid, start)?;
    escape_cost(&grid, start)
}

/// Compute the escape cost for an already-validated grid.
///
/// Preconditions (guaranteed by [`solve`]): the grid is non-empty and
/// rectangular with no negative values, and `start` addresses an open
/// cell inside it. This function performs the (+1, +1) coordinate shift
/// and ring construction itself; pass the original grid, not an expanded
/// one.
pub fn escape_cost(grid: &CostGrid, start: Point) -> Result<i32, SolveError> {
    info!(
        "solving {}x{} maze from {start}",
        grid.width(),
        grid.height()
    );

    let expanded = expand(grid);
    let source = start.shift(1, 1);

    let graph = flood_select(&expanded, source);
    debug!(
        "flood selection found {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    if !graph.contains(source) {
        return Err(SolveError::SourceNotSelected { start });
    }

    // Ring vertices are the exits: only ring cells reached as flood
    // leaves are candidates.
    let bounds = expanded.bounds();
    let exits: Vec<Point> = graph
        .vertices()
        .iter()
        .copied()
        .filter(|&v| bounds.on_border(v))
        .collect();

    if exits.is_empty() {
        error!("no exit reachable from {start}");
        return Err(SolveError::Inescapable { start });
    }
    debug!("{} exit vertices reachable", exits.len());

    let distances = shortest_paths(&graph, source);
    let cheapest = exits
        .iter()
        .filter_map(|&v| distances.get(v))
        .min()
        .ok_or(SolveError::Inescapable { start })?;

    info!("cheapest escape from {start} costs {cheapest}");
    Ok(cheapest)
}
