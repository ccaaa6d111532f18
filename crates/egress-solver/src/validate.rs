//! Start-coordinate validation.
//!
//! Shape and value checks on the raw rows happen in
//! [`CostGrid::from_rows`](egress_core::CostGrid::from_rows); the checks
//! here cover the remaining preconditions of [`escape_cost`](crate::solve::escape_cost).

use egress_core::{Cell, CostGrid, Point};

use crate::error::SolveError;

/// Check that `start` lies inside `grid` and addresses an open cell.
pub(crate) fn check_start(grid: &CostGrid, start: Point) -> Result<(), SolveError> {
    if !grid.contains(start) {
        return Err(SolveError::StartOutOfBounds {
            start,
            size: grid.size(),
        });
    }
    match grid.at(start) {
        Cell::Open(_) => Ok(()),
        _ => Err(SolveError::StartBlocked { start }),
    }
}
