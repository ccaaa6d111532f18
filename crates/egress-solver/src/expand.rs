//! Grid expansion: wrapping a maze in its sentinel boundary ring.

use egress_core::{Cell, CostGrid, Point};

/// Wrap `grid` with one ring of [`Cell::Boundary`] cells.
///
/// The result is two cells wider and taller; the original cells are copied
/// into the interior at offset (+1, +1). Reaching a ring cell means having
/// exited the maze, so ring cells carry no cost of their own. The four
/// ring corners are stored as [`Cell::Wall`]: they are diagonal to every
/// real cell and must never be selected.
///
/// `grid` itself is never mutated. The pipeline expands exactly once per
/// solve.
pub fn expand(grid: &CostGrid) -> CostGrid {
    let mut out = CostGrid::new(grid.width() + 2, grid.height() + 2);
    let bounds = out.bounds();
    let last = Point::new(bounds.max.x - 1, bounds.max.y - 1);

    for p in bounds.iter() {
        let corner = (p.x == 0 || p.x == last.x) && (p.y == 0 || p.y == last.y);
        let cell = if corner {
            Cell::Wall
        } else if bounds.on_border(p) {
            Cell::Boundary
        } else {
            grid.at(p.shift(-1, -1))
        };
        out.set(p, cell);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_by_one_ring() {
        let grid = CostGrid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let expanded = expand(&grid);
        assert_eq!(expanded.size(), Point::new(4, 4));
    }

    #[test]
    fn interior_is_copied_at_offset() {
        let grid = CostGrid::from_rows(&[vec![1, 2], vec![0, 4]]).unwrap();
        let expanded = expand(&grid);
        assert_eq!(expanded.at(Point::new(1, 1)), Cell::Open(1));
        assert_eq!(expanded.at(Point::new(2, 1)), Cell::Open(2));
        assert_eq!(expanded.at(Point::new(1, 2)), Cell::Wall);
        assert_eq!(expanded.at(Point::new(2, 2)), Cell::Open(4));
    }

    #[test]
    fn ring_is_boundary_except_corners() {
        let grid = CostGrid::from_rows(&[vec![1]]).unwrap();
        let expanded = expand(&grid);
        let bounds = expanded.bounds();
        for p in bounds.iter() {
            if !bounds.on_border(p) {
                continue;
            }
            let corner = (p.x == 0 || p.x == 2) && (p.y == 0 || p.y == 2);
            if corner {
                assert_eq!(expanded.at(p), Cell::Wall, "corner {p}");
            } else {
                assert_eq!(expanded.at(p), Cell::Boundary, "ring {p}");
            }
        }
    }

    #[test]
    fn input_grid_is_untouched() {
        let grid = CostGrid::from_rows(&[vec![7, 8]]).unwrap();
        let copy = grid.clone();
        let _ = expand(&grid);
        assert_eq!(grid, copy);
    }

    #[test]
    fn expanding_twice_grows_twice() {
        // The pipeline must call this exactly once; nesting is visible in
        // the dimensions.
        let grid = CostGrid::from_rows(&[vec![1]]).unwrap();
        let once = expand(&grid);
        let twice = expand(&once);
        assert_eq!(once.size(), Point::new(3, 3));
        assert_eq!(twice.size(), Point::new(5, 5));
    }
}
