//! The [`CostGrid`] type — an owned rectangular grid of [`Cell`]s.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// An owned 2D grid of [`Cell`]s addressed by [`Point`] (x = column,
/// y = row).
///
/// The solve pipeline never mutates a grid after construction, so each
/// solve can run on its own copy with no synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl CostGrid {
    /// Create a new grid of the given dimensions, filled with walls.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
        }
    }

    /// Build a grid from raw input rows, validating as it goes.
    ///
    /// Checks, in order: the grid is non-empty, every row has the same
    /// length as the first, and no cell value is negative. Value `0`
    /// becomes [`Cell::Wall`], positive values become [`Cell::Open`].
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, GridError> {
        if rows.is_empty() || rows.iter().all(|row| row.is_empty()) {
            return Err(GridError::Empty);
        }
        let width = rows[0].len();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged { row: y });
            }
        }

        let mut grid = Self::new(width as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                if value < 0 {
                    return Err(GridError::Negative { pos, value });
                }
                grid.set(pos, Cell::from_value(value));
            }
        }
        Ok(grid)
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Read the cell at `p`. Out-of-bounds reads yield [`Cell::Wall`].
    pub fn at(&self, p: Point) -> Cell {
        match self.index(p) {
            Some(i) => self.cells[i],
            None => Cell::Wall,
        }
    }

    /// Set the cell at `p`. No-op if `p` is outside bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when building a grid from raw rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input has no rows, or every row is empty.
    Empty,
    /// A row's length differs from the first row's.
    Ragged { row: usize },
    /// A cell holds a negative value.
    Negative { pos: Point, value: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze has no cells"),
            Self::Ragged { row } => {
                write!(f, "maze is not rectangular: row {row} differs in length")
            }
            Self::Negative { pos, value } => {
                write!(f, "maze cell {pos} holds negative value {value}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_cells() {
        let grid = CostGrid::from_rows(&[vec![0, 2], vec![3, 0]]).unwrap();
        assert_eq!(grid.size(), Point::new(2, 2));
        assert_eq!(grid.at(Point::new(0, 0)), Cell::Wall);
        assert_eq!(grid.at(Point::new(1, 0)), Cell::Open(2));
        assert_eq!(grid.at(Point::new(0, 1)), Cell::Open(3));
        assert_eq!(grid.at(Point::new(1, 1)), Cell::Wall);
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert_eq!(CostGrid::from_rows(&[]), Err(GridError::Empty));
        assert_eq!(
            CostGrid::from_rows(&[vec![], vec![]]),
            Err(GridError::Empty)
        );
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows = vec![vec![1, 2], vec![1, 2, 3]];
        assert_eq!(CostGrid::from_rows(&rows), Err(GridError::Ragged { row: 1 }));
    }

    #[test]
    fn from_rows_rejects_negative() {
        let rows = vec![vec![1, 2], vec![-5, 3]];
        assert_eq!(
            CostGrid::from_rows(&rows),
            Err(GridError::Negative {
                pos: Point::new(0, 1),
                value: -5
            })
        );
    }

    #[test]
    fn ragged_reported_before_negative() {
        // Shape checks run over the whole input before any value check.
        let rows = vec![vec![-1, 2], vec![1]];
        assert_eq!(CostGrid::from_rows(&rows), Err(GridError::Ragged { row: 1 }));
    }

    #[test]
    fn out_of_bounds_reads_are_walls() {
        let grid = CostGrid::from_rows(&[vec![5]]).unwrap();
        assert_eq!(grid.at(Point::new(-1, 0)), Cell::Wall);
        assert_eq!(grid.at(Point::new(0, 1)), Cell::Wall);
    }

    #[test]
    fn set_out_of_bounds_is_noop() {
        let mut grid = CostGrid::new(1, 1);
        grid.set(Point::new(5, 5), Cell::Open(1));
        assert_eq!(grid.at(Point::new(0, 0)), Cell::Wall);
    }
}
