use std::fmt;

use egress_core::{GridError, Point};

/// Errors surfaced by the solve pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The raw input rows failed shape or value validation.
    Grid(GridError),
    /// The start coordinate lies outside the grid.
    StartOutOfBounds { start: Point, size: Point },
    /// The start coordinate addresses a wall.
    StartBlocked { start: Point },
    /// No boundary cell is reachable from the start. Deterministic for a
    /// given input, so retrying cannot help.
    Inescapable { start: Point },
    /// The start vertex is missing from the constructed region graph.
    /// Indicates a defect in the graph builder, not bad input.
    SourceNotSelected { start: Point },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "{err}"),
            Self::StartOutOfBounds { start, size } => {
                write!(
                    f,
                    "start {start} is outside the {}x{} maze",
                    size.x, size.y
                )
            }
            Self::StartBlocked { start } => {
                write!(f, "start {start} addresses an impassable cell")
            }
            Self::Inescapable { start } => {
                write!(f, "maze has no exit reachable from {start}")
            }
            Self::SourceNotSelected { start } => {
                write!(
                    f,
                    "region graph is missing the start vertex {start} (builder defect)"
                )
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl From<GridError> for SolveError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
