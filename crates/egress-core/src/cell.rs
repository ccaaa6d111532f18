//! The [`Cell`] type — one weighted maze position.

/// A single maze cell.
///
/// Raw input encodes cells as integers: `0` is an impassable wall, any
/// positive value is open terrain whose cost is incurred when *leaving*
/// the cell. The expanded grid adds a third kind, [`Cell::Boundary`]: the
/// sentinel ring wrapped around the maze. Ring cells can be stepped onto
/// (that step is the escape) but carry no cost of their own and are never
/// expanded from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Impassable wall (raw value 0).
    #[default]
    Wall,
    /// Open terrain with a positive traversal cost.
    Open(i32),
    /// Sentinel ring cell of an expanded grid.
    Boundary,
}

impl Cell {
    /// Interpret a raw non-negative input value: `0` is a wall, anything
    /// positive is open at that cost.
    #[inline]
    pub const fn from_value(value: i32) -> Self {
        if value > 0 { Self::Open(value) } else { Self::Wall }
    }

    /// Whether the flood selection may step onto this cell.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        matches!(self, Self::Open(_) | Self::Boundary)
    }

    /// The cost incurred when leaving this cell, if it has one.
    #[inline]
    pub const fn cost(self) -> Option<i32> {
        match self {
            Self::Open(cost) => Some(cost),
            _ => None,
        }
    }
}
