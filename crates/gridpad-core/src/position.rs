//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a board.
///
/// `x` is the column (growing to the right) and `y` is the row (growing
/// downward). A position carries no board dimensions; use
/// [`Board::contains`](crate::Board::contains) to check it against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u16,
    y: u16,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> u16 {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> u16 {
        self.y
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An arrow-key navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum MoveDirection {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl MoveDirection {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}
