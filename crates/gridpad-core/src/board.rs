//! Board geometry and linear cell indices.
//!
//! A [`Board`] fixes the width and height of the coordinate space. Every cell
//! has a [`CellIndex`] computed as `y * width + x`, and decoding uses
//! `(index % width, index / width)`. The two conversions are inverse
//! bijections between the in-bounds positions and `0..width * height`.
//!
//! Out-of-range positions and indices are programming errors: the conversion
//! methods panic instead of clamping so integration bugs surface early.

use std::{
    fmt::{self, Display},
    num::NonZero,
};

use crate::{MoveDirection, Position};

/// Errors returned when constructing a board with invalid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeometryError {
    /// The requested width was zero.
    #[display("board width must be positive")]
    ZeroWidth,
    /// The requested height was zero.
    #[display("board height must be positive")]
    ZeroHeight,
}

/// A linear cell index (`y * width + x`) on a specific board.
///
/// Indices are produced by [`Board::index_of`] and [`Board::cell_index`], both
/// of which check the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// The fixed dimensions of an editable grid.
///
/// # Examples
///
/// ```
/// use gridpad_core::{Board, MoveDirection, Position};
///
/// let board = Board::new(4, 3).unwrap();
/// assert_eq!(board.cell_count(), 12);
///
/// let index = board.index_of(Position::new(1, 2));
/// assert_eq!(index.index(), 9);
/// assert_eq!(board.position_of(index), Position::new(1, 2));
///
/// // Navigation wraps around the edges.
/// assert_eq!(
///     board.neighbor(Position::new(3, 0), MoveDirection::Right),
///     Position::new(0, 0)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    width: NonZero<u16>,
    height: NonZero<u16>,
}

impl Board {
    /// Creates a board of `width` columns and `height` rows.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroWidth`] or [`GeometryError::ZeroHeight`]
    /// when a dimension is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, GeometryError> {
        let width = NonZero::new(width).ok_or(GeometryError::ZeroWidth)?;
        let height = NonZero::new(height).ok_or(GeometryError::ZeroHeight)?;
        Ok(Self { width, height })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(self) -> u16 {
        self.width.get()
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(self) -> u16 {
        self.height.get()
    }

    /// Returns `width * height`.
    #[must_use]
    pub fn cell_count(self) -> usize {
        usize::from(self.width()) * usize::from(self.height())
    }

    /// Returns `true` if `pos` lies on this board.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x() < self.width() && pos.y() < self.height()
    }

    /// Encodes `pos` as `y * width + x`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn index_of(self, pos: Position) -> CellIndex {
        assert!(
            self.contains(pos),
            "position {pos} is out of range for a {}x{} board",
            self.width(),
            self.height()
        );
        CellIndex(usize::from(pos.y()) * usize::from(self.width()) + usize::from(pos.x()))
    }

    /// Checks a raw linear index against this board.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width * height`.
    #[must_use]
    pub fn cell_index(self, index: usize) -> CellIndex {
        assert!(
            index < self.cell_count(),
            "cell index {index} is out of range for a {}x{} board",
            self.width(),
            self.height()
        );
        CellIndex(index)
    }

    /// Decodes `index` as `(index % width, index / width)`.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not belong to this board.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn position_of(self, index: CellIndex) -> Position {
        let index = self.cell_index(index.0).0;
        let width = usize::from(self.width());
        // Both components are bounded by the u16 dimensions.
        Position::new((index % width) as u16, (index / width) as u16)
    }

    /// Iterates over every position in row-major order.
    pub fn positions(self) -> impl DoubleEndedIterator<Item = Position> {
        let width = self.width();
        (0..self.height()).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Returns the neighbor of `pos` in `direction`, wrapping around the edges.
    ///
    /// | Direction | Result                              |
    /// |-----------|-------------------------------------|
    /// | Up        | `y > 0 ? y - 1 : height - 1`        |
    /// | Down      | `(y + 1) % height`                  |
    /// | Left      | `x > 0 ? x - 1 : width - 1`         |
    /// | Right     | `(x + 1) % width`                   |
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn neighbor(self, pos: Position, direction: MoveDirection) -> Position {
        assert!(
            self.contains(pos),
            "position {pos} is out of range for a {}x{} board",
            self.width(),
            self.height()
        );
        let (x, y) = (pos.x(), pos.y());
        match direction {
            MoveDirection::Up => Position::new(x, if y > 0 { y - 1 } else { self.height() - 1 }),
            MoveDirection::Down => Position::new(x, (y + 1) % self.height()),
            MoveDirection::Left => Position::new(if x > 0 { x - 1 } else { self.width() - 1 }, y),
            MoveDirection::Right => Position::new((x + 1) % self.width(), y),
        }
    }
}
