//! Core data structures for the Gridpad board editor.
//!
//! This crate provides the plain data types that the editor state machine is
//! built from. Nothing here knows about input devices or rendering.
//!
//! # Overview
//!
//! 1. **Geometry** - How cells are addressed
//!    - [`board`]: Board dimensions, the linear [`CellIndex`] encoding
//!      (`y * width + x`) and wraparound neighbors.
//!    - [`position`]: `(x, y)` coordinates and [`MoveDirection`].
//!
//! 2. **Values** - What cells hold
//!    - [`digit`]: Single-character cell values `0`-`9`.
//!    - [`value_matrix`]: The row-major value matrix. Edits produce a new
//!      matrix that shares every untouched row with the previous one.
//!
//! 3. **Selection** - Which cells are targeted
//!    - [`selection`]: The ordered selection sequence with append, replace and
//!      symmetric-difference toggle operations.
//!
//! # Examples
//!
//! ```
//! use gridpad_core::{Board, CellEdit, Digit, Position, ValueMatrix};
//!
//! let board = Board::new(9, 9).unwrap();
//! let values = ValueMatrix::new(board);
//!
//! let index = board.index_of(Position::new(4, 2));
//! assert_eq!(index.index(), 2 * 9 + 4);
//!
//! let edited = values.with_edits([CellEdit::new(index, Some(Digit::D5))]);
//! assert_eq!(edited[Position::new(4, 2)], Some(Digit::D5));
//! // The previous matrix is never touched.
//! assert_eq!(values[Position::new(4, 2)], None);
//! ```

pub mod board;
pub mod digit;
pub mod position;
pub mod selection;
pub mod value_matrix;

pub use self::{
    board::{Board, CellIndex, GeometryError},
    digit::Digit,
    position::{MoveDirection, Position},
    selection::SelectionSet,
    value_matrix::{CellEdit, ValueMatrix},
};
