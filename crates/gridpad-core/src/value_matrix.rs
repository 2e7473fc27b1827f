//! The row-major matrix of cell values.
//!
//! A [`ValueMatrix`] is never mutated once it has been handed out. Edits go
//! through [`ValueMatrix::with_edits`], which returns a new matrix. Rows that
//! the edits do not touch are shared by reference between the old and the new
//! matrix, so a renderer can compare rows by pointer to skip unchanged work.

use std::{ops::Index, sync::Arc};

use crate::{Board, CellIndex, Digit, Position};

type Row = Arc<Vec<Option<Digit>>>;

/// A single cell assignment applied by [`ValueMatrix::with_edits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEdit {
    /// Target cell.
    pub index: CellIndex,
    /// New value; `None` clears the cell.
    pub value: Option<Digit>,
}

impl CellEdit {
    /// Creates an edit that sets `index` to `value`.
    #[must_use]
    pub const fn new(index: CellIndex, value: Option<Digit>) -> Self {
        Self { index, value }
    }
}

/// An immutable `height × width` matrix of optional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueMatrix {
    board: Board,
    rows: Vec<Row>,
}

impl ValueMatrix {
    /// Creates an all-empty matrix for `board`.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let empty_row: Row = Arc::new(vec![None; usize::from(board.width())]);
        let rows = vec![empty_row; usize::from(board.height())];
        Self { board, rows }
    }

    /// Returns the board this matrix is shaped for.
    #[must_use]
    pub const fn board(&self) -> Board {
        self.board
    }

    /// Returns the value at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self[pos]
    }

    /// Returns the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not belong to this board.
    #[must_use]
    pub fn get_index(&self, index: CellIndex) -> Option<Digit> {
        self[index]
    }

    /// Returns row `y` as a slice of `width` cells.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[must_use]
    pub fn row(&self, y: u16) -> &[Option<Digit>] {
        &self.rows[usize::from(y)]
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Option<Digit>]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Returns `true` if row `y` of `self` and `other` is the same allocation.
    #[must_use]
    pub fn shares_row_with(&self, other: &Self, y: u16) -> bool {
        let y = usize::from(y);
        match (self.rows.get(y), other.rows.get(y)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns a new matrix with every edit applied.
    ///
    /// Edits are applied in order, so a later edit to the same cell wins.
    /// Untouched rows are shared with `self`; `self` is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if an edit targets an index outside the board.
    #[must_use]
    pub fn with_edits<I>(&self, edits: I) -> Self
    where
        I: IntoIterator<Item = CellEdit>,
    {
        let mut rows = self.rows.clone();
        for CellEdit { index, value } in edits {
            let pos = self.board.position_of(index);
            // Copy-on-write: the first edit to a row detaches it from `self`.
            Arc::make_mut(&mut rows[usize::from(pos.y())])[usize::from(pos.x())] = value;
        }
        Self {
            board: self.board,
            rows,
        }
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }
}

impl Index<Position> for ValueMatrix {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self[self.board.index_of(pos)]
    }
}

impl Index<CellIndex> for ValueMatrix {
    type Output = Option<Digit>;

    fn index(&self, index: CellIndex) -> &Self::Output {
        let pos = self.board.position_of(index);
        &self.rows[usize::from(pos.y())][usize::from(pos.x())]
    }
}
