//! The ordered set of selected cells.

use std::{collections::HashSet, slice};

use crate::CellIndex;

/// A sequence of selected cell indices.
///
/// The sequence keeps insertion order. [`push`](Self::push) may introduce
/// duplicates (a drag that passes over the same cell twice paints it twice);
/// membership tests treat the sequence as a set. The first element is the
/// anchor that arrow-key navigation moves from.
///
/// # Examples
///
/// ```
/// use gridpad_core::{Board, SelectionSet};
///
/// let board = Board::new(9, 9).unwrap();
/// let mut selection = SelectionSet::new();
/// selection.push(board.cell_index(3));
/// selection.toggle(board.cell_index(5));
/// assert_eq!(selection.len(), 2);
///
/// selection.toggle(board.cell_index(3));
/// assert!(!selection.contains(board.cell_index(3)));
/// assert_eq!(selection.first(), Some(board.cell_index(5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: Vec<CellIndex>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the length of the raw sequence, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of distinct selected cells.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.indices.iter().collect::<HashSet<_>>().len()
    }

    /// Returns `true` if `index` is selected.
    #[must_use]
    pub fn contains(&self, index: CellIndex) -> bool {
        self.indices.contains(&index)
    }

    /// Returns the anchor (first selected index).
    #[must_use]
    pub fn first(&self) -> Option<CellIndex> {
        self.indices.first().copied()
    }

    /// Iterates over the raw sequence in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = CellIndex> + '_ {
        self.indices.iter().copied()
    }

    /// Appends `index`, even if it is already selected.
    pub fn push(&mut self, index: CellIndex) {
        self.indices.push(index);
    }

    /// Replaces the whole selection with `index`.
    pub fn replace(&mut self, index: CellIndex) {
        self.indices.clear();
        self.indices.push(index);
    }

    /// Takes the symmetric difference with `{index}`.
    ///
    /// If `index` is selected, every occurrence of it is removed; otherwise it
    /// is appended. Either way the result holds no duplicates, keeping the
    /// first occurrence of each remaining index.
    pub fn toggle(&mut self, index: CellIndex) {
        let present = self.contains(index);
        let mut seen = HashSet::with_capacity(self.indices.len());
        self.indices.retain(|&i| i != index && seen.insert(i));
        if !present {
            self.indices.push(index);
        }
    }

    /// Removes every index.
    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = CellIndex;
    type IntoIter = std::iter::Copied<slice::Iter<'a, CellIndex>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter().copied()
    }
}

impl FromIterator<CellIndex> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = CellIndex>>(iter: T) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}
