use gridpad_core::{
    Board, CellEdit, CellIndex, Digit, GeometryError, MoveDirection, Position, SelectionSet,
    ValueMatrix,
};

use crate::Command;

const ANCHOR_POSITION: Position = Position::new(0, 0);

/// Interaction mode for value entry.
///
/// Only [`Mode::Normal`] has its own semantics today: digit entry overwrites
/// the whole cell in every mode. The other modes are reserved for corner
/// marks, center marks and cell coloring.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum Mode {
    /// Digits fill the cell.
    #[default]
    #[display("Normal")]
    Normal,
    /// Reserved: small digits in the cell corners.
    #[display("Corner")]
    Corner,
    /// Reserved: small digits in the cell center.
    #[display("Center")]
    Center,
    /// Reserved: cell background colors.
    #[display("Color")]
    Color,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Self; 4] = [Self::Normal, Self::Corner, Self::Center, Self::Color];
}

/// The grid state store.
///
/// An `EditorState` is a plain value. [`apply`](Self::apply) and the named
/// operations return the next state and leave `self` alone; the value matrix
/// of the previous state stays valid and shares untouched rows with the next.
///
/// Two state variables evolve independently:
///
/// - the dragging flag (`Idle ⇄ Dragging`), set by
///   [`start_selection`](Self::start_selection) and cleared by
///   [`end_selection`](Self::end_selection) or
///   [`on_click_outside`](Self::on_click_outside);
/// - the selection, rewritten by every selection command.
///
/// # Panics
///
/// Every operation taking a [`Position`] panics if the position lies outside
/// the board. Front ends derive positions from the grid geometry, so an
/// out-of-range position is an integration bug.
///
/// # Examples
///
/// ```
/// use gridpad_core::{Digit, MoveDirection, Position};
/// use gridpad_editor::EditorState;
///
/// let state = EditorState::new(9, 9).unwrap();
/// let state = state
///     .start_selection(Position::new(8, 4))
///     .end_selection()
///     .on_arrow_press(MoveDirection::Right)
///     .on_digit_press(Digit::D3);
///
/// assert_eq!(state.values()[Position::new(0, 4)], Some(Digit::D3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    board: Board,
    values: ValueMatrix,
    selection: SelectionSet,
    dragging: bool,
    toggle_held: bool,
    mode: Mode,
}

impl EditorState {
    /// Creates an empty editor for a `width × height` board.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, GeometryError> {
        Ok(Self::from_board(Board::new(width, height)?))
    }

    /// Creates an empty editor for `board`.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            values: ValueMatrix::new(board),
            selection: SelectionSet::new(),
            dragging: false,
            toggle_held: false,
            mode: Mode::Normal,
        }
    }

    /// Returns the board geometry.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the current value matrix.
    #[must_use]
    pub fn values(&self) -> &ValueMatrix {
        &self.values
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns `true` between a selection start and its end.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` while the toggle modifier is held.
    #[must_use]
    pub fn toggle_held(&self) -> bool {
        self.toggle_held
    }

    /// Returns the interaction mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` if the cell at `index` is selected.
    #[must_use]
    pub fn is_selected(&self, index: CellIndex) -> bool {
        self.selection.contains(index)
    }

    /// Returns the cell arrow navigation moves from.
    #[must_use]
    pub fn anchor(&self) -> Option<Position> {
        self.selection
            .first()
            .map(|index| self.board.position_of(index))
    }

    /// Returns the state after `command`.
    #[must_use]
    pub fn apply(&self, command: Command) -> Self {
        let mut next = self.clone();
        Transition { state: &mut next }.run(command);
        next
    }

    /// Begins a drag at `pos`.
    ///
    /// Without the toggle modifier the previous selection is dropped first.
    #[must_use]
    pub fn start_selection(&self, pos: Position) -> Self {
        self.apply(Command::StartSelection(pos))
    }

    /// Extends the selection to `pos` if a drag is in progress.
    #[must_use]
    pub fn drag_over(&self, pos: Position) -> Self {
        self.apply(Command::DragOver(pos))
    }

    /// Ends the current drag. The selection is kept.
    #[must_use]
    pub fn end_selection(&self) -> Self {
        self.apply(Command::EndSelection)
    }

    /// Paints `pos` into the selection.
    ///
    /// With the toggle modifier held this is a symmetric difference; otherwise
    /// the index is appended, duplicates included.
    #[must_use]
    pub fn select(&self, pos: Position) -> Self {
        let mut next = self.clone();
        Transition { state: &mut next }.select(pos);
        next
    }

    /// Moves the cursor to `pos`.
    ///
    /// With the toggle modifier held this is a symmetric difference; otherwise
    /// the selection is replaced by `pos` alone.
    #[must_use]
    pub fn arrow_select(&self, pos: Position) -> Self {
        let mut next = self.clone();
        Transition { state: &mut next }.arrow_select(pos);
        next
    }

    /// Drops the selection.
    #[must_use]
    pub fn clear_selection(&self) -> Self {
        self.apply(Command::ClearSelection)
    }

    /// Moves the cursor one cell in `direction`, wrapping around the edges.
    ///
    /// With nothing selected the cursor is placed at `(0, 0)` instead.
    #[must_use]
    pub fn on_arrow_press(&self, direction: MoveDirection) -> Self {
        self.apply(Command::Arrow(direction))
    }

    /// Toggles `digit` into every selected cell as one batch.
    #[must_use]
    pub fn on_digit_press(&self, digit: Digit) -> Self {
        self.apply(Command::Digit(digit))
    }

    /// Clears every selected cell as one batch.
    #[must_use]
    pub fn on_delete_press(&self) -> Self {
        self.apply(Command::Delete)
    }

    /// Drops the selection and ends any drag in progress.
    #[must_use]
    pub fn on_click_outside(&self) -> Self {
        self.apply(Command::ClickOutside)
    }

    /// Records the toggle modifier state.
    #[must_use]
    pub fn set_toggle_modifier(&self, held: bool) -> Self {
        self.apply(Command::SetToggleModifier(held))
    }

    /// Switches the interaction mode.
    #[must_use]
    pub fn set_mode(&self, mode: Mode) -> Self {
        self.apply(Command::SetMode(mode))
    }
}

/// Mutable view used while building the next state.
#[derive(Debug)]
struct Transition<'a> {
    state: &'a mut EditorState,
}

impl Transition<'_> {
    fn run(&mut self, command: Command) {
        match command {
            Command::StartSelection(pos) => self.start_selection(pos),
            Command::DragOver(pos) => self.drag_over(pos),
            Command::EndSelection => self.state.dragging = false,
            Command::SetToggleModifier(held) => self.state.toggle_held = held,
            Command::Digit(digit) => self.on_digit_press(digit),
            Command::Delete => self.on_delete_press(),
            Command::Arrow(direction) => self.on_arrow_press(direction),
            Command::ClickOutside => {
                self.state.dragging = false;
                self.state.selection.clear();
            }
            Command::ClearSelection => self.state.selection.clear(),
            Command::SetMode(mode) => self.state.mode = mode,
        }
    }

    fn start_selection(&mut self, pos: Position) {
        self.state.dragging = true;
        if !self.state.toggle_held {
            self.state.selection.clear();
        }
        self.select(pos);
    }

    fn drag_over(&mut self, pos: Position) {
        if self.state.dragging {
            self.select(pos);
        } else {
            log::trace!("ignoring drag over {pos}: no drag in progress");
        }
    }

    fn select(&mut self, pos: Position) {
        let index = self.state.board.index_of(pos);
        if self.state.toggle_held {
            self.state.selection.toggle(index);
        } else {
            self.state.selection.push(index);
        }
    }

    fn arrow_select(&mut self, pos: Position) {
        let index = self.state.board.index_of(pos);
        if self.state.toggle_held {
            self.state.selection.toggle(index);
        } else {
            self.state.selection.replace(index);
        }
    }

    fn on_arrow_press(&mut self, direction: MoveDirection) {
        let Some(current) = self.state.selection.first() else {
            self.arrow_select(ANCHOR_POSITION);
            return;
        };
        let board = self.state.board;
        let next = board.neighbor(board.position_of(current), direction);
        self.arrow_select(next);
    }

    fn on_digit_press(&mut self, digit: Digit) {
        // Every new value is decided against the pre-edit matrix.
        let values = &self.state.values;
        let edits: Vec<_> = self
            .state
            .selection
            .iter()
            .map(|index| {
                let value = (values[index] != Some(digit)).then_some(digit);
                CellEdit::new(index, value)
            })
            .collect();
        self.publish(edits);
    }

    fn on_delete_press(&mut self) {
        let edits: Vec<_> = self
            .state
            .selection
            .iter()
            .map(|index| CellEdit::new(index, None))
            .collect();
        self.publish(edits);
    }

    fn publish(&mut self, edits: Vec<CellEdit>) {
        if edits.is_empty() {
            return;
        }
        self.state.values = self.state.values.with_edits(edits);
    }
}
