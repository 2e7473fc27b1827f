use gridpad_core::{Digit, MoveDirection, Position};

use crate::Mode;

/// A semantic input command accepted by [`EditorState::apply`].
///
/// [`EditorState::apply`]: crate::EditorState::apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Command {
    /// Pointer pressed on a cell.
    StartSelection(Position),
    /// Pointer entered a cell.
    DragOver(Position),
    /// Pointer released.
    EndSelection,
    /// Toggle modifier pressed or released.
    SetToggleModifier(bool),
    /// Digit key completed a press-release cycle.
    Digit(Digit),
    /// Backspace or Delete completed a press-release cycle.
    Delete,
    /// Arrow key completed a press-release cycle.
    Arrow(MoveDirection),
    /// Pointer pressed outside the grid.
    ClickOutside,
    /// Drop the selection without ending a drag.
    ClearSelection,
    /// Switch the interaction mode.
    SetMode(Mode),
}
