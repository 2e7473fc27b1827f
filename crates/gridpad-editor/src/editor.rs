use gridpad_core::{Board, GeometryError};

use crate::{Command, EditorState, Normalizer, RawEvent};

/// An [`EditorState`] paired with the [`Normalizer`] that feeds it.
///
/// Front ends own one `GridEditor` for the lifetime of the widget, push raw
/// events into it and render [`state`](Self::state) afterwards.
#[derive(Debug, Clone)]
pub struct GridEditor {
    state: EditorState,
    normalizer: Normalizer,
}

impl GridEditor {
    /// Creates an editor for a `width × height` board.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, GeometryError> {
        Ok(Self::from_board(Board::new(width, height)?))
    }

    /// Creates an editor for `board`.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            state: EditorState::from_board(board),
            normalizer: Normalizer::new(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Normalizes `event` and applies the resulting command, if any.
    ///
    /// Returns the applied command.
    pub fn handle_event(&mut self, event: RawEvent) -> Option<Command> {
        let command = self.normalizer.normalize(event)?;
        self.apply(command);
        Some(command)
    }

    /// Applies `command` directly, bypassing the normalizer.
    pub fn apply(&mut self, command: Command) {
        log::debug!("apply {command:?}");
        self.state = self.state.apply(command);
    }
}
