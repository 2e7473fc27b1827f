use gridpad_core::CellIndex;
use gridpad_editor::EditorState;

use crate::ui::{
    grid::{GridCell, GridViewModel, GridVisualState},
    status_line::StatusLineViewModel,
};

fn visual_state(state: &EditorState, index: CellIndex) -> GridVisualState {
    let mut vs = GridVisualState::empty();
    if state.is_selected(index) {
        vs |= GridVisualState::SELECTED;
    }
    if state.selection().first() == Some(index) {
        vs |= GridVisualState::ANCHOR;
    }
    vs
}

#[must_use]
pub(crate) fn build_grid_view_model(state: &EditorState) -> GridViewModel {
    let board = state.board();
    let values = state.values();
    let cells = board
        .positions()
        .map(|pos| {
            let index = board.index_of(pos);
            GridCell {
                value: values[index],
                visual_state: visual_state(state, index),
            }
        })
        .collect();
    GridViewModel::new(board, cells)
}

#[must_use]
pub(crate) fn build_status_line_view_model(state: &EditorState) -> StatusLineViewModel {
    StatusLineViewModel {
        selected: state.selection().distinct_len(),
        filled: state.values().filled_count(),
        cell_count: state.board().cell_count(),
        toggle_held: state.toggle_held(),
        mode: state.mode(),
    }
}
