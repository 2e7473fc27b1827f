use eframe::egui::{Align2, Color32, FontId, Image, Painter, Rect, Stroke, StrokeKind, Ui};
use gridpad_core::{Board, Digit, Position};

use crate::ui::{grid_theme::GridPalette, layout::GridLayout};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const ANCHOR = 0b0000_0010;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) value: Option<Digit>,
    pub(crate) visual_state: GridVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    board: Board,
    cells: Vec<GridCell>,
}

impl GridViewModel {
    /// Creates a view model from row-major `cells`.
    #[must_use]
    pub(crate) fn new(board: Board, cells: Vec<GridCell>) -> Self {
        assert_eq!(
            cells.len(),
            board.cell_count(),
            "view model needs one cell per board position"
        );
        Self { board, cells }
    }

    #[must_use]
    pub(crate) fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub(crate) fn cell(&self, pos: Position) -> &GridCell {
        &self.cells[self.board.index_of(pos).index()]
    }
}

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.02;
const OUTER_BORDER_WIDTH_RATIO: f32 = 3.0;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 3.0;
const DIGIT_FONT_RATIO: f32 = 0.7;

fn base_border_width(cell_size: f32) -> f32 {
    f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0)
}

impl GridVisualState {
    fn cell_fill_color(self, palette: &GridPalette) -> Color32 {
        if self.contains(Self::ANCHOR) {
            return palette.cell_bg_anchor;
        }
        if self.contains(Self::SELECTED) {
            return palette.cell_bg_selected;
        }
        palette.cell_bg_default
    }

    fn cell_border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let base_width = base_border_width(cell_size);
        if self.contains(Self::SELECTED) {
            Stroke::new(base_width * SELECTED_BORDER_WIDTH_RATIO, palette.border_selected)
        } else {
            Stroke::new(base_width, palette.border_cell)
        }
    }
}

/// Paints the background image, cells and values.
pub(crate) fn show(
    ui: &Ui,
    vm: &GridViewModel,
    layout: &GridLayout,
    background: &str,
    palette: &GridPalette,
) {
    let cell_size = layout.cell_size();
    let rect = layout.rect();

    Image::from_uri(background).paint_at(ui, rect);

    let painter = ui.painter_at(rect);
    let font = FontId::proportional(cell_size * DIGIT_FONT_RATIO);

    for pos in vm.board().positions() {
        let cell = vm.cell(pos);
        let cell_rect = layout.cell_rect(pos);

        painter.rect_filled(cell_rect, 0.0, cell.visual_state.cell_fill_color(palette));
        if let Some(digit) = cell.value {
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                digit.as_str(),
                font.clone(),
                palette.text_value,
            );
        }
    }

    // Selected borders go on top so thin neighbours do not cover them.
    for selected in [false, true] {
        for pos in vm.board().positions() {
            let vs = vm.cell(pos).visual_state;
            if vs.contains(GridVisualState::SELECTED) == selected {
                painter.rect_stroke(
                    layout.cell_rect(pos),
                    0.0,
                    vs.cell_border(palette, cell_size),
                    StrokeKind::Inside,
                );
            }
        }
    }

    draw_outer_border(&painter, rect, cell_size, palette);
}

fn draw_outer_border(painter: &Painter, rect: Rect, cell_size: f32, palette: &GridPalette) {
    let stroke = Stroke::new(
        base_border_width(cell_size) * OUTER_BORDER_WIDTH_RATIO,
        palette.border_outer,
    );
    painter.rect_stroke(rect, 0.0, stroke, StrokeKind::Inside);
}
