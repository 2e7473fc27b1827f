use eframe::egui::{Pos2, Rect, Vec2};
use gridpad_core::{Board, Position};
use gridpad_editor::PointerTarget;

/// Screen placement of the grid for one frame.
///
/// Cells are laid out edge to edge, so every point inside [`rect`](Self::rect)
/// except the far edges belongs to exactly one cell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridLayout {
    board: Board,
    rect: Rect,
    cell_size: f32,
}

impl GridLayout {
    /// Returns the grid size for `board` at `cell_size`.
    #[must_use]
    pub(crate) fn size(board: Board, cell_size: f32) -> Vec2 {
        Vec2::new(
            f32::from(board.width()) * cell_size,
            f32::from(board.height()) * cell_size,
        )
    }

    #[must_use]
    pub(crate) fn new(board: Board, min: Pos2, cell_size: f32) -> Self {
        let rect = Rect::from_min_size(min, Self::size(board, cell_size));
        Self {
            board,
            rect,
            cell_size,
        }
    }

    #[must_use]
    pub(crate) fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub(crate) fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[must_use]
    pub(crate) fn cell_rect(&self, pos: Position) -> Rect {
        let min = self.rect.min
            + Vec2::new(
                f32::from(pos.x()) * self.cell_size,
                f32::from(pos.y()) * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Returns the cell under `point`, if any.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn cell_at(&self, point: Pos2) -> Option<Position> {
        let offset = point - self.rect.min;
        let x = (offset.x / self.cell_size).floor();
        let y = (offset.y / self.cell_size).floor();
        let in_range = |v: f32, len: u16| v >= 0.0 && v < f32::from(len);
        if !(in_range(x, self.board.width()) && in_range(y, self.board.height())) {
            return None;
        }
        // Both values are non-negative and below a u16 dimension.
        Some(Position::new(x as u16, y as u16))
    }

    /// Classifies a pointer press at `point`.
    #[must_use]
    pub(crate) fn hit_test(&self, point: Pos2) -> PointerTarget {
        if !self.rect.contains(point) {
            return PointerTarget::Outside;
        }
        self.cell_at(point)
            .map_or(PointerTarget::GridBackground, PointerTarget::Cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout::new(Board::new(3, 2).unwrap(), Pos2::new(10.0, 20.0), 64.0)
    }

    #[test]
    fn size_scales_with_board() {
        let layout = layout();
        assert_eq!(layout.rect().size(), Vec2::new(192.0, 128.0));
        assert_eq!(layout.rect().min, Pos2::new(10.0, 20.0));
    }

    #[test]
    fn cell_rects_tile_the_grid() {
        let layout = layout();
        let first = layout.cell_rect(Position::new(0, 0));
        let last = layout.cell_rect(Position::new(2, 1));
        assert_eq!(first.min, layout.rect().min);
        assert_eq!(last.max, layout.rect().max);
    }

    #[test]
    fn cell_centers_hit_their_cell() {
        let layout = layout();
        for pos in layout.board.positions() {
            let center = layout.cell_rect(pos).center();
            assert_eq!(layout.cell_at(center), Some(pos));
            assert_eq!(layout.hit_test(center), PointerTarget::Cell(pos));
        }
    }

    #[test]
    fn points_outside_are_outside() {
        let layout = layout();
        for point in [
            Pos2::new(0.0, 0.0),
            Pos2::new(9.9, 50.0),
            Pos2::new(100.0, 148.1),
            Pos2::new(203.0, 30.0),
        ] {
            assert_eq!(layout.hit_test(point), PointerTarget::Outside, "{point:?}");
            assert_eq!(layout.cell_at(point), None);
        }
    }

    #[test]
    fn far_edge_is_grid_background() {
        let layout = layout();
        assert_eq!(layout.hit_test(layout.rect().max), PointerTarget::GridBackground);
    }
}
