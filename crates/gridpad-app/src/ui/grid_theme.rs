use eframe::egui::{Color32, Visuals};

/// Colors used to draw the grid.
///
/// Cells are translucent so the background image stays visible underneath.
#[derive(Debug, Clone)]
pub struct GridPalette {
    pub cell_bg_default: Color32,
    pub cell_bg_selected: Color32,
    pub cell_bg_anchor: Color32,

    pub border_cell: Color32,
    pub border_outer: Color32,
    pub border_selected: Color32,

    pub text_value: Color32,
}

impl GridPalette {
    /// Derives a palette from `visuals`.
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let selection = visuals.selection.bg_fill;

        Self {
            cell_bg_default: Color32::TRANSPARENT,
            cell_bg_selected: selection.gamma_multiply(0.6),
            cell_bg_anchor: selection.gamma_multiply(0.8),

            border_cell: visuals.widgets.inactive.fg_stroke.color.gamma_multiply(0.5),
            border_outer: visuals.widgets.inactive.fg_stroke.color,
            border_selected: visuals.selection.stroke.color,

            text_value: visuals.strong_text_color(),
        }
    }
}

/// Light and dark palettes, picked by the current visuals.
#[derive(Debug, Clone)]
pub struct GridTheme {
    pub light: GridPalette,
    pub dark: GridPalette,
}

impl GridTheme {
    pub fn new() -> Self {
        Self {
            light: GridPalette::from_visuals(&Visuals::light()),
            dark: GridPalette::from_visuals(&Visuals::dark()),
        }
    }

    pub fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for GridTheme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_palette_by_mode() {
        let theme = GridTheme::new();
        let dark = theme.palette_for(&Visuals::dark());
        let light = theme.palette_for(&Visuals::light());
        assert_eq!(dark.text_value, Visuals::dark().strong_text_color());
        assert_eq!(light.text_value, Visuals::light().strong_text_color());
    }

    #[test]
    fn unselected_cells_are_transparent() {
        let palette = GridPalette::from_visuals(&Visuals::dark());
        assert_eq!(palette.cell_bg_default, Color32::TRANSPARENT);
        assert_ne!(palette.cell_bg_selected, Color32::TRANSPARENT);
    }
}
