use eframe::egui::{Ui, Vec2};
use egui_extras::{Size, StripBuilder};

/// Runs `add_contents` in a cell of exactly `size`, centered in the available space.
pub(crate) fn centered(ui: &mut Ui, size: Vec2, add_contents: impl FnOnce(&mut Ui)) {
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(size.x))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(size.y))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(add_contents);
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
