use eframe::egui::{Align, Label, Layout, RichText, Ui, Widget as _};
use gridpad_editor::Mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    pub(crate) selected: usize,
    pub(crate) filled: usize,
    pub(crate) cell_count: usize,
    pub(crate) toggle_held: bool,
    pub(crate) mode: Mode,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn text(&self) -> String {
        let Self {
            selected,
            filled,
            cell_count,
            toggle_held,
            mode,
        } = self;
        let mut text = format!("{mode} | {selected} selected | {filled}/{cell_count} filled");
        if *toggle_held {
            text.push_str(" | toggle");
        }
        text
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, version: &str) {
    ui.horizontal(|ui| {
        let color = if vm.toggle_held {
            ui.visuals().warn_fg_color
        } else {
            ui.visuals().text_color()
        };
        Label::new(RichText::new(vm.text()).color(color)).ui(ui);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.weak(version);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm(toggle_held: bool) -> StatusLineViewModel {
        StatusLineViewModel {
            selected: 3,
            filled: 10,
            cell_count: 81,
            toggle_held,
            mode: Mode::Normal,
        }
    }

    #[test]
    fn text_reports_counts() {
        assert_eq!(vm(false).text(), "Normal | 3 selected | 10/81 filled");
    }

    #[test]
    fn text_flags_held_toggle() {
        assert!(vm(true).text().ends_with(" | toggle"));
    }
}
