//! Gridpad application shell.
//!
//! # Design Notes
//! - One [`GridEditor`] owns all board state; this module only translates
//!   input and paints.
//! - Pointer input comes from egui on every platform. Keys come from egui
//!   natively and from window listeners on the web.
//! - Each frame is applied as modifier changes, then pointer events, then
//!   other keys. On the web, queued Meta events are moved ahead of the
//!   frame's pointer events so a Cmd-click toggles like it does natively.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, Sense, TopBottomPanel, Ui},
};
use gridpad_editor::GridEditor;

use crate::{
    config::{ConfigError, GridConfig},
    ui::{self, grid_theme::GridTheme, input::EguiInput, layout::GridLayout},
    version, view_model_builder,
};

#[derive(Debug)]
pub struct GridpadApp {
    config: GridConfig,
    editor: GridEditor,
    input: EguiInput,
    theme: GridTheme,
    version: String,
    #[cfg(target_arch = "wasm32")]
    key_listeners: Option<crate::web::KeyListeners>,
}

impl GridpadApp {
    /// Creates the app for `config`.
    pub fn new(cc: &CreationContext<'_>, config: GridConfig) -> Result<Self, ConfigError> {
        let board = config.board()?;
        egui_extras::install_image_loaders(&cc.egui_ctx);
        log::info!(
            "starting {}x{} board, background={}",
            board.width(),
            board.height(),
            config.background
        );

        Ok(Self {
            editor: GridEditor::from_board(board),
            input: EguiInput::new(cfg!(not(target_arch = "wasm32"))),
            theme: GridTheme::new(),
            version: version::build_version(),
            #[cfg(target_arch = "wasm32")]
            key_listeners: crate::web::KeyListeners::attach(&cc.egui_ctx)
                .inspect_err(|err| log::warn!("keyboard input unavailable: {err}"))
                .ok(),
            config,
        })
    }

    fn show_grid(&mut self, ui: &mut Ui) {
        let board = self.editor.state().board();
        let size = GridLayout::size(board, self.config.cell_size);
        let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
        let layout = GridLayout::new(board, rect.min, self.config.cell_size);

        #[cfg(target_arch = "wasm32")]
        let queued_keys = self
            .key_listeners
            .as_ref()
            .map(crate::web::KeyListeners::drain)
            .unwrap_or_default();
        #[cfg(not(target_arch = "wasm32"))]
        let queued_keys: Vec<gridpad_editor::RawEvent> = vec![];
        let events = ui.input(|i| self.input.collect(i, &layout, &queued_keys));

        for event in events {
            self.editor.handle_event(event);
        }

        let vm = view_model_builder::build_grid_view_model(self.editor.state());
        let palette = self.theme.palette_for(ui.visuals());
        ui::grid::show(ui, &vm, &layout, &self.config.background, palette);
    }
}

impl App for GridpadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let status_vm = view_model_builder::build_status_line_view_model(self.editor.state());
        TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            ui::status_line::show(ui, &status_vm, &self.version);
        });

        CentralPanel::default().show(ctx, |ui| {
            let board = self.editor.state().board();
            let size = GridLayout::size(board, self.config.cell_size);
            ui::screen::centered(ui, size, |ui| self.show_grid(ui));
        });
    }
}
