//! egui front end for the Gridpad board editor.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod app;
pub mod config;
pub mod ui;
pub mod version;
pub mod view_model_builder;
#[cfg(target_arch = "wasm32")]
mod web;

pub use self::{
    app::GridpadApp,
    config::{ConfigError, GridConfig},
};
