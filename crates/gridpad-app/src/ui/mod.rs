pub mod grid;
pub mod grid_theme;
pub mod input;
pub mod layout;
pub mod screen;
pub mod status_line;
