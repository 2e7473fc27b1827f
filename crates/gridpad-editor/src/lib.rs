//! Selection-and-input state machine for the Gridpad board editor.
//!
//! The crate has two halves:
//!
//! - [`EditorState`] is the grid state store. It owns the value matrix and the
//!   selection, and every [`Command`] maps one state to the next without
//!   touching the previous one.
//! - [`Normalizer`] turns raw pointer and keyboard events ([`RawEvent`]) into
//!   commands. It holds the per-group key latches that make keyboard commands
//!   fire once per press-release cycle.
//!
//! [`GridEditor`] bundles the two for front ends that just want to feed events
//! in and read the current state out.
//!
//! # Examples
//!
//! ```
//! use gridpad_core::{Digit, Position};
//! use gridpad_editor::{GridEditor, Key, PointerTarget, RawEvent};
//!
//! let mut editor = GridEditor::new(9, 9).unwrap();
//! editor.handle_event(RawEvent::PointerDown(PointerTarget::Cell(Position::new(0, 0))));
//! editor.handle_event(RawEvent::PointerUp);
//! editor.handle_event(RawEvent::KeyDown(Key::Digit(Digit::D9)));
//! editor.handle_event(RawEvent::KeyUp(Key::Digit(Digit::D9)));
//!
//! assert_eq!(editor.state().values()[Position::new(0, 0)], Some(Digit::D9));
//! ```

pub use self::{command::*, editor::*, input::*, state::*};

mod command;
mod editor;
mod input;
mod state;
