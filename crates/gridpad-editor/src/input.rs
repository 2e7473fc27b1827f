//! Raw input events and their translation into [`Command`]s.
//!
//! Pointer events translate one-to-one. Keyboard events go through a
//! [`KeyLatch`] per key group: a key-down of an allowlisted key latches it and
//! the matching key-up fires the command. Holding a key therefore produces
//! one command per press-release cycle regardless of auto-repeat.

use gridpad_core::{Digit, MoveDirection, Position};

use crate::Command;

/// A keyboard key, as far as the editor cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Key {
    /// `0`-`9`.
    Digit(Digit),
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// The toggle modifier (Cmd/Meta).
    Meta,
    /// Anything else.
    Other,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    ///
    /// ```
    /// use gridpad_core::Digit;
    /// use gridpad_editor::Key;
    ///
    /// assert_eq!(Key::from_dom_key("7"), Key::Digit(Digit::D7));
    /// assert_eq!(Key::from_dom_key("ArrowLeft"), Key::ArrowLeft);
    /// assert_eq!(Key::from_dom_key("Meta"), Key::Meta);
    /// assert_eq!(Key::from_dom_key("q"), Key::Other);
    /// ```
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Backspace" => Self::Backspace,
            "Delete" => Self::Delete,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Meta" => Self::Meta,
            _ => {
                let mut chars = key.chars();
                match (chars.next().and_then(Digit::from_char), chars.next()) {
                    (Some(digit), None) => Self::Digit(digit),
                    _ => Self::Other,
                }
            }
        }
    }

    fn direction(self) -> Option<MoveDirection> {
        match self {
            Self::ArrowUp => Some(MoveDirection::Up),
            Self::ArrowDown => Some(MoveDirection::Down),
            Self::ArrowLeft => Some(MoveDirection::Left),
            Self::ArrowRight => Some(MoveDirection::Right),
            _ => None,
        }
    }
}

/// Keys that edit cell values.
pub const EDIT_KEYS: [Key; 12] = [
    Key::Digit(Digit::D1),
    Key::Digit(Digit::D2),
    Key::Digit(Digit::D3),
    Key::Digit(Digit::D4),
    Key::Digit(Digit::D5),
    Key::Digit(Digit::D6),
    Key::Digit(Digit::D7),
    Key::Digit(Digit::D8),
    Key::Digit(Digit::D9),
    Key::Digit(Digit::D0),
    Key::Backspace,
    Key::Delete,
];

/// Keys that move the cursor.
pub const NAVIGATION_KEYS: [Key; 4] = [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight];

/// Where a pointer press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// On a cell.
    Cell(Position),
    /// Inside the grid's bounds but not on a cell, e.g. on a border.
    GridBackground,
    /// Outside the grid.
    Outside,
}

/// A raw device event from a front end.
///
/// Mouse and touch input both arrive as pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// Primary pointer pressed (mouse down or touch start).
    PointerDown(PointerTarget),
    /// Pointer entered a cell.
    PointerOver(Position),
    /// Primary pointer released anywhere.
    PointerUp,
    /// Key pressed. Auto-repeat may deliver several of these.
    KeyDown(Key),
    /// Key released.
    KeyUp(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LatchState {
    Idle,
    Pressed(Key),
}

/// Press-release detector for one group of keys.
///
/// `Idle --key_down(allowed)--> Pressed(key) --key_up(key)--> Idle`, firing
/// `key` on the release. A key-down of another allowed key re-latches; keys
/// outside the allowlist leave the latch alone.
#[derive(Debug, Clone)]
pub struct KeyLatch {
    allowed: &'static [Key],
    state: LatchState,
}

impl KeyLatch {
    /// Creates an idle latch accepting `allowed`.
    #[must_use]
    pub const fn new(allowed: &'static [Key]) -> Self {
        Self {
            allowed,
            state: LatchState::Idle,
        }
    }

    /// Returns the latched key, if any.
    #[must_use]
    pub fn pressed(&self) -> Option<Key> {
        match self.state {
            LatchState::Idle => None,
            LatchState::Pressed(key) => Some(key),
        }
    }

    /// Feeds a key-down. Returns `true` if the key was latched.
    pub fn key_down(&mut self, key: Key) -> bool {
        if self.allowed.contains(&key) {
            self.state = LatchState::Pressed(key);
            true
        } else {
            false
        }
    }

    /// Feeds a key-up. Returns the key if it completes a press.
    pub fn key_up(&mut self, key: Key) -> Option<Key> {
        match self.state {
            LatchState::Pressed(latched) if latched == key => {
                self.state = LatchState::Idle;
                Some(key)
            }
            _ => None,
        }
    }
}

/// Translates [`RawEvent`]s into [`Command`]s.
#[derive(Debug, Clone)]
pub struct Normalizer {
    edit: KeyLatch,
    navigation: KeyLatch,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Creates a normalizer with all latches idle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            edit: KeyLatch::new(&EDIT_KEYS),
            navigation: KeyLatch::new(&NAVIGATION_KEYS),
        }
    }

    /// Returns the command for `event`, or `None` if the event is ignored.
    pub fn normalize(&mut self, event: RawEvent) -> Option<Command> {
        match event {
            RawEvent::PointerDown(PointerTarget::Cell(pos)) => Some(Command::StartSelection(pos)),
            RawEvent::PointerDown(PointerTarget::Outside) => Some(Command::ClickOutside),
            RawEvent::PointerDown(PointerTarget::GridBackground) => None,
            RawEvent::PointerOver(pos) => Some(Command::DragOver(pos)),
            RawEvent::PointerUp => Some(Command::EndSelection),
            RawEvent::KeyDown(Key::Meta) => Some(Command::SetToggleModifier(true)),
            RawEvent::KeyUp(Key::Meta) => Some(Command::SetToggleModifier(false)),
            RawEvent::KeyDown(key) => {
                if !self.edit.key_down(key) && !self.navigation.key_down(key) {
                    log::trace!("ignoring key down {key:?}");
                }
                None
            }
            RawEvent::KeyUp(key) => {
                if let Some(key) = self.edit.key_up(key) {
                    return match key {
                        Key::Digit(digit) => Some(Command::Digit(digit)),
                        _ => Some(Command::Delete),
                    };
                }
                self.navigation
                    .key_up(key)
                    .and_then(Key::direction)
                    .map(Command::Arrow)
            }
        }
    }
}
