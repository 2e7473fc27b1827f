use eframe::egui::{self, Event, InputState};
use gridpad_core::{Digit, Position};
use gridpad_editor::{Key, RawEvent};

use crate::ui::layout::GridLayout;

/// Translates one frame of egui input into [`RawEvent`]s.
///
/// Pointer input always comes from egui. Keyboard input comes either from
/// egui or, on the web, from key events queued by window listeners.
#[derive(Debug, Clone)]
pub(crate) struct EguiInput {
    keyboard: bool,
    hovered: Option<Position>,
    command_held: bool,
}

fn is_meta(event: &RawEvent) -> bool {
    matches!(event, RawEvent::KeyDown(Key::Meta) | RawEvent::KeyUp(Key::Meta))
}

impl EguiInput {
    /// `keyboard` selects whether egui key events are read.
    #[must_use]
    pub(crate) fn new(keyboard: bool) -> Self {
        Self {
            keyboard,
            hovered: None,
            command_held: false,
        }
    }

    /// Returns this frame's events in the order the editor expects them:
    /// modifier changes, press, hover, release, then keys.
    ///
    /// `queued_keys` are key events gathered outside egui since the last
    /// frame. Their Meta events join the modifier changes and the rest
    /// follow the pointer events, matching the order of egui's own keys.
    pub(crate) fn collect(
        &mut self,
        i: &InputState,
        layout: &GridLayout,
        queued_keys: &[RawEvent],
    ) -> Vec<RawEvent> {
        let mut events = vec![];
        let (modifiers, keys): (Vec<RawEvent>, Vec<RawEvent>) =
            queued_keys.iter().copied().partition(is_meta);

        if self.keyboard && i.modifiers.command != self.command_held {
            self.command_held = i.modifiers.command;
            events.push(if self.command_held {
                RawEvent::KeyDown(Key::Meta)
            } else {
                RawEvent::KeyUp(Key::Meta)
            });
        }
        events.extend(modifiers);

        if i.pointer.primary_pressed()
            && let Some(origin) = i.pointer.press_origin()
        {
            events.push(RawEvent::PointerDown(layout.hit_test(origin)));
            // The press already covers its own cell.
            self.hovered = layout.cell_at(origin);
        }

        let hovered = i.pointer.hover_pos().and_then(|pos| layout.cell_at(pos));
        if hovered != self.hovered {
            self.hovered = hovered;
            if let Some(pos) = hovered {
                events.push(RawEvent::PointerOver(pos));
            }
        }

        if i.pointer.primary_released() {
            events.push(RawEvent::PointerUp);
        }

        if self.keyboard {
            for event in &i.events {
                if let Event::Key { key, pressed, .. } = event {
                    let key = map_key(*key);
                    events.push(if *pressed {
                        RawEvent::KeyDown(key)
                    } else {
                        RawEvent::KeyUp(key)
                    });
                }
            }
        }
        events.extend(keys);

        events
    }
}

#[must_use]
pub(crate) fn map_key(key: egui::Key) -> Key {
    use egui::Key as K;
    let digit = match key {
        K::Num0 => Digit::D0,
        K::Num1 => Digit::D1,
        K::Num2 => Digit::D2,
        K::Num3 => Digit::D3,
        K::Num4 => Digit::D4,
        K::Num5 => Digit::D5,
        K::Num6 => Digit::D6,
        K::Num7 => Digit::D7,
        K::Num8 => Digit::D8,
        K::Num9 => Digit::D9,
        K::Backspace => return Key::Backspace,
        K::Delete => return Key::Delete,
        K::ArrowUp => return Key::ArrowUp,
        K::ArrowDown => return Key::ArrowDown,
        K::ArrowLeft => return Key::ArrowLeft,
        K::ArrowRight => return Key::ArrowRight,
        _ => return Key::Other,
    };
    Key::Digit(digit)
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Context, Modifiers, PointerButton, Pos2, RawInput};
    use gridpad_core::Board;
    use gridpad_editor::{GridEditor, PointerTarget};

    use super::*;

    fn layout() -> GridLayout {
        GridLayout::new(Board::new(9, 9).unwrap(), Pos2::new(0.0, 0.0), 10.0)
    }

    fn run_frame(ctx: &Context, input: &mut EguiInput, raw: RawInput) -> Vec<RawEvent> {
        run_frame_with_keys(ctx, input, raw, &[])
    }

    fn run_frame_with_keys(
        ctx: &Context,
        input: &mut EguiInput,
        raw: RawInput,
        queued_keys: &[RawEvent],
    ) -> Vec<RawEvent> {
        let layout = layout();
        let mut events = vec![];
        let _ = ctx.run(raw, |ctx| {
            events = ctx.input(|i| input.collect(i, &layout, queued_keys));
        });
        events
    }

    fn key_event(key: egui::Key, pressed: bool) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn button_event(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn maps_editor_keys() {
        assert_eq!(map_key(egui::Key::Num0), Key::Digit(Digit::D0));
        assert_eq!(map_key(egui::Key::Num9), Key::Digit(Digit::D9));
        assert_eq!(map_key(egui::Key::Backspace), Key::Backspace);
        assert_eq!(map_key(egui::Key::Delete), Key::Delete);
        assert_eq!(map_key(egui::Key::ArrowLeft), Key::ArrowLeft);
        assert_eq!(map_key(egui::Key::A), Key::Other);
        assert_eq!(map_key(egui::Key::Escape), Key::Other);
    }

    #[test]
    fn press_inside_grid_targets_cell() {
        let ctx = Context::default();
        let mut input = EguiInput::new(true);
        let pos = Pos2::new(25.0, 5.0);
        let events = run_frame(
            &ctx,
            &mut input,
            RawInput {
                events: vec![Event::PointerMoved(pos), button_event(pos, true)],
                ..RawInput::default()
            },
        );
        assert_eq!(
            events,
            vec![RawEvent::PointerDown(PointerTarget::Cell(Position::new(2, 0)))]
        );
    }

    fn press_and_move(from: Pos2, to: Pos2) -> RawInput {
        RawInput {
            events: vec![
                Event::PointerMoved(from),
                button_event(from, true),
                Event::PointerMoved(to),
            ],
            ..RawInput::default()
        }
    }

    #[test]
    fn move_after_press_in_one_frame_follows_press() {
        let ctx = Context::default();
        let mut input = EguiInput::new(true);
        let events = run_frame(
            &ctx,
            &mut input,
            press_and_move(Pos2::new(5.0, 5.0), Pos2::new(15.0, 5.0)),
        );
        assert_eq!(
            events,
            vec![
                RawEvent::PointerDown(PointerTarget::Cell(Position::new(0, 0))),
                RawEvent::PointerOver(Position::new(1, 0)),
            ]
        );
    }

    #[test]
    fn fast_drag_keeps_every_cell() {
        let ctx = Context::default();
        let mut input = EguiInput::new(true);
        let mut editor = GridEditor::new(9, 9).unwrap();
        let to = Pos2::new(15.0, 5.0);

        let frames = [
            press_and_move(Pos2::new(5.0, 5.0), to),
            RawInput {
                events: vec![button_event(to, false)],
                ..RawInput::default()
            },
        ];
        for raw in frames {
            for event in run_frame(&ctx, &mut input, raw) {
                editor.handle_event(event);
            }
        }

        let selected: Vec<_> = editor.state().selection().iter().map(|i| i.index()).collect();
        assert_eq!(selected, vec![0, 1]);
        assert!(!editor.state().is_dragging());
    }

    #[test]
    fn queued_meta_precedes_click() {
        let ctx = Context::default();
        let mut input = EguiInput::new(false);
        let pos = Pos2::new(5.0, 5.0);
        let events = run_frame_with_keys(
            &ctx,
            &mut input,
            RawInput {
                events: vec![Event::PointerMoved(pos), button_event(pos, true)],
                ..RawInput::default()
            },
            &[
                RawEvent::KeyDown(Key::Digit(Digit::D3)),
                RawEvent::KeyDown(Key::Meta),
                RawEvent::KeyUp(Key::Digit(Digit::D3)),
            ],
        );
        assert_eq!(
            events,
            vec![
                RawEvent::KeyDown(Key::Meta),
                RawEvent::PointerDown(PointerTarget::Cell(Position::new(0, 0))),
                RawEvent::KeyDown(Key::Digit(Digit::D3)),
                RawEvent::KeyUp(Key::Digit(Digit::D3)),
            ]
        );
    }

    #[test]
    fn queued_meta_makes_same_frame_click_toggle() {
        let ctx = Context::default();
        let mut input = EguiInput::new(false);
        let mut editor = GridEditor::new(9, 9).unwrap();
        editor.handle_event(RawEvent::PointerDown(PointerTarget::Cell(Position::new(3, 0))));
        editor.handle_event(RawEvent::PointerUp);

        let pos = Pos2::new(55.0, 5.0);
        let events = run_frame_with_keys(
            &ctx,
            &mut input,
            RawInput {
                events: vec![
                    Event::PointerMoved(pos),
                    button_event(pos, true),
                    button_event(pos, false),
                ],
                ..RawInput::default()
            },
            &[RawEvent::KeyDown(Key::Meta)],
        );
        for event in events {
            editor.handle_event(event);
        }

        let selected: Vec<_> = editor.state().selection().iter().map(|i| i.index()).collect();
        assert_eq!(selected, vec![3, 5]);
    }

    #[test]
    fn press_outside_grid_is_outside() {
        let ctx = Context::default();
        let mut input = EguiInput::new(true);
        let pos = Pos2::new(150.0, 5.0);
        let events = run_frame(
            &ctx,
            &mut input,
            RawInput {
                events: vec![Event::PointerMoved(pos), button_event(pos, true)],
                ..RawInput::default()
            },
        );
        assert_eq!(events, vec![RawEvent::PointerDown(PointerTarget::Outside)]);
    }

    #[test]
    fn command_modifier_becomes_meta() {
        let ctx = Context::default();
        let mut input = EguiInput::new(true);
        let held = Modifiers {
            command: true,
            ..Modifiers::NONE
        };
        let events = run_frame(
            &ctx,
            &mut input,
            RawInput {
                modifiers: held,
                ..RawInput::default()
            },
        );
        assert_eq!(events, vec![RawEvent::KeyDown(Key::Meta)]);

        let events = run_frame(&ctx, &mut input, RawInput::default());
        assert_eq!(events, vec![RawEvent::KeyUp(Key::Meta)]);
    }

    #[test]
    fn keys_pass_through_in_order() {
        let ctx = Context::default();
        let mut input = EguiInput::new(true);
        let events = run_frame(
            &ctx,
            &mut input,
            RawInput {
                events: vec![
                    key_event(egui::Key::Num4, true),
                    key_event(egui::Key::Num4, false),
                ],
                ..RawInput::default()
            },
        );
        assert_eq!(
            events,
            vec![
                RawEvent::KeyDown(Key::Digit(Digit::D4)),
                RawEvent::KeyUp(Key::Digit(Digit::D4)),
            ]
        );
    }

    #[test]
    fn keyboard_can_be_disabled() {
        let ctx = Context::default();
        let mut input = EguiInput::new(false);
        let events = run_frame(
            &ctx,
            &mut input,
            RawInput {
                modifiers: Modifiers::COMMAND,
                events: vec![key_event(egui::Key::Num4, true)],
                ..RawInput::default()
            },
        );
        assert!(events.is_empty());
    }
}
