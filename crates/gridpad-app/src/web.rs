//! Window-level keyboard listeners for the web build.
//!
//! Keys are captured on the window rather than on the canvas so typing works
//! without the canvas having focus. The listeners live exactly as long as
//! their [`KeyListeners`] guard.

use std::{cell::RefCell, rc::Rc};

use eframe::egui::Context;
use gridpad_editor::{Key, RawEvent};
use wasm_bindgen::{JsCast as _, closure::Closure};
use web_sys::{KeyboardEvent, Window};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum ListenerError {
    #[display("no global window")]
    NoWindow,
    #[display("failed to register {kind} listener")]
    Register { kind: &'static str },
}

type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;

/// Capture-phase `keydown`/`keyup` listeners, removed on drop.
pub(crate) struct KeyListeners {
    window: Window,
    queue: Rc<RefCell<Vec<RawEvent>>>,
    on_key_down: KeyClosure,
    on_key_up: KeyClosure,
}

impl std::fmt::Debug for KeyListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyListeners")
            .field("pending", &self.queue.borrow().len())
            .finish_non_exhaustive()
    }
}

fn key_closure(
    queue: &Rc<RefCell<Vec<RawEvent>>>,
    ctx: &Context,
    make_event: fn(Key) -> RawEvent,
) -> KeyClosure {
    let queue = Rc::clone(queue);
    let ctx = ctx.clone();
    Closure::new(move |event: KeyboardEvent| {
        let key = Key::from_dom_key(&event.key());
        queue.borrow_mut().push(make_event(key));
        ctx.request_repaint();
    })
}

impl KeyListeners {
    /// Registers the listeners on the global window.
    ///
    /// `ctx` is asked to repaint whenever a key event is queued.
    pub(crate) fn attach(ctx: &Context) -> Result<Self, ListenerError> {
        let window = web_sys::window().ok_or(ListenerError::NoWindow)?;
        let queue = Rc::new(RefCell::new(vec![]));
        let listeners = Self {
            window,
            on_key_down: key_closure(&queue, ctx, RawEvent::KeyDown),
            on_key_up: key_closure(&queue, ctx, RawEvent::KeyUp),
            queue,
        };

        // On failure `listeners` drops and unregisters whatever was added.
        for (kind, closure) in listeners.closures() {
            listeners
                .window
                .add_event_listener_with_callback_and_bool(
                    kind,
                    closure.as_ref().unchecked_ref(),
                    true,
                )
                .map_err(|_| ListenerError::Register { kind })?;
        }
        log::debug!("key listeners attached");

        Ok(listeners)
    }

    fn closures(&self) -> [(&'static str, &KeyClosure); 2] {
        [("keydown", &self.on_key_down), ("keyup", &self.on_key_up)]
    }

    /// Takes the key events queued since the last call, oldest first.
    pub(crate) fn drain(&self) -> Vec<RawEvent> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}

impl Drop for KeyListeners {
    fn drop(&mut self) {
        for (kind, closure) in self.closures() {
            if self
                .window
                .remove_event_listener_with_callback_and_bool(
                    kind,
                    closure.as_ref().unchecked_ref(),
                    true,
                )
                .is_err()
            {
                log::warn!("failed to remove {kind} listener");
            }
        }
        log::debug!("key listeners detached");
    }
}
