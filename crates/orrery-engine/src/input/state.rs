use super::frame::InputFrame;
use super::types::{InputEvent, PointerMoveEvent};

/// Hover pointer as seen by the scene.
///
/// `active` turns on with the first move event and off when the pointer
/// leaves the surface. The last position is kept while inactive, but consumers
/// must not read it unless `active` is set.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl PointerState {
    /// An active pointer at `(x, y)`.
    #[inline]
    pub const fn at(x: f32, y: f32) -> Self {
        Self { x, y, active: true }
    }

    /// An inactive pointer.
    #[inline]
    pub const fn inactive() -> Self {
        Self { x: 0.0, y: 0.0, active: false }
    }
}

/// Current input state for a single window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Hover pointer in logical pixels.
    pub pointer: PointerState,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer = PointerState::at(*x, *y);
            }

            InputEvent::PointerLeft => {
                self.pointer.active = false;
            }

            InputEvent::KeyPressed { key, repeat } => {
                if !*repeat {
                    frame.keys_pressed.insert(*key);
                }
            }
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn apply(state: &mut InputState, frame: &mut InputFrame, ev: InputEvent) {
        state.apply_event(frame, ev);
    }

    #[test]
    fn pointer_starts_inactive() {
        assert!(!InputState::default().pointer.active);
    }

    #[test]
    fn move_activates_and_leave_deactivates() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        apply(&mut state, &mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 12.0, y: 34.0 }));
        assert_eq!(state.pointer, PointerState::at(12.0, 34.0));

        apply(&mut state, &mut frame, InputEvent::PointerLeft);
        assert!(!state.pointer.active);
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn key_repeat_is_not_a_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        apply(&mut state, &mut frame, InputEvent::KeyPressed { key: Key::Escape, repeat: true });
        assert!(!frame.key_pressed(Key::Escape));

        apply(&mut state, &mut frame, InputEvent::KeyPressed { key: Key::Escape, repeat: false });
        assert!(frame.key_pressed(Key::Escape));

        frame.clear();
        assert!(!frame.key_pressed(Key::Escape));
    }
}
