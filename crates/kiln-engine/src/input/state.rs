use std::collections::HashSet;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{ButtonState, InputEvent, Key, MouseButton, WheelDelta};

/// Pixel-precision scroll is folded into line units at this many logical
/// pixels per wheel notch.
const PIXELS_PER_LINE: f32 = 40.0;

/// Current input state for the window: what is held right now.
///
/// Per-frame transitions are recorded into an [`InputFrame`] as events are
/// applied, so edge queries never depend on event arrival order within the
/// frame.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
    buttons_down: HashSet<MouseButton>,
    pointer: Option<Vec2>,
    focused: bool,
}

impl InputState {
    /// Folds one event into the held state and writes any resulting edge
    /// into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Key { key, state } => match state {
                ButtonState::Pressed => {
                    // OS key-repeat delivers Pressed again while held; only
                    // the first press is an edge.
                    if self.keys_down.insert(key) {
                        frame.keys_pressed.insert(key);
                    }
                }
                ButtonState::Released => {
                    self.keys_down.remove(&key);
                }
            },

            InputEvent::PointerButton { button, state } => match state {
                ButtonState::Pressed => {
                    self.buttons_down.insert(button);
                }
                ButtonState::Released => {
                    self.buttons_down.remove(&button);
                }
            },

            InputEvent::PointerMoved { x, y } => {
                self.pointer = Some(Vec2::new(x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer = None;
            }

            InputEvent::Wheel(delta) => {
                let (x, y) = match delta {
                    WheelDelta::Line { x, y } => (x, y),
                    WheelDelta::Pixel { x, y } => (x / PIXELS_PER_LINE, y / PIXELS_PER_LINE),
                };
                frame.wheel.x += x;
                frame.wheel.y += y;
            }

            InputEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Release events can be lost across a focus change;
                    // clearing the held sets avoids stuck keys.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }
        }
    }

    /// Whether `key` is currently held.
    pub fn held(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Whether `button` is currently held.
    pub fn button_held(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Last pointer position in logical pixels, if it is over the window.
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: ButtonState::Pressed,
        }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: ButtonState::Released,
        }
    }

    #[test]
    fn press_sets_held_and_edge() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(Key::W));
        assert!(state.held(Key::W));
        assert!(frame.pressed(Key::W));
    }

    #[test]
    fn key_repeat_is_not_a_second_edge() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(Key::Space));
        frame.clear();
        // Held across frames: OS repeat re-sends Pressed.
        state.apply_event(&mut frame, press(Key::Space));
        assert!(state.held(Key::Space));
        assert!(!frame.pressed(Key::Space));
    }

    #[test]
    fn edge_refires_after_release() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(Key::P));
        frame.clear();
        state.apply_event(&mut frame, release(Key::P));
        state.apply_event(&mut frame, press(Key::P));
        assert!(frame.pressed(Key::P));
    }

    #[test]
    fn wheel_accumulates_within_a_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::Wheel(WheelDelta::Line { x: 0.0, y: 1.0 }));
        state.apply_event(&mut frame, InputEvent::Wheel(WheelDelta::Line { x: 0.0, y: 2.0 }));
        assert_eq!(frame.wheel.y, 3.0);
        frame.clear();
        assert_eq!(frame.wheel.y, 0.0);
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(Key::A));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.held(Key::A));
    }
}
