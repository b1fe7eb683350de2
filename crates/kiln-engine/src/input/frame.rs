use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::Key;

/// Per-frame input transitions.
///
/// Filled by [`InputState::apply_event`] as events arrive, read by the app
/// during its frame callback, cleared by the runtime afterwards. Scroll is
/// accumulated across the frame's wheel events rather than kept per-event.
///
/// [`InputState::apply_event`]: super::InputState::apply_event
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys that went down this frame.
    pub keys_pressed: HashSet<Key>,

    /// Scroll accumulated this frame, in line units.
    pub wheel: Vec2,
}

impl InputFrame {
    /// Whether `key` went down this frame.
    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Resets all per-frame data. Called by the runtime once the frame has
    /// been consumed.
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.wheel = Vec2::zero();
    }
}
