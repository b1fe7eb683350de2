//! Input subsystem.
//!
//! The public types are platform-agnostic; the window runtime translates
//! winit events into [`InputEvent`]s and feeds them through
//! [`InputState::apply_event`]. Held state lives in [`InputState`],
//! per-frame transitions (key edges, accumulated scroll) in
//! [`InputFrame`], which the runtime clears after every frame.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{ButtonState, InputEvent, Key, MouseButton, WheelDelta};
