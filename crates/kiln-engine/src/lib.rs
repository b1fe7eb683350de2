//! kiln-engine: the window/input/GPU layer of the kiln sandbox.
//!
//! Owns the winit event loop and the wgpu device, and drives an
//! application through one [`core::App::on_frame`] call per presented
//! frame. Input arrives as held-state plus per-frame edge sets, so the
//! app can sample everything it needs at the top of a frame instead of
//! reacting to callbacks.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod text;
pub mod time;
pub mod window;
