//! Small geometry types shared between the runtime and renderers.
//!
//! Logical pixels are the canonical CPU-side unit: DPI-aware, origin
//! top-left, +Y down. Renderers that work in normalized device
//! coordinates do their own conversion.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
