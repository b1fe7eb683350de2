//! Renderer-facing context types.
//!
//! Renderers themselves live in the application; the engine only supplies
//! the device handles and the target of the current frame.

mod ctx;

pub use ctx::{RenderCtx, RenderTarget};
