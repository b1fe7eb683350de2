//! GPU device + surface management.
//!
//! Creates the wgpu device/queue for the window's surface, keeps the
//! surface configured across resizes, and hands out one frame at a time
//! as an encoder + color view pair.

mod gpu;

pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};
