//! Frame timing.
//!
//! [`FrameClock`] produces per-frame delta-time snapshots; [`FramePacer`]
//! sleeps the remainder of a fixed frame interval. Both are plain state
//! machines with no coupling to the window runtime.

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
