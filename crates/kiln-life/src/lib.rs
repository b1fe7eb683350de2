//! kiln-life: the simulation core of the kiln sandbox.
//!
//! Owns the double-buffered cell grid, the Game of Life transition rule,
//! the pan/zoom camera and the per-frame driver. The host feeds it one
//! [`InputSample`] per frame and reads the active buffer back for
//! rendering; nothing in here touches a window or a GPU.

pub mod camera;
pub mod grid;
pub mod input;
pub mod life;
pub mod sim;

pub use camera::Camera;
pub use grid::Grid;
pub use input::InputSample;
pub use life::Life;
pub use sim::Simulation;
