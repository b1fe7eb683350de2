//! Font loading.
//!
//! Wraps fontdue behind a small registry. Rasterization and atlas
//! management belong to whatever renderer consumes the fonts.

mod font_system;

pub use font_system::{FontId, FontSystem};
