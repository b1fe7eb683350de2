//! The demo renderables.
//!
//! Each renderer owns its pipeline and buffers and records its own render
//! pass over the already-cleared frame. World-space renderers work
//! directly in normalized device coordinates (the space the simulation
//! camera lives in); the HUD works in logical pixels.

mod cells;
mod common;
mod hud;
mod particles;
mod sprite;
mod triangle;

use kiln_engine::render::{RenderCtx, RenderTarget};
use kiln_engine::text::{FontId, FontSystem};
use kiln_life::{Camera, Life};

use cells::CellRenderer;
use hud::HudRenderer;
use particles::ParticleRenderer;
use sprite::SpriteRenderer;
use triangle::TriangleRenderer;

/// Everything the scene reads for one frame.
pub struct SceneInputs<'a> {
    pub life: &'a Life,
    pub camera: &'a Camera,
    /// Seconds since startup.
    pub time: f32,
    /// Cursor in normalized coordinates.
    pub cursor: [f32; 2],
    /// Textured-quad x drift.
    pub drift: f32,
    /// HUD status line.
    pub status: &'a str,
}

pub struct Scene {
    cells: CellRenderer,
    sprite: SpriteRenderer,
    particles: ParticleRenderer,
    triangle: TriangleRenderer,
    hud: HudRenderer,
}

impl Scene {
    pub fn new(ctx: &RenderCtx<'_>, side: usize) -> Self {
        Self {
            cells: CellRenderer::new(ctx, side),
            sprite: SpriteRenderer::new(ctx),
            particles: ParticleRenderer::new(ctx),
            triangle: TriangleRenderer::new(ctx),
            hud: HudRenderer::new(ctx),
        }
    }

    pub fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        inputs: &SceneInputs<'_>,
        fonts: &FontSystem,
        hud_font: Option<FontId>,
    ) {
        self.cells.draw(ctx, target, inputs.life, inputs.camera);
        self.sprite.draw(ctx, target, inputs.drift, inputs.time);
        self.particles.draw(ctx, target);
        self.triangle.draw(ctx, target, inputs.time, inputs.cursor);

        if let Some(font) = hud_font {
            self.hud
                .draw(ctx, target, fonts, font, inputs.status, [12.0, 12.0]);
        }
    }
}
