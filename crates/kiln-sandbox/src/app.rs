use kiln_engine::core::{App, Control, FrameCtx};
use kiln_engine::input::{Key, MouseButton};
use kiln_engine::text::{FontId, FontSystem};
use kiln_life::{InputSample, Simulation};

use crate::scene::{Scene, SceneInputs};

/// Background clear, a dark teal like the original sandbox.
const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.03,
    g: 0.06,
    b: 0.06,
    a: 1.0,
};

/// The sandbox application: one simulation, one scene.
pub struct SandboxApp {
    sim: Simulation,
    scene: Option<Scene>,
    fonts: FontSystem,
    hud_font: Option<FontId>,
    /// Textured-quad x drift, accumulated while the left button is held.
    drift: f32,
    /// Smoothed frames-per-second estimate for the HUD.
    fps: f32,
}

impl SandboxApp {
    pub fn new(sim: Simulation) -> Self {
        let mut fonts = FontSystem::new();
        let hud_font = match fonts.load_system_font() {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("HUD text disabled: {e}");
                None
            }
        };
        Self {
            sim,
            scene: None,
            fonts,
            hud_font,
            drift: 0.0,
            fps: 0.0,
        }
    }
}

/// Maps the engine's sampled input onto the simulation's snapshot.
fn sample_input(ctx: &FrameCtx<'_>) -> InputSample {
    let cursor = match ctx.input.pointer() {
        Some(pos) => {
            let n = ctx.viewport().normalize(pos);
            [n.x, n.y]
        }
        None => [0.0, 0.0],
    };

    InputSample {
        move_up: ctx.input.held(Key::W),
        move_down: ctx.input.held(Key::S),
        move_left: ctx.input.held(Key::A),
        move_right: ctx.input.held(Key::D),

        toggle_pause: ctx.frame.pressed(Key::P),
        step_once: ctx.frame.pressed(Key::Space),
        randomize: ctx.input.held(Key::R),
        reset: ctx.frame.pressed(Key::C),

        scroll: ctx.frame.wheel.y,
        cursor,
    }
}

impl App for SandboxApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Control {
        if ctx.frame.pressed(Key::Escape) {
            return Control::Exit;
        }

        let sample = sample_input(ctx);
        self.sim.tick(&sample);

        if ctx.input.button_held(MouseButton::Left) {
            self.drift += 0.05;
        }

        let instant_fps = 1.0 / ctx.time.dt.max(1e-4);
        self.fps = if ctx.time.frame_index == 0 {
            instant_fps
        } else {
            self.fps + (instant_fps - self.fps) * 0.05
        };

        let status = format!(
            "{}  pop {}  {:.0} fps",
            if self.sim.paused() { "PAUSED" } else { "RUNNING" },
            self.sim.life().population(),
            self.fps,
        );
        let time = ctx.time.elapsed;

        let Self {
            sim,
            scene,
            fonts,
            hud_font,
            drift,
            ..
        } = self;

        ctx.render(CLEAR, |rctx, target| {
            let scene = scene.get_or_insert_with(|| Scene::new(rctx, sim.life().side()));
            scene.draw(
                rctx,
                target,
                &SceneInputs {
                    life: sim.life(),
                    camera: sim.camera(),
                    time,
                    cursor: sample.cursor,
                    drift: *drift,
                    status: &status,
                },
                fonts,
                *hud_font,
            );
        })
    }
}
