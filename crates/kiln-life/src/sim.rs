use crate::camera::Camera;
use crate::input::InputSample;
use crate::life::Life;

/// Per-frame driver over the automaton and the camera.
///
/// One `tick` per rendered frame. Camera input always applies; the grid
/// advances every tick while running, or once per `step_once` edge while
/// paused.
pub struct Simulation {
    life: Life,
    camera: Camera,
    paused: bool,
}

impl Simulation {
    pub fn new(life: Life, camera: Camera, paused: bool) -> Self {
        Self {
            life,
            camera,
            paused,
        }
    }

    /// Runs one frame of simulation logic.
    ///
    /// Order within a tick: movement, zoom, pause toggle, randomize/reset,
    /// then the generation step. Reset must land before a step that fires
    /// in the same frame, so a reset-while-running frame renders an empty
    /// grid rather than one generation past it.
    pub fn tick(&mut self, input: &InputSample) {
        self.camera.pan(input);
        self.camera.zoom(input.scroll, input.cursor);

        if input.toggle_pause {
            self.paused = !self.paused;
        }

        if input.randomize {
            self.life.randomize();
        }
        if input.reset {
            self.life.reset();
        }

        if !self.paused {
            self.life.step();
        } else if input.step_once {
            self.life.step();
        }
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn blinker_sim(paused: bool) -> Simulation {
        let grid = Grid::from_rows(&[
            ".....", //
            ".....", //
            ".###.", //
            ".....", //
            ".....",
        ]);
        Simulation::new(
            Life::with_pattern(grid, 0),
            Camera::framing(5),
            paused,
        )
    }

    fn snapshot(sim: &Simulation) -> Vec<bool> {
        sim.life().cells().collect()
    }

    #[test]
    fn paused_ticks_leave_the_grid_untouched() {
        let mut sim = blinker_sim(true);
        let before = snapshot(&sim);
        for _ in 0..10 {
            sim.tick(&InputSample::default());
        }
        assert_eq!(snapshot(&sim), before);
    }

    #[test]
    fn one_step_edge_advances_exactly_one_generation() {
        let mut sim = blinker_sim(true);

        sim.tick(&InputSample {
            step_once: true,
            ..InputSample::default()
        });
        let vertical = Grid::from_rows(&[
            ".....", //
            "..#..", //
            "..#..", //
            "..#..", //
            ".....",
        ]);
        assert_eq!(snapshot(&sim), vertical.cells().collect::<Vec<_>>());

        // The edge is consumed; further plain ticks do nothing.
        sim.tick(&InputSample::default());
        assert_eq!(snapshot(&sim), vertical.cells().collect::<Vec<_>>());
    }

    #[test]
    fn running_advances_every_tick() {
        let mut sim = blinker_sim(false);
        let start = snapshot(&sim);
        sim.tick(&InputSample::default());
        assert_ne!(snapshot(&sim), start);
        sim.tick(&InputSample::default());
        assert_eq!(snapshot(&sim), start, "blinker has period two");
    }

    #[test]
    fn pause_toggle_takes_effect_within_the_same_tick() {
        // The toggle is applied before the step decision, so the tick that
        // presses pause does not also advance.
        let mut sim = blinker_sim(false);
        let before = snapshot(&sim);
        sim.tick(&InputSample {
            toggle_pause: true,
            ..InputSample::default()
        });
        assert!(sim.paused());
        assert_eq!(snapshot(&sim), before);

        // And the tick that unpauses does advance.
        sim.tick(&InputSample {
            toggle_pause: true,
            ..InputSample::default()
        });
        assert!(!sim.paused());
        assert_ne!(snapshot(&sim), before);
    }

    #[test]
    fn reset_lands_before_a_same_frame_step() {
        let mut sim = blinker_sim(false);
        sim.tick(&InputSample {
            reset: true,
            ..InputSample::default()
        });
        assert_eq!(sim.life().population(), 0);
    }

    #[test]
    fn randomize_held_refires_every_tick() {
        let mut sim = Simulation::new(Life::new(16, 3), Camera::framing(16), true);
        let held = InputSample {
            randomize: true,
            ..InputSample::default()
        };
        sim.tick(&held);
        let first = snapshot(&sim);
        sim.tick(&held);
        assert_ne!(snapshot(&sim), first);
    }

    #[test]
    fn camera_input_applies_while_paused() {
        let mut sim = blinker_sim(true);
        let grid_before = snapshot(&sim);
        let cam_before = *sim.camera();
        sim.tick(&InputSample {
            move_right: true,
            scroll: 1.0,
            cursor: [0.0, 0.0],
            ..InputSample::default()
        });
        assert_ne!(*sim.camera(), cam_before);
        assert_eq!(snapshot(&sim), grid_before);
    }
}
