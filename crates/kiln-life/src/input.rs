/// Per-frame input snapshot consumed by [`Simulation::tick`].
///
/// The host samples its input state once per frame and passes the result
/// by value — the simulation never observes input mid-frame and holds no
/// reference back into the event layer.
///
/// Edge fields (`toggle_pause`, `step_once`, `reset`) are true only on the
/// frame the key went down; `randomize` reports the key being held, and
/// re-fires for as long as it stays true.
///
/// [`Simulation::tick`]: crate::sim::Simulation::tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,

    /// Pause/resume, edge-triggered.
    pub toggle_pause: bool,
    /// Advance one generation while paused, edge-triggered.
    pub step_once: bool,
    /// Re-randomize the interior, held.
    pub randomize: bool,
    /// Clear the interior, edge-triggered.
    pub reset: bool,

    /// Scroll delta accumulated over the frame, positive to zoom in.
    pub scroll: f32,
    /// Cursor in normalized coordinates: origin at screen center, roughly
    /// −1..1 per axis, +Y up (flipped from raw screen space).
    pub cursor: [f32; 2],
}
