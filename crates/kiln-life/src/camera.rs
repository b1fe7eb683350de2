use crate::input::InputSample;

/// Pan step added per held frame, in normalized render units.
///
/// Intentionally independent of zoom; held opposite directions cancel
/// exactly, and held diagonals move √2 faster than a single axis.
pub const PAN_STEP: f32 = 0.05;

/// Pan/zoom state for the cell field.
///
/// `offset` is the world position of cell (0, 0) and `quad_len` the
/// rendered side of one cell, both in the normalized space the cursor is
/// reported in (origin at screen center, roughly −1..1 per axis, +Y up).
/// Neither is clamped — aggressive zooming out can drive `quad_len`
/// through zero and negative, which renders as nothing rather than
/// erroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: [f32; 2],
    pub quad_len: f32,
}

impl Camera {
    pub fn new(offset: [f32; 2], quad_len: f32) -> Self {
        Self { offset, quad_len }
    }

    /// Frames a `side × side` grid across the center two units of the
    /// screen: offset (−1, −1), quad length `2 / side`.
    pub fn framing(side: usize) -> Self {
        Self::new([-1.0, -1.0], 2.0 / side as f32)
    }

    /// Applies one frame of held directional input.
    pub fn pan(&mut self, input: &InputSample) {
        if input.move_right {
            self.offset[0] += PAN_STEP;
        }
        if input.move_left {
            self.offset[0] -= PAN_STEP;
        }
        if input.move_up {
            self.offset[1] += PAN_STEP;
        }
        if input.move_down {
            self.offset[1] -= PAN_STEP;
        }
    }

    /// Zooms by a scroll delta, keeping the point under `cursor` fixed.
    ///
    /// A delta `s` scales the quad length by `1 + s/10`; the offset moves
    /// so the cursor's position relative to it scales by the same factor
    /// on both axes. A zero delta is the identity.
    pub fn zoom(&mut self, scroll: f32, cursor: [f32; 2]) {
        let factor = 1.0 + scroll / 10.0;
        self.quad_len *= factor;
        for axis in 0..2 {
            let rel = cursor[axis] - self.offset[axis];
            self.offset[axis] -= rel * factor - rel;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(up: bool, down: bool, left: bool, right: bool) -> InputSample {
        InputSample {
            move_up: up,
            move_down: down,
            move_left: left,
            move_right: right,
            ..InputSample::default()
        }
    }

    #[test]
    fn pan_moves_by_fixed_step() {
        let mut cam = Camera::new([0.0, 0.0], 0.04);
        cam.pan(&held(false, false, false, true));
        assert_eq!(cam.offset, [PAN_STEP, 0.0]);
    }

    #[test]
    fn opposite_directions_cancel_exactly() {
        let mut cam = Camera::new([0.3, -0.2], 0.04);
        cam.pan(&held(true, true, true, true));
        assert_eq!(cam.offset, [0.3, -0.2]);
    }

    #[test]
    fn pan_step_ignores_zoom() {
        let mut near = Camera::new([0.0, 0.0], 10.0);
        let mut far = Camera::new([0.0, 0.0], 0.001);
        let input = held(true, false, false, false);
        near.pan(&input);
        far.pan(&input);
        assert_eq!(near.offset, far.offset);
    }

    #[test]
    fn zoom_scales_quad_len() {
        let mut cam = Camera::new([0.0, 0.0], 1.0);
        cam.zoom(2.0, [0.0, 0.0]);
        assert!((cam.quad_len - 1.2).abs() < 1e-6);
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed() {
        // The world point under the cursor must not move: the cursor's
        // offset-relative position scales by exactly the zoom factor.
        let mut cam = Camera::new([-1.0, -0.5], 0.04);
        let cursor = [0.25, -0.75];
        let rel_before = [cursor[0] - cam.offset[0], cursor[1] - cam.offset[1]];

        cam.zoom(3.0, cursor);

        let factor = 1.0 + 3.0 / 10.0;
        for axis in 0..2 {
            let rel_after = cursor[axis] - cam.offset[axis];
            assert!((rel_after - rel_before[axis] * factor).abs() < 1e-6);
        }
    }

    #[test]
    fn zoom_inverse_restores_state() {
        let mut cam = Camera::new([-1.0, -1.0], 0.04);
        let cursor = [0.4, 0.6];
        let s = 2.5;

        cam.zoom(s, cursor);
        cam.zoom(-s / (1.0 + s / 10.0), cursor);

        assert!((cam.quad_len - 0.04).abs() < 1e-6);
        assert!((cam.offset[0] - -1.0).abs() < 1e-5);
        assert!((cam.offset[1] - -1.0).abs() < 1e-5);
    }

    #[test]
    fn zoom_is_unclamped() {
        let mut cam = Camera::new([0.0, 0.0], 1.0);
        cam.zoom(-20.0, [0.0, 0.0]); // factor −1: quad length goes negative
        assert!(cam.quad_len < 0.0);
        cam.zoom(-10.0, [0.5, 0.5]); // factor 0: collapses to zero
        assert_eq!(cam.quad_len, 0.0);
    }

    #[test]
    fn zero_scroll_is_identity() {
        let mut cam = Camera::new([0.7, -0.3], 0.08);
        cam.zoom(0.0, [0.9, 0.9]);
        assert_eq!(cam, Camera::new([0.7, -0.3], 0.08));
    }
}
