use crate::coords::Vec2;

/// Window size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Maps a logical-pixel position into normalized coordinates: origin
    /// at the viewport center, roughly −1..1 per axis, +Y up.
    ///
    /// This is the space the sandbox camera and cursor live in.
    pub fn normalize(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            (pos.x / self.width - 0.5) * 2.0,
            (pos.y / self.height - 0.5) * -2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let vp = Viewport::new(960.0, 600.0);
        assert_eq!(vp.normalize(Vec2::new(480.0, 300.0)), Vec2::zero());
    }

    #[test]
    fn corners_map_to_unit_square() {
        let vp = Viewport::new(800.0, 400.0);
        // Screen-space top-left is (−1, 1): Y flips.
        assert_eq!(vp.normalize(Vec2::zero()), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.normalize(Vec2::new(800.0, 400.0)), Vec2::new(1.0, -1.0));
    }
}
