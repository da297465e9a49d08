//! Perspective projection from camera space to pixels.
//!
//! The eye sits at the origin looking down +Z. A point is projected by
//! dividing `x` and `y` by its depth, which yields normalized device
//! coordinates in `[-1, 1]` for anything inside a 90 degree frustum. Those
//! are then mapped onto the largest centered square that fits the screen, so
//! the image keeps its aspect ratio and is letterboxed on the longer axis.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Smallest depth used for the perspective divide.
///
/// Points at or behind this depth are clamped onto it, which avoids the
/// blow-up near `z = 0` and the sign flip behind the eye.
pub const NEAR_Z: f32 = 0.01;

/// Drawable area in pixels. May change from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
}

impl Screen {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Side of the centered square that NDC space is mapped onto.
    pub fn shorter_side(&self) -> f32 {
        self.width.min(self.height) as f32
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }
}

/// Divides `x` and `y` by depth, clamping depth to [`NEAR_Z`].
#[inline]
pub fn perspective_divide(p: Vec3) -> Vec2 {
    let z = if p.z <= NEAR_Z { NEAR_Z } else { p.z };
    Vec2::new(p.x / z, p.y / z)
}

/// Maps normalized device coordinates to pixel coordinates.
///
/// `+y` is up in NDC and down on screen, so the vertical axis is flipped.
#[inline]
pub fn to_screen(ndc: Vec2, screen: Screen) -> Vec2 {
    let w = screen.width as f32;
    let h = screen.height as f32;
    let s = screen.shorter_side();
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * s + (w - s) * 0.5,
        (1.0 - (ndc.y + 1.0) * 0.5) * s + (h - s) * 0.5,
    )
}

/// Projects a camera-space point to pixel coordinates.
#[inline]
pub fn project(p: Vec3, screen: Screen) -> Vec2 {
    to_screen(perspective_divide(p), screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_on_view_axis_lands_on_center_of_square_screen() {
        let screen = Screen::new(600, 600);
        for z in [0.02, 0.5, 1.0, 20.0, 1000.0] {
            let p = project(Vec3::new(0.0, 0.0, z), screen);
            assert_eq!(p, Vec2::new(300.0, 300.0));
        }
    }

    #[test]
    fn ndc_corners_map_to_letterboxed_square() {
        let screen = Screen::new(800, 600);
        let top_left = to_screen(Vec2::new(-1.0, 1.0), screen);
        let bottom_right = to_screen(Vec2::new(1.0, -1.0), screen);
        assert_relative_eq!(top_left.x, 100.0);
        assert_relative_eq!(top_left.y, 0.0);
        assert_relative_eq!(bottom_right.x, 700.0);
        assert_relative_eq!(bottom_right.y, 600.0);
    }

    #[test]
    fn tall_screen_letterboxes_vertically() {
        let screen = Screen::new(400, 1000);
        let top = to_screen(Vec2::new(0.0, 1.0), screen);
        assert_relative_eq!(top.x, 200.0);
        assert_relative_eq!(top.y, 300.0);
    }

    #[test]
    fn y_axis_is_flipped() {
        let screen = Screen::new(800, 600);
        let up = project(Vec3::new(0.0, 1.0, 10.0), screen);
        let down = project(Vec3::new(0.0, -1.0, 10.0), screen);
        assert!(up.y < down.y);
    }

    #[test]
    fn depth_at_or_behind_eye_is_clamped() {
        let screen = Screen::new(800, 600);
        let at_near = project(Vec3::new(0.001, 0.002, NEAR_Z), screen);
        let at_eye = project(Vec3::new(0.001, 0.002, 0.0), screen);
        let behind = project(Vec3::new(0.001, 0.002, -5.0), screen);
        assert_eq!(at_eye, at_near);
        assert_eq!(behind, at_near);
        assert!(behind.is_finite());
    }

    #[test]
    fn projection_is_monotonic_in_x_over_z() {
        let screen = Screen::new(800, 600);
        let mut last = f32::NEG_INFINITY;
        for i in -10..=10 {
            let p = project(Vec3::new(i as f32, 0.0, 10.0), screen);
            assert!(p.x > last);
            last = p.x;
        }
    }

    #[test]
    fn farther_points_move_toward_center() {
        let screen = Screen::new(800, 600);
        let near = project(Vec3::new(5.0, 5.0, 10.0), screen);
        let far = project(Vec3::new(5.0, 5.0, 40.0), screen);
        let center = screen.center();
        assert!((far.x - center.x).abs() < (near.x - center.x).abs());
        assert!((far.y - center.y).abs() < (near.y - center.y).abs());
    }
}
