//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and implements
//! basic drawing operations like lines, circles and filled triangles.

use super::framebuffer::{pixel_index, FrameBuffer};
use super::rasterizer::EdgeFunctionRasterizer;
use super::DrawSurface;
use crate::colors::{self, Color};
use crate::math::vec2::Vec2;

pub struct Renderer {
    color_buffer: Vec<u32>,
    rasterizer: EdgeFunctionRasterizer,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND.to_argb(); size],
            rasterizer: EdgeFunctionRasterizer::new(),
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND.to_argb(); size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color.to_argb());
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        pixel_index(x, y, self.width, self.height).map(|idx| self.color_buffer[idx])
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// For each step along the major axis we decide whether to also step
    /// along the minor axis based on an accumulated error term, using only
    /// integer arithmetic. The error terms are `i64` so any pair of `i32`
    /// endpoints is safe; callers should clip first to keep the walk short.
    pub fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;
        let mut fb = self.as_framebuffer();

        loop {
            // x and y stay between the i32 endpoints.
            fb.set_pixel(x as i32, y as i32, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both conditions can hold, giving a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Fills every pixel whose center lies within `radius` of `(cx, cy)`.
    pub fn draw_filled_circle(&mut self, cx: f32, cy: f32, radius: f32, color: u32) {
        if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) || radius < 0.0 {
            return;
        }

        let r2 = radius * radius;
        let y_start = (cy - radius).floor() as i32;
        let y_end = (cy + radius).ceil() as i32;
        let mut fb = self.as_framebuffer();

        for y in y_start..=y_end {
            let dy = y as f32 + 0.5 - cy;
            let span2 = r2 - dy * dy;
            if span2 < 0.0 {
                continue;
            }
            let half = span2.sqrt();
            // Pixel x is covered when x + 0.5 lies in [cx - half, cx + half].
            let x_start = (cx - half - 0.5).ceil() as i32;
            let x_end = (cx + half - 0.5).floor() as i32;
            fb.fill_span(y, x_start, x_end, color);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8, and the
        // byte slice borrows `self`, so it cannot outlive the buffer.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }
}

impl DrawSurface for Renderer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        let Some((start, end)) = clip_line(start, end, self.width, self.height) else {
            return;
        };
        self.draw_line_bresenham(
            start.x as i32,
            start.y as i32,
            end.x as i32,
            end.y as i32,
            color.to_argb(),
        );
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_filled_circle(center.x, center.y, radius, color.to_argb());
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let rasterizer = self.rasterizer;
        let mut fb = self.as_framebuffer();
        rasterizer.fill_triangle([a, b, c], &mut fb, color.to_argb());
    }
}

/// Clips the segment `start..end` to the pixel rectangle
/// `[0, width - 1] x [0, height - 1]` (Liang-Barsky).
///
/// Returns `None` when nothing of the segment is on screen. Points clamped
/// onto the near plane can project billions of pixels away, so the clip runs
/// in `f64` and a clipped endpoint is placed exactly on the boundary it was
/// clipped against.
fn clip_line(start: Vec2, end: Vec2, width: u32, height: u32) -> Option<(Vec2, Vec2)> {
    if width == 0 || height == 0 || !(start.is_finite() && end.is_finite()) {
        return None;
    }
    let (x0, y0) = (f64::from(start.x), f64::from(start.y));
    let (dx, dy) = (f64::from(end.x) - x0, f64::from(end.y) - y0);
    let max_x = f64::from(width - 1);
    let max_y = f64::from(height - 1);

    // (p, q, axis, bound): the point at t is inside when p * t <= q.
    let boundaries = [
        (-dx, x0, ClipAxis::X, 0.0),
        (dx, max_x - x0, ClipAxis::X, max_x),
        (-dy, y0, ClipAxis::Y, 0.0),
        (dy, max_y - y0, ClipAxis::Y, max_y),
    ];

    let mut enter = (0.0_f64, None);
    let mut exit = (1.0_f64, None);
    for (p, q, axis, bound) in boundaries {
        if p == 0.0 {
            // Parallel to this boundary and outside it.
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > enter.0 {
                enter = (t, Some((axis, bound)));
            }
        } else if t < exit.0 {
            exit = (t, Some((axis, bound)));
        }
        if enter.0 > exit.0 {
            return None;
        }
    }

    let point = |original: Vec2, (t, snap): (f64, Option<(ClipAxis, f64)>)| {
        let Some((axis, bound)) = snap else {
            return original;
        };
        let (x, y) = match axis {
            ClipAxis::X => (bound, (y0 + t * dy).clamp(0.0, max_y)),
            ClipAxis::Y => ((x0 + t * dx).clamp(0.0, max_x), bound),
        };
        Vec2::new(x as f32, y as f32)
    };
    Some((point(start, enter), point(end, exit)))
}

#[derive(Clone, Copy)]
enum ClipAxis {
    X,
    Y,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Cube;
    use crate::math::vec3::Vec3;
    use crate::projection::Screen;
    use crate::scene::{ProjectedCube, RenderMode};

    const ON: u32 = 0xFFFF_FFFF;

    fn lit(renderer: &Renderer) -> usize {
        let bg = colors::BACKGROUND.to_argb();
        (0..renderer.height() as i32)
            .flat_map(|y| (0..renderer.width() as i32).map(move |x| (x, y)))
            .filter(|&(x, y)| renderer.pixel(x, y) != Some(bg))
            .count()
    }

    #[test]
    fn horizontal_line_covers_both_endpoints() {
        let mut r = Renderer::new(16, 16);
        r.draw_line_bresenham(2, 5, 9, 5, ON);
        assert_eq!(lit(&r), 8);
        assert_eq!(r.pixel(2, 5), Some(ON));
        assert_eq!(r.pixel(9, 5), Some(ON));
    }

    #[test]
    fn diagonal_line_steps_both_axes() {
        let mut r = Renderer::new(16, 16);
        r.draw_line_bresenham(10, 10, 0, 0, ON);
        assert_eq!(lit(&r), 11);
        for i in 0..=10 {
            assert_eq!(r.pixel(i, i), Some(ON));
        }
    }

    #[test]
    fn line_leaving_the_buffer_is_clipped() {
        let mut r = Renderer::new(8, 8);
        r.draw_line(Vec2::new(-20.0, 3.0), Vec2::new(20.0, 3.0), colors::WHITE);
        assert_eq!(lit(&r), 8);
    }

    #[test]
    fn line_with_huge_endpoints_is_clipped_before_walking() {
        let mut r = Renderer::new(800, 600);
        r.draw_line(
            Vec2::new(-3.0e9, 300.0),
            Vec2::new(3.0e9, 300.0),
            colors::WHITE,
        );
        assert_eq!(lit(&r), 800);
        assert_eq!(r.pixel(0, 300), Some(ON));
        assert_eq!(r.pixel(799, 300), Some(ON));

        // Entirely off screen, far past the i32 range.
        r.clear(colors::BACKGROUND);
        r.draw_line(
            Vec2::new(-2_999_999_700.0, 3_000_000_300.0),
            Vec2::new(3_000_000_300.0, 3_000_000_300.0),
            colors::WHITE,
        );
        assert_eq!(lit(&r), 0);
    }

    #[test]
    fn offscreen_diagonal_keeps_its_slope() {
        let mut r = Renderer::new(100, 100);
        r.draw_line(
            Vec2::new(-1.0e9, -1.0e9),
            Vec2::new(1.0e9, 1.0e9),
            colors::WHITE,
        );
        assert_eq!(lit(&r), 100);
        assert_eq!(r.pixel(0, 0), Some(ON));
        for y in 0..100 {
            for x in 0..100 {
                if r.pixel(x, y) == Some(ON) {
                    assert!((x - y).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn clip_line_keeps_inside_segments_and_rejects_outside_ones() {
        let inside = (Vec2::new(1.0, 2.0), Vec2::new(5.0, 6.0));
        assert_eq!(clip_line(inside.0, inside.1, 8, 8), Some(inside));
        assert_eq!(
            clip_line(Vec2::new(-5.0, -1.0), Vec2::new(20.0, -1.0), 8, 8),
            None
        );
        assert_eq!(
            clip_line(Vec2::new(10.0, 0.0), Vec2::new(20.0, 7.0), 8, 8),
            None
        );
        assert_eq!(
            clip_line(Vec2::new(f32::NAN, 0.0), Vec2::new(1.0, 1.0), 8, 8),
            None
        );
        assert_eq!(clip_line(inside.0, inside.1, 0, 8), None);
    }

    #[test]
    fn huge_cube_straddling_the_eye_draws_in_both_modes() {
        let cube = Cube::new(Vec3::ZERO, 200_000, colors::RED);
        let projected = ProjectedCube::from_cube(&cube, Screen::new(800, 600));
        let mut r = Renderer::new(800, 600);
        projected.draw(&mut r, RenderMode::Wireframe, 10.0, colors::WHITE);
        projected.draw(&mut r, RenderMode::Solid, 10.0, colors::WHITE);
    }

    #[test]
    fn circle_is_symmetric_and_bounded() {
        let mut r = Renderer::new(32, 32);
        r.draw_circle(Vec2::new(16.0, 16.0), 5.0, colors::WHITE);
        assert_eq!(r.pixel(16, 16), Some(ON));
        assert_eq!(r.pixel(11, 16), Some(ON));
        assert_eq!(r.pixel(20, 16), Some(ON));
        assert_eq!(r.pixel(16, 11), Some(ON));
        assert_eq!(r.pixel(16, 20), Some(ON));
        assert_ne!(r.pixel(21, 16), Some(ON));
        assert_ne!(r.pixel(11, 11), Some(ON));
        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(r.pixel(x, y), r.pixel(31 - x, y));
                assert_eq!(r.pixel(x, y), r.pixel(x, 31 - y));
            }
        }
    }

    #[test]
    fn clear_and_resize_reset_the_buffer() {
        let mut r = Renderer::new(4, 4);
        r.clear(colors::RED);
        assert_eq!(r.pixel(3, 3), Some(colors::RED.to_argb()));
        r.resize(6, 2);
        assert_eq!(r.as_bytes().len(), 6 * 2 * 4);
        assert_eq!(r.pixel(5, 1), Some(colors::BACKGROUND.to_argb()));
        assert_eq!(r.pixel(0, 2), None);
    }

    #[test]
    fn fill_triangle_uses_color() {
        let mut r = Renderer::new(16, 16);
        r.fill_triangle(
            Vec2::new(0.0, 0.0),
            Vec2::new(15.0, 0.0),
            Vec2::new(0.0, 15.0),
            colors::BLUE,
        );
        assert_eq!(r.pixel(1, 1), Some(colors::BLUE.to_argb()));
        assert_eq!(r.pixel(14, 14), Some(colors::BACKGROUND.to_argb()));
    }
}
