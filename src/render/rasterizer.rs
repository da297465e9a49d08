//! Edge function-based triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute a bounding box around the triangle, clipped to the buffer
//! 2. For each pixel center in the box, evaluate three edge functions
//! 3. The pixel is inside if all three have the same sign
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! which is the 2D cross product (B - A) × (P - A). The sign of the total
//! signed area tells us the winding, so clockwise and counter-clockwise
//! triangles are both accepted. Cube faces rotate through both orientations
//! every turn, and no culling happens upstream.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2;

/// Flat-color triangle rasterizer using the edge function algorithm.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Signed area of the parallelogram spanned by (B - A) and (P - A).
    #[inline]
    fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
        (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
    }

    /// Fill a triangle with a single color.
    pub fn fill_triangle(&self, points: [Vec2; 3], buffer: &mut FrameBuffer, color: u32) {
        let [v0, v1, v2] = points;
        if !(v0.is_finite() && v1.is_finite() && v2.is_finite()) {
            return;
        }

        let area = Self::edge_function(v0, v1, v2);
        if area.abs() < f32::EPSILON {
            return; // Degenerate triangle
        }

        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at pixel center
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

                let w0 = Self::edge_function(v1, v2, p);
                let w1 = Self::edge_function(v2, v0, p);
                let w2 = Self::edge_function(v0, v1, p);

                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };

                if inside {
                    buffer.set_pixel(x, y, color);
                }
            }
        }
    }
}
