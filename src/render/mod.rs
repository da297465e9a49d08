//! CPU drawing surface.
//!
//! [`DrawSurface`] is the seam between the cube pipeline and whatever
//! actually puts pixels somewhere. [`Renderer`] implements it on top of an
//! ARGB8888 color buffer that the window uploads once per frame.

mod framebuffer;
mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::EdgeFunctionRasterizer;
pub use renderer::Renderer;

use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::projection::Screen;

/// Something 2D primitives can be drawn onto.
pub trait DrawSurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Current drawable size.
    fn screen(&self) -> Screen {
        Screen::new(self.width(), self.height())
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color);

    /// Draws a filled circle.
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);
}
