//! Core rendering engine.
//!
//! The [`Engine`] owns the cube, its per-frame projection and the CPU
//! color buffer. The frame driver calls [`Engine::update`] and
//! [`Engine::render`] once per frame and uploads [`Engine::frame_buffer`].

use tracing::debug;

use crate::colors::{self, Color};
use crate::config::{Config, Spin};
use crate::cube::Cube;
use crate::math::vec3::Vec3;
use crate::projection::Screen;
use crate::render::{DrawSurface, Renderer};
use crate::scene::{ProjectedCube, RenderMode};

pub struct Engine {
    renderer: Renderer,
    cube: Cube,
    projected: ProjectedCube,
    render_mode: RenderMode,
    spin: Spin,
    drift: Vec3,
    line_color: Color,
    point_radius: f32,
}

impl Engine {
    pub fn new(config: &Config) -> Self {
        Self {
            renderer: Renderer::new(config.width, config.height),
            cube: Cube::new(config.cube_center, config.cube_side, config.cube_color),
            projected: ProjectedCube::new(),
            render_mode: config.render_mode,
            spin: config.spin,
            drift: config.drift,
            line_color: config.line_color,
            point_radius: config.point_radius,
        }
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        if mode != self.render_mode {
            debug!(%mode, "render mode changed");
        }
        self.render_mode = mode;
    }

    pub fn toggle_render_mode(&mut self) {
        self.set_render_mode(self.render_mode.toggled());
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        debug!(width, height, "resizing color buffer");
        self.renderer.resize(width, height);
    }

    pub fn screen(&self) -> Screen {
        self.renderer.screen()
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn cube_mut(&mut self) -> &mut Cube {
        &mut self.cube
    }

    /// The snapshot produced by the last [`render`](Engine::render).
    pub fn projected(&self) -> &ProjectedCube {
        &self.projected
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Advances the cube by `dt` seconds of spin and drift.
    ///
    /// The translation always runs, even with no drift, because it is what
    /// refreshes face shading after the rotation.
    pub fn update(&mut self, dt: f32) {
        let Spin {
            axis,
            space,
            radians_per_second,
        } = self.spin;
        let angle = radians_per_second * dt;
        if angle != 0.0 {
            self.cube.rotate(axis, angle, space);
        }
        self.cube.translate(self.drift * dt);
    }

    /// Render the current frame
    pub fn render(&mut self) {
        self.renderer.clear(colors::BACKGROUND);
        self.projected.project_from(&self.cube, self.renderer.screen());
        self.projected.draw(
            &mut self.renderer,
            self.render_mode,
            self.point_radius,
            self.line_color,
        );
    }
}
