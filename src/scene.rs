//! Turning a [`Cube`] into 2D draw calls.
//!
//! [`ProjectedCube`] is a per-frame snapshot of a cube in pixel space. It is
//! allocated once and overwritten every frame by
//! [`project_from`](ProjectedCube::project_from), then handed to a
//! [`DrawSurface`] by [`draw`](ProjectedCube::draw).

use crate::colors::{Color, VERTEX_PALETTE};
use crate::cube::{Cube, EDGE_COUNT, FACE_COUNT, VERTEX_COUNT};
use crate::math::vec2::Vec2;
use crate::projection::{project, Screen};
use crate::render::DrawSurface;

/// How the cube is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Edges as lines plus a dot on every vertex.
    Wireframe,
    /// Faces filled with their depth shading.
    #[default]
    Solid,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Wireframe => RenderMode::Solid,
            RenderMode::Solid => RenderMode::Wireframe,
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Wireframe => write!(f, "wireframe"),
            RenderMode::Solid => write!(f, "solid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectedEdge {
    pub start: Vec2,
    pub end: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProjectedFace {
    pub top_right: Vec2,
    pub top_left: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
    pub color: Color,
}

impl ProjectedFace {
    /// `(tr, tl, bl)` and `(bl, br, tr)`: two triangles sharing the
    /// `top_right`/`bottom_left` diagonal.
    pub fn triangles(&self) -> [[Vec2; 3]; 2] {
        [
            [self.top_right, self.top_left, self.bottom_left],
            [self.bottom_left, self.bottom_right, self.top_right],
        ]
    }
}

/// A cube projected to pixel coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedCube {
    pub vertices: [Vec2; VERTEX_COUNT],
    pub edges: [ProjectedEdge; EDGE_COUNT],
    pub faces: [ProjectedFace; FACE_COUNT],
}

impl ProjectedCube {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cube(cube: &Cube, screen: Screen) -> Self {
        let mut projected = Self::new();
        projected.project_from(cube, screen);
        projected
    }

    /// Overwrites this snapshot with `cube` as seen on `screen`.
    pub fn project_from(&mut self, cube: &Cube, screen: Screen) {
        for (out, &v) in self.vertices.iter_mut().zip(cube.vertices()) {
            *out = project(v, screen);
        }

        // Vertices are projected once; edges and faces reuse them.
        let vertices = &self.vertices;
        for (out, edge) in self.edges.iter_mut().zip(cube.edges()) {
            *out = ProjectedEdge {
                start: vertices[edge.start],
                end: vertices[edge.end],
            };
        }
        for (out, face) in self.faces.iter_mut().zip(cube.faces()) {
            let quad = face.quad;
            *out = ProjectedFace {
                top_right: vertices[quad.top_right],
                top_left: vertices[quad.top_left],
                bottom_right: vertices[quad.bottom_right],
                bottom_left: vertices[quad.bottom_left],
                color: face.color,
            };
        }
    }

    /// Issues the draw calls for this snapshot.
    ///
    /// Solid mode does no depth sorting and no back-face culling: faces are
    /// drawn in table order, so at some angles a far face can paint over a
    /// near one.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        mode: RenderMode,
        point_radius: f32,
        line_color: Color,
    ) {
        match mode {
            RenderMode::Wireframe => {
                for edge in &self.edges {
                    surface.draw_line(edge.start, edge.end, line_color);
                }
                for (&vertex, &color) in self.vertices.iter().zip(VERTEX_PALETTE.iter()) {
                    surface.draw_circle(vertex, point_radius, color);
                }
            }
            RenderMode::Solid => {
                for face in &self.faces {
                    for [a, b, c] in face.triangles() {
                        surface.fill_triangle(a, b, c, face.color);
                    }
                }
            }
        }
    }
}
