//! The cube model and its in-place transforms.
//!
//! A [`Cube`] owns a fixed arena of eight vertices. Edges and faces never
//! hold coordinates of their own: they are index views into that arena built
//! from the constant [`EDGES`] and [`FACES`] tables, so they always reflect
//! the live vertex positions after any rotation or translation.
//!
//! # Vertex numbering
//!
//! Vertex `i` sits at `center + (±h, ±h, ±h)` with `h = side / 2`, where bit 0
//! of `i` picks the sign of x, bit 1 the sign of y and bit 2 the sign of z
//! (set bit = positive).
//!
//! `h` is a float division, so an odd side keeps its full width: side 7 gives
//! `h = 3.5` and a cube 7 units wide, not `h = 3` and a 6 unit cube as integer
//! halving would.
//!
//! ```text
//!        6 -------- 7
//!       /|         /|       +y
//!      2 -------- 3 |        |  +z
//!      | 4 -------|-5        | /
//!      |/         |/         |/___ +x
//!      0 -------- 1
//! ```

use crate::colors::Color;
use crate::math::vec3::Vec3;
use crate::math::Axis;

pub const VERTEX_COUNT: usize = 8;
pub const EDGE_COUNT: usize = 12;
pub const FACE_COUNT: usize = 6;

/// Multiplier applied to a face's depth metric before it is subtracted from
/// the base color.
pub const DEPTH_SHADE_FACTOR: f32 = 2.0;

/// Pivot used by [`Cube::rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Space {
    /// Rotate about the world origin.
    World,
    /// Rotate about the cube's own centroid.
    #[default]
    Local,
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Space::World => write!(f, "world"),
            Space::Local => write!(f, "local"),
        }
    }
}

/// A pair of indices into the cube's vertex arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

/// Four indices into the vertex arena describing a planar quad.
///
/// The quad is drawn as the triangles `(top_right, top_left, bottom_left)`
/// and `(bottom_left, bottom_right, top_right)`, which share the
/// `top_right`/`bottom_left` diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad {
    pub top_right: usize,
    pub top_left: usize,
    pub bottom_right: usize,
    pub bottom_left: usize,
}

impl Quad {
    pub const fn new(
        top_right: usize,
        top_left: usize,
        bottom_right: usize,
        bottom_left: usize,
    ) -> Self {
        Self {
            top_right,
            top_left,
            bottom_right,
            bottom_left,
        }
    }
}

/// A quad together with its current shading color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub quad: Quad,
    pub color: Color,
}

const fn edge(start: usize, end: usize) -> Edge {
    Edge { start, end }
}

// Topology is fixed for every cube; do not reorder.
pub const EDGES: [Edge; EDGE_COUNT] = [
    edge(6, 2),
    edge(6, 4),
    edge(6, 7),
    edge(3, 1),
    edge(3, 2),
    edge(3, 7),
    edge(0, 1),
    edge(0, 2),
    edge(0, 4),
    edge(5, 1),
    edge(5, 4),
    edge(5, 7),
];

pub const FACES: [Quad; FACE_COUNT] = [
    Quad::new(3, 2, 1, 0),
    Quad::new(6, 7, 4, 5),
    Quad::new(2, 6, 0, 4),
    Quad::new(7, 3, 5, 1),
    Quad::new(7, 6, 3, 2),
    Quad::new(1, 0, 5, 4),
];

/// Names for the entries of [`EDGES`], by position in the initial pose.
///
/// "Near" is the `-z` side of the cube and "far" the `+z` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeId {
    TopLeft,
    FarLeft,
    FarTop,
    NearRight,
    NearTop,
    TopRight,
    NearBottom,
    NearLeft,
    BottomLeft,
    BottomRight,
    FarBottom,
    FarRight,
}

impl EdgeId {
    pub const ALL: [EdgeId; EDGE_COUNT] = [
        EdgeId::TopLeft,
        EdgeId::FarLeft,
        EdgeId::FarTop,
        EdgeId::NearRight,
        EdgeId::NearTop,
        EdgeId::TopRight,
        EdgeId::NearBottom,
        EdgeId::NearLeft,
        EdgeId::BottomLeft,
        EdgeId::BottomRight,
        EdgeId::FarBottom,
        EdgeId::FarRight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn edge(self) -> Edge {
        EDGES[self as usize]
    }
}

/// Names for the entries of [`FACES`], by the side of the cube they cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceId {
    Near,
    Far,
    Left,
    Right,
    Top,
    Bottom,
}

impl FaceId {
    pub const ALL: [FaceId; FACE_COUNT] = [
        FaceId::Near,
        FaceId::Far,
        FaceId::Left,
        FaceId::Right,
        FaceId::Top,
        FaceId::Bottom,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn quad(self) -> Quad {
        FACES[self as usize]
    }
}

/// Darkens `base` by the depth of a face.
///
/// `top_right_z + bottom_left_z` is scaled by [`DEPTH_SHADE_FACTOR`] and
/// clamped to `[0, 255]`, then subtracted from each color channel. Channels
/// never drop below 1 so that far faces stay faintly visible.
pub fn depth_shade(base: Color, top_right_z: f32, bottom_left_z: f32) -> Color {
    let middle_z = ((top_right_z + bottom_left_z) * DEPTH_SHADE_FACTOR).clamp(0.0, 255.0);
    let channel = |c: u8| (c as f32 - middle_z).clamp(1.0, 255.0) as u8;
    Color {
        r: channel(base.r),
        g: channel(base.g),
        b: channel(base.b),
        a: base.a.max(1),
    }
}

/// A cube built from eight vertices in camera space.
///
/// The centroid is a cache of the mean of the vertices. Every operation that
/// can move the mean (a non-zero [`translate`](Cube::translate) or a
/// world-space rotation) recomputes it before returning, so
/// [`centroid`](Cube::centroid) is never stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    vertices: [Vec3; VERTEX_COUNT],
    centroid: Vec3,
    side: i32,
    base_color: Color,
    face_colors: [Color; FACE_COUNT],
}

impl Cube {
    /// Builds an axis-aligned cube centered on `center`.
    pub fn new(center: Vec3, side: i32, base_color: Color) -> Self {
        let half = side as f32 / 2.0;
        let offset = |bit: bool| if bit { half } else { -half };
        let vertices = std::array::from_fn(|i| {
            center
                + Vec3::new(
                    offset(i & 1 != 0),
                    offset(i & 2 != 0),
                    offset(i & 4 != 0),
                )
        });

        let mut cube = Self {
            vertices,
            centroid: center,
            side,
            base_color,
            face_colors: [base_color; FACE_COUNT],
        };
        cube.refresh_centroid();
        cube.refresh_shading();
        cube
    }

    pub fn vertices(&self) -> &[Vec3; VERTEX_COUNT] {
        &self.vertices
    }

    /// # Panics
    /// Panics if `index >= VERTEX_COUNT`.
    pub fn vertex(&self, index: usize) -> Vec3 {
        self.vertices[index]
    }

    pub fn side(&self) -> i32 {
        self.side
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    /// Changes the base color and re-derives face shading from it.
    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
        self.refresh_shading();
    }

    /// The cached mean of the eight vertices.
    pub fn centroid(&self) -> Vec3 {
        self.centroid
    }

    pub fn edge(&self, id: EdgeId) -> Edge {
        id.edge()
    }

    /// Current endpoints of an edge.
    pub fn edge_endpoints(&self, id: EdgeId) -> (Vec3, Vec3) {
        let e = id.edge();
        (self.vertices[e.start], self.vertices[e.end])
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        EDGES.iter().copied()
    }

    pub fn face(&self, id: FaceId) -> Face {
        Face {
            quad: id.quad(),
            color: self.face_colors[id.index()],
        }
    }

    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        FaceId::ALL.into_iter().map(|id| self.face(id))
    }

    /// Rotates every vertex about `axis` by `angle` radians.
    pub fn rotate(&mut self, axis: Axis, angle: f32, space: Space) {
        match space {
            Space::World => self.rotate_world(axis, angle),
            Space::Local => self.rotate_local(axis, angle),
        }
    }

    /// Rotates about an axis through the world origin.
    ///
    /// This moves the centroid unless it lies on the axis, so the cache is
    /// recomputed afterwards.
    pub fn rotate_world(&mut self, axis: Axis, angle: f32) {
        for v in self.vertices.iter_mut() {
            *v = v.rotate(axis, angle);
        }
        self.refresh_centroid();
    }

    /// Rotates in place about an axis through the cube's centroid.
    pub fn rotate_local(&mut self, axis: Axis, angle: f32) {
        // Pivot is read once; it must not follow the vertices mid-loop.
        let pivot = self.centroid;
        for v in self.vertices.iter_mut() {
            *v = v.rotate_about(axis, angle, pivot);
        }
    }

    /// Moves every vertex by `delta`, then refreshes face shading.
    ///
    /// A zero `delta` leaves the vertices and the centroid untouched; shading
    /// is still refreshed so it tracks any rotation since the last call.
    pub fn translate(&mut self, delta: Vec3) {
        if !delta.is_zero() {
            for v in self.vertices.iter_mut() {
                *v += delta;
            }
            self.refresh_centroid();
        }
        self.refresh_shading();
    }

    /// Re-derives every face color from the base color and current depth.
    pub fn refresh_shading(&mut self) {
        for (color, quad) in self.face_colors.iter_mut().zip(FACES.iter()) {
            *color = depth_shade(
                self.base_color,
                self.vertices[quad.top_right].z,
                self.vertices[quad.bottom_left].z,
            );
        }
    }

    fn refresh_centroid(&mut self) {
        let sum = self
            .vertices
            .iter()
            .fold(Vec3::ZERO, |acc, &v| acc + v);
        self.centroid = sum / VERTEX_COUNT as f32;
    }
}
