//! A rotating cube drawn with a fake perspective projection.
//!
//! Eight vertices are rotated in place, divided by their depth, mapped onto
//! the screen and drawn either as a wireframe or as depth-shaded faces. All
//! drawing happens on the CPU; SDL2 is only used for the window.
//!
//! # Quick Start
//!
//! ```ignore
//! use fake3d::prelude::*;
//!
//! let config = Config::default();
//! let mut window = Window::new(&config.title, config.width, config.height)?;
//! let mut engine = Engine::new(&config);
//! engine.update(1.0 / 60.0);
//! engine.render();
//! window.present(engine.frame_buffer())?;
//! ```

pub mod colors;
pub mod config;
pub mod cube;
pub mod engine;
pub mod error;
pub mod math;
pub mod projection;
pub mod render;
pub mod scene;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::Config;
pub use cube::Cube;
pub use engine::Engine;
pub use error::{Error, Result};
pub use projection::{project, Screen};
pub use scene::{ProjectedCube, RenderMode};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use fake3d::prelude::*;
/// ```
pub mod prelude {
    // Configuration
    pub use crate::config::{Cli, Config, Spin};

    // Engine
    pub use crate::engine::Engine;
    pub use crate::error::{Error, Result};

    // Model
    pub use crate::colors::Color;
    pub use crate::cube::{Cube, EdgeId, FaceId, Space};

    // Projection
    pub use crate::projection::{project, Screen};

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::Axis;

    // Rendering
    pub use crate::render::{DrawSurface, Renderer};
    pub use crate::scene::{ProjectedCube, RenderMode};

    // Window & Input
    pub use crate::window::{FpsCounter, FrameLimiter, Window, WindowEvent};
}
