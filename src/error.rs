//! Errors from window and display setup.
//!
//! Everything on the cube pipeline itself (projection, transforms, drawing)
//! is total, so only the SDL-facing frame driver can fail.

/// Setup and presentation failures. SDL reports all of these as strings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to initialize SDL: {0}")]
    Sdl(String),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create frame texture: {0}")]
    Texture(String),
    #[error("failed to present frame: {0}")]
    Present(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
