//! Runtime configuration and command-line parsing.

use std::ffi::OsString;

use clap::Parser;

use crate::colors::{self, Color};
use crate::cube::Space;
use crate::math::vec3::Vec3;
use crate::math::Axis;
use crate::projection::Screen;
use crate::scene::RenderMode;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_FPS: u32 = 144;

/// Command-line flags.
///
/// `--fps` and `--no-fps-limit` override each other, so whichever comes last
/// on the command line wins.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "A rotating cube drawn with a fake perspective projection")]
pub struct Cli {
    /// Run as fast as possible instead of capping the frame rate.
    #[arg(long, overrides_with = "fps")]
    pub no_fps_limit: bool,

    /// Target frame rate. Re-enables the cap.
    #[arg(
        long,
        value_name = "N",
        overrides_with = "no_fps_limit",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub fps: Option<u32>,
}

impl Cli {
    /// The frame-rate cap these flags ask for, `None` meaning uncapped.
    pub fn fps_limit(&self) -> Option<u32> {
        match (self.fps, self.no_fps_limit) {
            (Some(fps), _) => Some(fps),
            (None, true) => None,
            (None, false) => Some(DEFAULT_FPS),
        }
    }
}

/// Rotation applied every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub axis: Axis,
    pub space: Space,
    pub radians_per_second: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            space: Space::Local,
            // 0.01 rad per frame at the default 144 FPS.
            radians_per_second: 1.44,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// `None` disables the frame-rate cap.
    pub fps_limit: Option<u32>,
    pub cube_center: Vec3,
    pub cube_side: i32,
    pub cube_color: Color,
    pub line_color: Color,
    pub point_radius: f32,
    pub render_mode: RenderMode,
    pub spin: Spin,
    /// Translation applied every second.
    pub drift: Vec3,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Fake 3D".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps_limit: Some(DEFAULT_FPS),
            cube_center: Vec3::new(0.0, 0.0, 20.0),
            cube_side: 10,
            cube_color: colors::RED,
            line_color: colors::WHITE,
            point_radius: 10.0,
            render_mode: RenderMode::default(),
            spin: Spin::default(),
            drift: Vec3::ZERO,
        }
    }
}

impl Config {
    /// Builds a config from the process arguments, exiting on `--help` or bad flags.
    pub fn from_env() -> Self {
        Self::from_cli(Cli::parse())
    }

    /// Builds a config from an explicit argument list (first item is the binary name).
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Self::from_cli)
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self {
            fps_limit: cli.fps_limit(),
            ..Self::default()
        }
    }

    pub fn screen(&self) -> Screen {
        Screen::new(self.width, self.height)
    }
}
