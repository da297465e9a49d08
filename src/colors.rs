//! 8-bit RGBA colors and the named palette used by the renderer.
//!
//! The color buffer stores pixels as ARGB8888 `u32`, so [`Color`] converts
//! to that layout via [`Color::to_argb`].

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Packs the color as ARGB8888.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const RED: Color = Color::rgb(230, 41, 55);
pub const GREEN: Color = Color::rgb(0, 228, 48);
pub const BLUE: Color = Color::rgb(0, 121, 241);
pub const YELLOW: Color = Color::rgb(253, 249, 0);
pub const GRAY: Color = Color::rgb(130, 130, 130);
pub const PINK: Color = Color::rgb(255, 109, 194);
pub const PURPLE: Color = Color::rgb(200, 122, 255);
pub const BROWN: Color = Color::rgb(127, 106, 79);

pub const BACKGROUND: Color = BLACK;

/// Per-vertex colors for wireframe mode, indexed by vertex number.
/// Only there to tell the corners apart while debugging.
pub const VERTEX_PALETTE: [Color; 8] = [GREEN, BLUE, RED, YELLOW, GRAY, PINK, PURPLE, BROWN];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing_places_alpha_in_high_byte() {
        assert_eq!(Color::rgba(0x11, 0x22, 0x33, 0x44).to_argb(), 0x4411_2233);
        assert_eq!(WHITE.to_argb(), 0xFFFF_FFFF);
        assert_eq!(BLACK.to_argb(), 0xFF00_0000);
    }

    #[test]
    fn from_argb_inverts_to_argb() {
        assert_eq!(Color::from_argb(RED.to_argb()), RED);
        assert_eq!(Color::from_argb(0x8001_0203), Color::rgba(1, 2, 3, 0x80));
    }
}
