//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a view into a color buffer with bounds-checked access.

/// Row-major index of `(x, y)` in a `width` x `height` buffer, if in bounds.
#[inline]
pub(crate) fn pixel_index(x: i32, y: i32, width: u32, height: u32) -> Option<usize> {
    if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
        Some((y as u32 * width + x as u32) as usize)
    } else {
        None
    }
}

/// A view into an ARGB8888 color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass the buffer and its dimensions together.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height.
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = pixel_index(x, y, self.width, self.height) {
            self.color_buffer[idx] = color;
        }
    }

    /// Fill the pixels `x_start..=x_end` of row `y`, clipped to the buffer.
    #[inline]
    pub fn fill_span(&mut self, y: i32, x_start: i32, x_end: i32, color: u32) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let x_start = x_start.max(0);
        let x_end = x_end.min(self.width as i32 - 1);
        if x_start > x_end {
            return;
        }
        let row = (y as u32 * self.width) as usize;
        self.color_buffer[row + x_start as usize..=row + x_end as usize].fill(color);
    }
}
