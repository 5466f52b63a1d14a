//! Packed 1-bpp framebuffer mirroring the controller's graphics layer
//!
//! The RA8835 graphics layer stores 8 horizontal pixels per byte, row-major,
//! with the most significant bit being the leftmost pixel of each 8-pixel
//! group. The [`Framebuffer`] keeps an in-memory mirror of that layout so
//! pixel edits cost no bus traffic; the sync engine streams the whole
//! mirror to the device in one burst.
//!
//! ## Example
//!
//! ```
//! use ra8835::framebuffer::pixel_location;
//!
//! // On a 320-wide display, pixel (0,0) is byte 0, MSB
//! let (idx, mask) = pixel_location(0, 0, 320);
//! assert_eq!(idx, 0);
//! assert_eq!(mask, 0x80);
//!
//! // Pixel (8,0) starts the second 8-pixel group
//! let (idx, mask) = pixel_location(8, 0, 320);
//! assert_eq!(idx, 1);
//! assert_eq!(mask, 0x80);
//! ```

use crate::color::Color;
use crate::config::Dimensions;

/// Compute the buffer location of a pixel
///
/// Returns `(byte_index, bit_mask)` for coordinate `(x, y)` on a display
/// `cols` pixels wide: byte index `y * (cols/8) + x/8`, mask
/// `0x80 >> (x % 8)` (MSB-first packing).
///
/// # Example
///
/// ```
/// use ra8835::framebuffer::pixel_location;
///
/// // Pixel (7,0) is the LSB of byte 0
/// let (idx, mask) = pixel_location(7, 0, 320);
/// assert_eq!(idx, 0);
/// assert_eq!(mask, 0x01);
///
/// // Pixel (0,1) starts the second row
/// let (idx, mask) = pixel_location(0, 1, 320);
/// assert_eq!(idx, 40);
/// assert_eq!(mask, 0x80);
/// ```
pub fn pixel_location(x: u16, y: u16, cols: u16) -> (usize, u8) {
    let index = y as usize * (cols as usize / 8) + x as usize / 8;
    let mask = 0x80 >> (x % 8);
    (index, mask)
}

/// In-memory mirror of the device graphics layer
///
/// Owns its backing storage exclusively; allocated once at construction and
/// never resized. Generic over the storage type so `no_std` callers can use
/// a plain array and `alloc` callers a `Vec`.
pub struct Framebuffer<B> {
    /// Backing storage, at least `dimensions.buffer_size()` bytes
    buffer: B,
    /// Display geometry the buffer is laid out for
    dimensions: Dimensions,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap backing storage for the given geometry
    ///
    /// The caller must have verified `buffer.as_ref().len() >=
    /// dimensions.buffer_size()`; [`Display`](crate::Display) construction
    /// does this before building the framebuffer.
    pub(crate) fn new(buffer: B, dimensions: Dimensions) -> Self {
        debug_assert!(buffer.as_ref().len() >= dimensions.buffer_size());
        Self { buffer, dimensions }
    }

    /// Display geometry
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Set or clear one pixel
    ///
    /// Out-of-range coordinates are ignored (callers that need an error use
    /// [`Display::set_pixel`](crate::Display::set_pixel), which checks
    /// bounds first). Only the addressed bit changes; the other 7 pixels in
    /// the byte are untouched.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        if x >= self.dimensions.cols || y >= self.dimensions.rows {
            return;
        }
        let (index, mask) = pixel_location(x, y, self.dimensions.cols);
        let byte = &mut self.buffer.as_mut()[index];
        if color.is_on() {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read back one pixel
    ///
    /// Returns `None` for out-of-range coordinates.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.dimensions.cols || y >= self.dimensions.rows {
            return None;
        }
        let (index, mask) = pixel_location(x, y, self.dimensions.cols);
        if self.buffer.as_ref()[index] & mask != 0 {
            Some(Color::On)
        } else {
            Some(Color::Off)
        }
    }

    /// Fill the whole buffer with one color
    pub fn fill(&mut self, color: Color) {
        let fill = color.fill_byte();
        let len = self.dimensions.buffer_size();
        for byte in &mut self.buffer.as_mut()[..len] {
            *byte = fill;
        }
    }

    /// The packed pixel bytes, in device stream order
    pub fn bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.dimensions.buffer_size()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_framebuffer() -> Framebuffer<alloc::vec::Vec<u8>> {
        let dims = Dimensions::new(240, 320).unwrap();
        Framebuffer::new(alloc::vec![0u8; dims.buffer_size()], dims)
    }

    #[test]
    fn test_msb_first_packing() {
        let mut fb = test_framebuffer();
        fb.set_pixel(0, 0, Color::On);
        assert_eq!(fb.bytes()[0], 0x80);

        fb.set_pixel(7, 0, Color::On);
        assert_eq!(fb.bytes()[0], 0x81);

        fb.set_pixel(8, 0, Color::On);
        assert_eq!(fb.bytes()[1], 0x80);
    }

    #[test]
    fn test_row_stride() {
        let mut fb = test_framebuffer();
        fb.set_pixel(0, 1, Color::On);
        assert_eq!(fb.bytes()[40], 0x80);
        assert_eq!(fb.bytes()[0], 0x00);
    }

    #[test]
    fn test_last_write_wins() {
        let mut fb = test_framebuffer();
        fb.set_pixel(13, 7, Color::On);
        assert_eq!(fb.pixel(13, 7), Some(Color::On));
        fb.set_pixel(13, 7, Color::Off);
        assert_eq!(fb.pixel(13, 7), Some(Color::Off));
    }

    #[test]
    fn test_byte_level_isolation() {
        let mut fb = test_framebuffer();
        // Neighbors in the same byte
        fb.set_pixel(10, 3, Color::On);
        fb.set_pixel(11, 3, Color::On);
        let before = fb.bytes()[pixel_location(10, 3, 320).0];

        fb.set_pixel(12, 3, Color::On);
        fb.set_pixel(12, 3, Color::Off);

        let after = fb.bytes()[pixel_location(10, 3, 320).0];
        assert_eq!(before, after);
        assert_eq!(fb.pixel(12, 3), Some(Color::Off));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut fb = test_framebuffer();
        fb.set_pixel(320, 0, Color::On);
        fb.set_pixel(0, 240, Color::On);
        assert!(fb.bytes().iter().all(|byte| *byte == 0));
        assert_eq!(fb.pixel(320, 0), None);
    }

    #[test]
    fn test_fill() {
        let mut fb = test_framebuffer();
        fb.fill(Color::On);
        assert!(fb.bytes().iter().all(|byte| *byte == 0xFF));
        fb.fill(Color::Off);
        assert!(fb.bytes().iter().all(|byte| *byte == 0x00));
    }
}
