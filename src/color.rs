//! Pixel color type for the monochrome display
//!
//! This module defines the [`Color`] enum for the two pixel states the
//! RA8835 graphics layer can show.
//!
//! ## Color Representation
//!
//! The graphics layer is bit-packed, 1 bit per pixel:
//!
//! | Color | Framebuffer bit |
//! |-------|-----------------|
//! | Off   | 0               |
//! | On    | 1               |
//!
//! ## Example
//!
//! ```
//! use ra8835::Color;
//!
//! // Fill values for whole-buffer clears
//! assert_eq!(Color::Off.fill_byte(), 0x00);
//! assert_eq!(Color::On.fill_byte(), 0xFF);
//! ```

/// Pixel states supported by the RA8835 graphics layer
///
/// The device model is strictly monochrome; a pixel is either lit or not.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    /// Pixel dark (bit clear)
    Off,
    /// Pixel lit (bit set)
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Off,
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::On,
        }
    }
}

impl Color {
    /// Get the byte value that fills 8 pixels of this color
    ///
    /// ## Example
    ///
    /// ```
    /// use ra8835::Color;
    ///
    /// assert_eq!(Color::Off.fill_byte(), 0x00);
    /// assert_eq!(Color::On.fill_byte(), 0xFF);
    /// ```
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => 0xFF,
        }
    }

    /// Whether this color sets the framebuffer bit
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}
