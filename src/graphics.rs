//! Graphics support via embedded-graphics
//!
//! This module implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait
//! from the embedded-graphics ecosystem directly on [`Display`], so the
//! generic primitives layer (lines, circles, text, images) depends only on
//! the draw-target capability and never on the RA8835 specifics.
//!
//! Drawing touches only the local framebuffer. Out-of-range pixels are
//! clipped silently, per embedded-graphics convention; nothing reaches the
//! device until [`Display::present`] is called.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ra8835::{Builder, BusTiming, Channel, Color, Dimensions, Display, Interface, ParallelBus};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockBus;
//! # impl ParallelBus for MockBus {
//! #     type Error = Infallible;
//! #     fn configure_timing(&mut self, _timing: &BusTiming) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! #     fn write(&mut self, _channel: Channel, _byte: u8) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let interface = Interface::new(MockBus, MockPin);
//! # let dims = match Dimensions::new(240, 320) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut delay = MockDelay;
//! let mut display = Display::new(interface, config, [0u8; 320 * 240 / 8]);
//! let _ = display.initialize(&mut delay);
//!
//! // Draw shapes into the local buffer
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Color::On))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 2))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, RA8835!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Color::On),
//! )
//! .draw(&mut display);
//!
//! // One burst transfer to the device
//! let _ = display.present();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::display::Display;
use crate::interface::DisplayInterface;

/// Drawing mutates only the local framebuffer; [`Display::present`] pushes
/// it to the device.
///
/// Pixels drawn before [`Display::initialize`] has completed are discarded,
/// matching the direct [`Display::set_pixel`] path (which reports the error
/// explicitly). Initialization blanks the framebuffer anyway, so nothing
/// drawn earlier could survive to the first flush.
impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let sz = self.size();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as u32;
            let y = y as u32;

            if x >= sz.width || y >= sz.height {
                continue;
            }

            // In-memory mutation only; present() pushes it to the device
            let _ = self.set_pixel(x as u16, y as u16, color);
        }

        Ok(())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(u32::from(dims.cols), u32::from(dims.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, BusTiming, Dimensions};
    use embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn configure_timing(&mut self, _timing: &BusTiming) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _byte: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display() -> Display<MockInterface, alloc::vec::Vec<u8>> {
        let dims = Dimensions::new(240, 320).unwrap();
        let config = Builder::new().dimensions(dims).build().unwrap();
        let mut display = Display::new(MockInterface, config, alloc::vec![0u8; dims.buffer_size()]);
        display.initialize(&mut MockDelay).unwrap();
        display
    }

    #[test]
    fn test_size_matches_dimensions() {
        let display = test_display();
        assert_eq!(display.size(), Size::new(320, 240));
    }

    #[test]
    fn test_filled_rectangle_sets_buffer_bits() {
        let mut display = test_display();

        Rectangle::new(Point::new(0, 0), Size::new(8, 2))
            .into_styled(PrimitiveStyle::with_fill(Color::On))
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.framebuffer().bytes()[0], 0xFF);
        assert_eq!(display.framebuffer().bytes()[40], 0xFF);
        assert_eq!(display.framebuffer().bytes()[80], 0x00);
    }

    #[test]
    fn test_draw_before_initialize_is_discarded() {
        let dims = Dimensions::new(240, 320).unwrap();
        let config = Builder::new().dimensions(dims).build().unwrap();
        let mut display = Display::new(MockInterface, config, alloc::vec![0u8; dims.buffer_size()]);

        Rectangle::new(Point::new(0, 0), Size::new(8, 2))
            .into_styled(PrimitiveStyle::with_fill(Color::On))
            .draw(&mut display)
            .unwrap();

        assert!(display.framebuffer().bytes().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_negative_and_overflow_coordinates_are_clipped() {
        let mut display = test_display();

        display
            .draw_iter([
                Pixel(Point::new(-1, 0), Color::On),
                Pixel(Point::new(0, -5), Color::On),
                Pixel(Point::new(320, 0), Color::On),
                Pixel(Point::new(0, 240), Color::On),
            ])
            .unwrap();

        assert!(display.framebuffer().bytes().iter().all(|byte| *byte == 0));
    }
}
