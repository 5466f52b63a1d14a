//! RA8835 LCD Controller Driver
//!
//! A driver for the RA8835 dot-matrix LCD controller, driven over a
//! parallel command/data bus, supporting monochrome panels up to 640x256
//! pixels.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support (reset pin and settle delays)
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Runtime-configurable display dimensions and memory layout
//! - Batched pixel updates: draws mutate a local framebuffer, a single
//!   flush streams it to the device
//!
//! ## Design
//!
//! The RA8835's bus has no acknowledgment or status channel, so the driver
//! issues every protocol step unconditionally and surfaces any bus-level
//! fault immediately. Pixel writes never touch the device; each one costs a
//! fixed bus cycle otherwise, so edits are batched locally and
//! [`Display::present`] pushes the whole graphics layer in one burst.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use ra8835::{Builder, BusTiming, Channel, Color, Dimensions, Display, Interface, ParallelBus};
//!
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
//! # let bus = MockBus;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(bus, rst);
//! let dims = match Dimensions::new(240, 320) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config, [0u8; 320 * 240 / 8]);
//! let _ = display.initialize(&mut delay);
//!
//! // Draw into the local buffer, then flush once
//! let _ = display.set_pixel(10, 10, Color::On);
//! let _ = display.present();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Pixel color type for the monochrome display
pub mod color;
/// RA8835 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Packed 1-bpp framebuffer and pixel addressing
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{Builder, BusTiming, Config, Dimensions, MAX_DOTS_PER_LINE, MAX_LINES};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use framebuffer::Framebuffer;
pub use interface::{Channel, DisplayInterface, Interface, InterfaceError, ParallelBus};
