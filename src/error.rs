//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus communication errors
//!
//! No error is retried internally: the RA8835 offers no status read-back,
//! so a bus fault is fatal at this layer and surfaces immediately.
//!
//! ## Example
//!
//! ```
//! use ra8835::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(1000, 320); // Too many lines
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum display lines (rows) supported by the RA8835 controller
///
/// NOTE: Panels commonly wire fewer lines; configure [`crate::Dimensions`]
/// to match the attached glass.
pub const MAX_LINES: u16 = 256;

/// Maximum dots per line (columns) supported by the RA8835 controller
/// in single-panel mode
pub const MAX_DOTS_PER_LINE: u16 = 640;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus fault (parallel bus or reset pin)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation. Fatal: a flush aborted mid-stream leaves the device
    /// memory in an unspecified partially-written state, recoverable only
    /// by a full re-flush.
    Interface(I::Error),
    /// Pixel coordinate outside the framebuffer
    ///
    /// Coordinates must satisfy `x < cols` and `y < rows`. Out-of-range
    /// writes are rejected rather than wrapped, so they can never corrupt
    /// adjacent rows.
    OutOfBounds {
        /// X coordinate requested
        x: u16,
        /// Y coordinate requested
        y: u16,
    },
    /// Operation invoked before [`initialize`](crate::Display::initialize) completed
    ///
    /// Pixel writes and flushes fail fast instead of streaming bytes to an
    /// unconfigured controller.
    NotInitialized,
    /// Buffer is too small for the display
    ///
    /// The provided buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::OutOfBounds { x, y } => {
                write!(f, "Pixel coordinate out of bounds: ({x}, {y})")
            }
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
    /// Invalid character cell geometry
    ///
    /// The character cell must be 1-8 dots wide and 1-16 dots high, and must
    /// evenly tile the display (cols divisible by width, rows by height).
    InvalidCharacterCell {
        /// Character cell width in dots
        width: u8,
        /// Character cell height in dots
        height: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_LINES}x{MAX_DOTS_PER_LINE}, cols must be multiple of 8)"
            ),
            Self::InvalidCharacterCell { width, height } => write!(
                f,
                "Invalid character cell {width}x{height} (max 8x16, must tile the display evenly)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
