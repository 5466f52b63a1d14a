//! RA8835 command definitions
//!
//! This module defines all the command bytes used to control the RA8835
//! LCD controller. Commands are written on the parallel bus with the
//! address line selecting the command channel; parameter bytes follow on
//! the data channel.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Write the command byte on the command channel (A0 high)
//! 2. Write the fixed number of parameter bytes on the data channel (A0 low)
//!
//! The parameter count and meaning for each opcode are fixed by the RA8835
//! datasheet; nothing is negotiated at runtime and the controller never
//! acknowledges a byte.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ra8835::{command, Channel, DisplayInterface, Interface, ParallelBus};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockBus;
//! # impl ParallelBus for MockBus {
//! #     type Error = Infallible;
//! #     fn configure_timing(
//! #         &mut self,
//! #         _timing: &ra8835::BusTiming,
//! #     ) -> Result<(), Self::Error> {
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
//! # let mut interface = Interface::new(MockBus, MockPin);
//! // Point the write cursor at an address, then stream memory
//! let _ = interface.send_command(command::SET_CURSOR_ADDR);
//! let _ = interface.send_data(0x60);
//! let _ = interface.send_data(0x09);
//! let _ = interface.send_command(command::MEM_WRITE);
//! let _ = interface.send_data(0xFF);
//! ```

// System control commands

/// System set command (0x40)
///
/// Configures the controller's core geometry: character cell size, panel
/// mode, characters per line, and total display line count.
/// Requires 8 bytes of data.
pub const SYSTEM_SET: u8 = 0x40;

/// Memory write command (0x42)
///
/// Streams subsequent data bytes into display memory starting at the
/// current cursor address, auto-incrementing per the cursor direction.
pub const MEM_WRITE: u8 = 0x42;

/// Memory read command (0x43)
///
/// Reads display memory from the current cursor address.
pub const MEM_READ: u8 = 0x43;

/// Scroll / display-block start address command (0x44)
///
/// Programs the base address and line count of the four screen blocks
/// (text layer, graphics layer, and two unused slots).
/// Requires 10 bytes of data.
pub const SCROLL: u8 = 0x44;

/// Set cursor address command (0x46)
///
/// Sets the memory cursor used by [`MEM_WRITE`] / [`MEM_READ`].
/// Requires 2 bytes: [address low, address high].
pub const SET_CURSOR_ADDR: u8 = 0x46;

/// Read cursor address command (0x47)
pub const READ_CURSOR_ADDR: u8 = 0x47;

// Cursor direction commands (no data bytes)

/// Cursor auto-increment rightward (0x4C)
pub const CSR_DIR_RIGHT: u8 = 0x4C;

/// Cursor auto-increment leftward (0x4D)
pub const CSR_DIR_LEFT: u8 = 0x4D;

/// Cursor auto-increment upward (0x4E)
pub const CSR_DIR_UP: u8 = 0x4E;

/// Cursor auto-increment downward (0x4F)
pub const CSR_DIR_DOWN: u8 = 0x4F;

// Display control commands

/// Power save command (0x53)
pub const POWER_SAVE: u8 = 0x53;

/// Display off command (0x58)
///
/// Requires 1 mode byte selecting which layers are enabled and their
/// flash/blink attributes.
pub const DISP_OFF: u8 = 0x58;

/// Display on command (0x59)
///
/// Requires 1 mode byte, same encoding as [`DISP_OFF`].
pub const DISP_ON: u8 = 0x59;

/// Horizontal dot scroll command (0x5A)
///
/// Requires 1 byte: scroll offset in dots (0-7).
pub const HDOT_SCR: u8 = 0x5A;

/// Overlay / compositing mode command (0x5B)
///
/// Requires 1 byte selecting layer count and the compositing function
/// (OR / XOR / AND) between the text and graphics layers.
pub const OVLAY: u8 = 0x5B;

/// Character generator RAM address command (0x5C)
pub const CG_RAM_ADDR: u8 = 0x5C;

/// Cursor form command (0x5D)
///
/// Requires 2 bytes: cursor width-1, and cursor height-1 with the block
/// style bit in the high nibble.
pub const CSR_FORM: u8 = 0x5D;

/// Grayscale depth command (0x60)
///
/// Present on the RA8835 but unused by this driver; the device model here
/// is strictly 1 bit per pixel.
pub const GRAYSCALE: u8 = 0x60;
