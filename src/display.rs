//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{
    CSR_DIR_RIGHT, CSR_FORM, DISP_OFF, DISP_ON, HDOT_SCR, MEM_WRITE, OVLAY, SCROLL,
    SET_CURSOR_ADDR, SYSTEM_SET,
};
use crate::config::Config;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// ASCII glyph streamed to blank the text layer
const BLANK_CELL: u8 = b' ';

/// Core display driver for the RA8835
///
/// Owns the hardware interface and the in-memory framebuffer mirroring the
/// controller's graphics layer. Pixel writes touch only the local buffer;
/// [`present`](Self::present) streams the whole buffer to the device in one
/// burst, because each bus write carries fixed cycle latency and per-pixel
/// device I/O would be ruinously slow.
///
/// Every mutating operation takes `&mut self`, so one driver instance has a
/// single writer by construction and a flush can never overlap pixel writes
/// to the same buffer.
///
/// ## Type Parameters
///
/// * `I` - Hardware interface implementing [`DisplayInterface`]
/// * `B` - Framebuffer storage implementing `AsRef<[u8]> + AsMut<[u8]>`
///   (an array in `no_std`, a `Vec` under `alloc`)
pub struct Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Local mirror of the device graphics layer
    framebuffer: Framebuffer<B>,
    /// Whether the initialization protocol has completed
    initialized: bool,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display instance
    ///
    /// # Arguments
    ///
    /// * `interface` - Hardware interface
    /// * `config` - Display configuration (see [`crate::Builder`])
    /// * `buffer` - Framebuffer storage, at least
    ///   `config.dimensions.buffer_size()` bytes
    ///
    /// # Panics
    ///
    /// Panics if the buffer is smaller than the required size. Use
    /// [`try_new`](Self::try_new) for a fallible version.
    pub fn new(interface: I, config: Config, mut buffer: B) -> Self {
        let required = config.dimensions.buffer_size();
        assert!(
            buffer.as_mut().len() >= required,
            "buffer too small: required {} bytes, got {}",
            required,
            buffer.as_mut().len()
        );
        let dimensions = config.dimensions;
        Self {
            interface,
            config,
            framebuffer: Framebuffer::new(buffer, dimensions),
            initialized: false,
        }
    }

    /// Try to create a new Display, returning an error if the buffer is too
    /// small
    ///
    /// This is the fallible version of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if the buffer cannot hold
    /// `config.dimensions.buffer_size()` bytes.
    pub fn try_new(interface: I, config: Config, mut buffer: B) -> Result<Self, Error<I>> {
        let required = config.dimensions.buffer_size();
        if buffer.as_mut().len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: buffer.as_mut().len(),
            });
        }
        let dimensions = config.dimensions;
        Ok(Self {
            interface,
            config,
            framebuffer: Framebuffer::new(buffer, dimensions),
            initialized: false,
        })
    }

    /// Run the controller initialization protocol
    ///
    /// Configures the bus timing, pulses hardware reset, programs the
    /// controller's memory layout and display mode, clears both layers, and
    /// leaves the display on. Must complete before any pixel write or
    /// flush. The sequence is strictly linear with no retry: the bus has no
    /// acknowledgment channel, so every step is an unconditional write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if any bus or pin operation fails; the
    /// controller state is then undefined and initialization must be rerun
    /// from the start.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("initializing RA8835");

        // Timing must be in place before the first bus cycle, and reset
        // must settle before the first command.
        self.interface
            .configure_timing(&self.config.bus_timing)
            .map_err(Error::Interface)?;
        self.interface.reset(delay).map_err(Error::Interface)?;

        self.system_set()?;
        self.program_layer_addresses()?;

        self.send_command(HDOT_SCR)?;
        self.send_data(self.config.horizontal_scroll)?;

        self.send_command(OVLAY)?;
        self.send_data(self.config.overlay_mode)?;

        self.send_command(DISP_OFF)?;
        self.send_data(self.config.display_mode_off)?;

        // Bring device memory in line with the zeroed local buffer before
        // anything is shown.
        self.framebuffer.fill(Color::Off);
        self.flush_graphics()?;
        self.stream_blank_text_layer()?;

        self.send_command(CSR_DIR_RIGHT)?;

        self.send_command(CSR_FORM)?;
        self.send_data(self.config.cursor_form[0])?;
        self.send_data(self.config.cursor_form[1])?;

        self.send_command(DISP_ON)?;
        self.send_data(self.config.display_mode_on)?;

        self.initialized = true;
        log::debug!(
            "RA8835 ready: {}x{}, graphics layer at {:#06x}",
            self.config.dimensions.cols,
            self.config.dimensions.rows,
            self.config.graphics_layer_addr
        );
        Ok(())
    }

    /// Set or clear a single pixel in the local framebuffer
    ///
    /// Performs no device I/O; call [`present`](Self::present) to push the
    /// buffer to the display. Cheap enough to call once per
    /// primitive-drawing step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] before [`initialize`](Self::initialize)
    /// completes, or [`Error::OutOfBounds`] if the coordinate is outside
    /// the display.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) -> DisplayResult<I> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        if x >= self.config.dimensions.cols || y >= self.config.dimensions.rows {
            return Err(Error::OutOfBounds { x, y });
        }
        self.framebuffer.set_pixel(x, y, color);
        Ok(())
    }

    /// Read back a pixel from the local framebuffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the
    /// display.
    pub fn pixel(&self, x: u16, y: u16) -> Result<Color, Error<I>> {
        self.framebuffer
            .pixel(x, y)
            .ok_or(Error::OutOfBounds { x, y })
    }

    /// Fill the local framebuffer with one color
    ///
    /// Pure in-memory operation; no device I/O.
    pub fn clear(&mut self, color: Color) {
        self.framebuffer.fill(color);
    }

    /// Stream the framebuffer to the device graphics layer
    ///
    /// Always a full-buffer burst; there is no diffing or partial update.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] before [`initialize`](Self::initialize)
    /// completes, or [`Error::Interface`] on a bus fault. A fault aborts
    /// the stream mid-way, leaving the displayed contents unspecified until
    /// the next successful flush.
    pub fn present(&mut self) -> DisplayResult<I> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        self.flush_graphics()
    }

    /// Blank the device text layer
    ///
    /// Streams one space glyph per character cell. Independent of the
    /// graphics layer and the framebuffer contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] before [`initialize`](Self::initialize)
    /// completes, or [`Error::Interface`] on a bus fault.
    pub fn clear_text_layer(&mut self) -> DisplayResult<I> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        self.stream_blank_text_layer()
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> crate::config::Dimensions {
        self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether [`initialize`](Self::initialize) has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Access the local framebuffer
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Issue the system-set command with parameters derived from the
    /// configured geometry
    fn system_set(&mut self) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        let chars_per_line = self.config.chars_per_line();

        self.send_command(SYSTEM_SET)?;
        self.send_data(self.config.system_mode)?;
        // WF bit | character width - 1
        self.send_data(0x80 | (self.config.char_width - 1))?;
        self.send_data(self.config.char_height - 1)?;
        self.send_data((chars_per_line - 1) as u8)?;
        self.send_data(self.config.tcr)?;
        self.send_data((dims.rows - 1) as u8)?;
        // Horizontal address range, low then high
        self.send_data((chars_per_line & 0xFF) as u8)?;
        self.send_data((chars_per_line >> 8) as u8)?;
        Ok(())
    }

    /// Program the screen-block base addresses for the text and graphics
    /// layers (blocks 3 and 4 unused)
    fn program_layer_addresses(&mut self) -> DisplayResult<I> {
        let lines = (self.config.dimensions.rows - 1) as u8;

        self.send_command(SCROLL)?;
        self.send_address(self.config.text_layer_addr)?;
        self.send_data(lines)?;
        self.send_address(self.config.graphics_layer_addr)?;
        self.send_data(lines)?;
        for _ in 0..4 {
            self.send_data(0x00)?;
        }
        Ok(())
    }

    /// Stream every framebuffer byte to the graphics layer
    fn flush_graphics(&mut self) -> DisplayResult<I> {
        log::trace!(
            "flushing {} bytes to graphics layer",
            self.framebuffer.bytes().len()
        );
        self.send_command(SET_CURSOR_ADDR)?;
        self.send_address(self.config.graphics_layer_addr)?;
        self.send_command(MEM_WRITE)?;
        let Self {
            interface,
            framebuffer,
            ..
        } = self;
        for &byte in framebuffer.bytes() {
            interface.send_data(byte).map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Stream a blank glyph for every text-layer character cell
    fn stream_blank_text_layer(&mut self) -> DisplayResult<I> {
        let cells = self.config.text_cells();
        log::trace!("blanking {} text cells", cells);
        self.send_command(SET_CURSOR_ADDR)?;
        self.send_address(self.config.text_layer_addr)?;
        self.send_command(MEM_WRITE)?;
        for _ in 0..cells {
            self.send_data(BLANK_CELL)?;
        }
        Ok(())
    }

    /// Send a 16-bit memory address, low byte first
    fn send_address(&mut self, addr: u16) -> DisplayResult<I> {
        self.send_data((addr & 0xFF) as u8)?;
        self.send_data((addr >> 8) as u8)
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send a data byte to the display controller
    fn send_data(&mut self, byte: u8) -> DisplayResult<I> {
        self.interface.send_data(byte).map_err(Error::Interface)
    }
}
