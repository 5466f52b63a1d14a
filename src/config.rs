//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_DOTS_PER_LINE, MAX_LINES};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of rows (height in pixels, corresponds to display lines)
    pub rows: u16,
    /// Number of columns (width in pixels, corresponds to dots per line)
    pub cols: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows == 0 or rows > MAX_LINES
    /// - cols == 0 or cols > MAX_DOTS_PER_LINE
    /// - cols % 8 != 0 (must be byte-aligned for memory)
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_LINES {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_DOTS_PER_LINE || cols % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Calculate required framebuffer size in bytes (1 bit per pixel)
    pub fn buffer_size(&self) -> usize {
        (self.rows as usize * self.cols as usize) / 8
    }
}

/// Parallel bus timing parameters
///
/// Configured once on the bus endpoint before any protocol traffic. The
/// units are bus-implementation specific (master clock cycles on the
/// original hardware); defaults are the values the reference design uses
/// for the RA8835's read/write cycle requirements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BusTiming {
    /// Address setup timing (NRD setup, NRD hold, NWE setup, NWE hold)
    pub address_setup: [u8; 4],
    /// Strobe pulse timing (NRD pulse, NCS read pulse, NWE pulse, NCS write pulse)
    pub pulse: [u8; 4],
    /// Total cycle timing (read cycle, write cycle)
    pub cycle: [u8; 2],
}

impl Default for BusTiming {
    fn default() -> Self {
        Self {
            address_setup: [5, 1, 5, 1],
            pulse: [20, 30, 20, 30],
            cycle: [55, 55],
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the RA8835 controller.
/// Use `Builder` to create a Config.
///
/// The text and graphics layer base addresses programmed by the scroll
/// command during initialization and the addresses targeted by the sync
/// engine both come from this one struct, so they cannot drift apart (an
/// address mismatch would corrupt the picture silently; the bus has no
/// error channel).
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Text layer base address in display memory
    pub text_layer_addr: u16,
    /// Graphics layer base address in display memory
    pub graphics_layer_addr: u16,
    /// Character cell width in dots (1-8)
    pub char_width: u8,
    /// Character cell height in dots (1-16)
    pub char_height: u8,
    /// SYSTEM SET mode byte (origin compensation, panel drive, CGROM source)
    pub system_mode: u8,
    /// TC/R line cycle byte (panel timing, from the datasheet frame-rate formula)
    pub tcr: u8,
    /// Horizontal dot scroll offset (0-7)
    pub horizontal_scroll: u8,
    /// Overlay mode byte (layer count and compositing function)
    pub overlay_mode: u8,
    /// Mode byte sent with the display-off command during initialization
    pub display_mode_off: u8,
    /// Mode byte sent with the display-on command at the end of initialization
    pub display_mode_on: u8,
    /// Cursor form parameter bytes (width-1, block bit | height-1)
    pub cursor_form: [u8; 2],
    /// Parallel bus timing, applied once before any protocol traffic
    pub bus_timing: BusTiming,
}

impl Config {
    /// Characters per display line (text layer width in cells)
    pub fn chars_per_line(&self) -> u16 {
        self.dimensions.cols / u16::from(self.char_width)
    }

    /// Text layer height in character rows
    pub fn text_rows(&self) -> u16 {
        self.dimensions.rows / u16::from(self.char_height)
    }

    /// Total character cells in the text layer
    ///
    /// Derived from the character grid, not from the pixel count.
    pub fn text_cells(&self) -> usize {
        self.chars_per_line() as usize * self.text_rows() as usize
    }
}

/// Builder for constructing display configuration
///
/// Defaults reproduce the reference 320x240 panel setup: 8x8 character
/// cells from the internal CGROM, text layer at address 0x0000, graphics
/// layer at 0x0960, three-layer XOR compositing.
///
/// # Example
///
/// ```rust,no_run
/// use ra8835::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(240, 320) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Text layer base address
    text_layer_addr: u16,
    /// Graphics layer base address
    graphics_layer_addr: u16,
    /// Character cell width in dots
    char_width: u8,
    /// Character cell height in dots
    char_height: u8,
    /// SYSTEM SET mode byte
    system_mode: u8,
    /// TC/R line cycle byte
    tcr: u8,
    /// Horizontal dot scroll offset
    horizontal_scroll: u8,
    /// Overlay mode byte
    overlay_mode: u8,
    /// Display-off mode byte
    display_mode_off: u8,
    /// Display-on mode byte
    display_mode_on: u8,
    /// Cursor form parameter bytes
    cursor_form: [u8; 2],
    /// Parallel bus timing
    bus_timing: BusTiming,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            // Text layer at the bottom of display memory
            text_layer_addr: 0x0000,
            // Graphics layer above the text layer and its reserved range
            graphics_layer_addr: 0x0960,
            // 8x8 character cells (internal CGROM glyph size)
            char_width: 8,
            char_height: 8,
            // No origin compensation, single panel, internal CGROM
            system_mode: 0x30,
            // Line cycle for the reference panel's frame rate
            tcr: 0x39,
            horizontal_scroll: 0x00,
            // Three layers, XOR compositing
            overlay_mode: 0x01,
            // Graphics layer only, no flashing
            display_mode_off: 0x16,
            // Graphics and text layers, no flashing
            display_mode_on: 0x16,
            // 8-wide block cursor, 8 high
            cursor_form: [0x07, 0x87],
            bus_timing: BusTiming::default(),
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the text layer base address
    pub fn text_layer_addr(mut self, addr: u16) -> Self {
        self.text_layer_addr = addr;
        self
    }

    /// Set the graphics layer base address
    pub fn graphics_layer_addr(mut self, addr: u16) -> Self {
        self.graphics_layer_addr = addr;
        self
    }

    /// Set the character cell geometry (width 1-8 dots, height 1-16 dots)
    ///
    /// The cell must tile the display evenly; validated at [`build`](Self::build).
    pub fn character_cell(mut self, width: u8, height: u8) -> Self {
        self.char_width = width;
        self.char_height = height;
        self
    }

    /// Set the SYSTEM SET mode byte
    pub fn system_mode(mut self, value: u8) -> Self {
        self.system_mode = value;
        self
    }

    /// Set the TC/R line cycle byte
    pub fn tcr(mut self, value: u8) -> Self {
        self.tcr = value;
        self
    }

    /// Set the horizontal dot scroll offset
    pub fn horizontal_scroll(mut self, value: u8) -> Self {
        self.horizontal_scroll = value;
        self
    }

    /// Set the overlay mode byte
    pub fn overlay_mode(mut self, value: u8) -> Self {
        self.overlay_mode = value;
        self
    }

    /// Set the mode byte used with the display-off command
    pub fn display_mode_off(mut self, value: u8) -> Self {
        self.display_mode_off = value;
        self
    }

    /// Set the mode byte used with the display-on command
    pub fn display_mode_on(mut self, value: u8) -> Self {
        self.display_mode_on = value;
        self
    }

    /// Set the cursor form parameter bytes
    pub fn cursor_form(mut self, values: [u8; 2]) -> Self {
        self.cursor_form = values;
        self
    }

    /// Set the parallel bus timing parameters
    pub fn bus_timing(mut self, timing: BusTiming) -> Self {
        self.bus_timing = timing;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or `BuilderError::InvalidCharacterCell` if the character cell is out
    /// of range, does not tile the display evenly, or yields more than 256
    /// characters per line.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;

        let cell_err = BuilderError::InvalidCharacterCell {
            width: self.char_width,
            height: self.char_height,
        };
        if self.char_width == 0 || self.char_width > 8 {
            return Err(cell_err);
        }
        if self.char_height == 0 || self.char_height > 16 {
            return Err(cell_err);
        }
        if dimensions.cols % u16::from(self.char_width) != 0
            || dimensions.rows % u16::from(self.char_height) != 0
        {
            return Err(cell_err);
        }
        // The system-set C/R parameter is chars_per_line - 1 in one byte
        if dimensions.cols / u16::from(self.char_width) > 256 {
            return Err(cell_err);
        }

        Ok(Config {
            dimensions,
            text_layer_addr: self.text_layer_addr,
            graphics_layer_addr: self.graphics_layer_addr,
            char_width: self.char_width,
            char_height: self.char_height,
            system_mode: self.system_mode,
            tcr: self.tcr,
            horizontal_scroll: self.horizontal_scroll,
            overlay_mode: self.overlay_mode,
            display_mode_off: self.display_mode_off,
            display_mode_on: self.display_mode_on,
            cursor_form: self.cursor_form,
            bus_timing: self.bus_timing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_reference_panel() {
        let dims = Dimensions::new(240, 320).unwrap();
        assert_eq!(dims.buffer_size(), 320 * 240 / 8);
    }

    #[test]
    fn test_dimensions_rejects_unaligned_cols() {
        assert!(Dimensions::new(240, 321).is_err());
        assert!(Dimensions::new(240, 12).is_err());
    }

    #[test]
    fn test_dimensions_rejects_out_of_range() {
        assert!(Dimensions::new(0, 320).is_err());
        assert!(Dimensions::new(257, 320).is_err());
        assert!(Dimensions::new(240, 0).is_err());
        assert!(Dimensions::new(240, 648).is_err());
    }

    #[test]
    fn test_builder_missing_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_builder_defaults_match_reference_panel() {
        let config = Builder::new()
            .dimensions(Dimensions::new(240, 320).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.text_layer_addr, 0x0000);
        assert_eq!(config.graphics_layer_addr, 0x0960);
        assert_eq!(config.chars_per_line(), 40);
        assert_eq!(config.text_rows(), 30);
        assert_eq!(config.text_cells(), 1200);
    }

    #[test]
    fn test_builder_rejects_wide_character_cell() {
        let result = Builder::new()
            .dimensions(Dimensions::new(240, 320).unwrap())
            .character_cell(9, 8)
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidCharacterCell { width: 9, .. })
        ));
    }

    #[test]
    fn test_builder_rejects_cell_that_does_not_tile() {
        // 320 is not divisible by 6
        let result = Builder::new()
            .dimensions(Dimensions::new(240, 320).unwrap())
            .character_cell(6, 8)
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidCharacterCell { width: 6, .. })
        ));
    }

    #[test]
    fn test_builder_rejects_cell_exceeding_cr_byte_range() {
        // A 1-dot-wide cell on a 320-dot panel means 320 characters per
        // line, but the system-set C/R byte can only encode up to 256;
        // 319 would wrap to 0x3F on the wire.
        let result = Builder::new()
            .dimensions(Dimensions::new(240, 320).unwrap())
            .character_cell(1, 8)
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::InvalidCharacterCell { width: 1, .. })
        ));
    }

    #[test]
    fn test_builder_accepts_cell_at_cr_byte_limit() {
        // 2-dot cells on a 320-dot panel give 160 characters per line,
        // comfortably inside the C/R byte
        let config = Builder::new()
            .dimensions(Dimensions::new(240, 320).unwrap())
            .character_cell(2, 8)
            .build()
            .unwrap();
        assert_eq!(config.chars_per_line(), 160);
    }

    #[test]
    fn test_bus_timing_defaults() {
        let timing = BusTiming::default();
        assert_eq!(timing.address_setup, [5, 1, 5, 1]);
        assert_eq!(timing.pulse, [20, 30, 20, 30]);
        assert_eq!(timing.cycle, [55, 55]);
    }
}
