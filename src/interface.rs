//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the RA8835 controller over a parallel bus.
//!
//! ## Hardware Requirements
//!
//! The RA8835 requires:
//! - An 8-bit parallel bus with one address line (A0) qualifying each byte
//!   as command or data
//! - 1 GPIO pin: **RST**, hardware reset (output, active low)
//!
//! There is no busy or acknowledgment signal: every write is assumed to be
//! accepted, with correctness guaranteed only by the bus cycle timing
//! configured up front.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use ra8835::{BusTiming, Channel, DisplayInterface, Interface, ParallelBus};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create the interface from a bus endpoint and the reset pin
//! let mut interface = Interface::new(MockBus, MockPin);
//!
//! // Apply the bus cycle timing, pulse the reset line
//! let _ = interface.configure_timing(&BusTiming::default());
//! let _ = interface.reset(&mut delay);
//!
//! // Send a command followed by a parameter byte
//! let _ = interface.send_command(0x5A); // Horizontal scroll
//! let _ = interface.send_data(0x00);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::BusTiming;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Bus channel selected by the address line for each byte
///
/// The RA8835 decodes A0 to distinguish opcodes from their parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    /// Data channel (A0 low): parameter and memory bytes
    Data = 0,
    /// Command channel (A0 high): opcode bytes
    Command = 1,
}

/// Trait for the parallel bus endpoint
///
/// The bus exposes single-byte blocking transactions only; there is no
/// burst primitive below this granularity. Each write carries the
/// [`Channel`] that drives the A0 address line.
///
/// Writes return a `Result` even though most parallel bus hardware cannot
/// detect a failed cycle; an implementation that can (or a test fake) gets
/// a real fault path.
pub trait ParallelBus {
    /// Error type for bus operations
    type Error: Debug;

    /// Apply bus cycle timing parameters
    ///
    /// Called once before any protocol traffic is issued.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus peripheral rejects the configuration.
    fn configure_timing(&mut self, timing: &BusTiming) -> InterfaceResult<(), Self::Error>;

    /// Write one byte on the given channel, blocking until the bus cycle
    /// completes
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn write(&mut self, channel: Channel, byte: u8) -> InterfaceResult<(), Self::Error>;
}

/// Trait for hardware interface to the RA8835 controller
///
/// This trait abstracts over different hardware implementations, allowing
/// the [`Display`](crate::display::Display) to work with anything that can
/// push address-qualified bytes at the controller.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a memory-mapped bus with no reset pin), implement
/// this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Apply bus cycle timing parameters
    ///
    /// Must be called once before any command or data traffic.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus endpoint fails.
    fn configure_timing(&mut self, timing: &BusTiming) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte to the controller
    ///
    /// The implementation must issue the byte on the command channel
    /// (A0 high).
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a data byte to the controller
    ///
    /// The implementation must issue the byte on the data channel (A0 low).
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn send_data(&mut self, byte: u8) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must hold RST high, pulse it low, release it, and
    /// wait for the controller to settle before returning. No bus traffic
    /// may be issued until this completes; commands written before reset
    /// settles leave the controller in an undefined state.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset pin fails.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<BusErr, PinErr> {
    /// Parallel bus error
    Bus(BusErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// Hardware interface implementation for the RA8835
///
/// Implements [`DisplayInterface`] on top of a [`ParallelBus`] endpoint and
/// an embedded-hal reset pin.
///
/// ## Type Parameters
///
/// * `BUS` - Bus endpoint implementing [`ParallelBus`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<BUS, RST> {
    /// Parallel bus endpoint
    bus: BUS,
    /// Reset pin (active low)
    rst: RST,
}

impl<BUS, RST> Interface<BUS, RST>
where
    BUS: ParallelBus,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `bus` - Parallel bus endpoint (must implement [`ParallelBus`])
    /// * `rst` - Reset pin (output, active low)
    pub fn new(bus: BUS, rst: RST) -> Self {
        Self { bus, rst }
    }

    /// Consume the interface, returning the bus endpoint and reset pin
    pub fn release(self) -> (BUS, RST) {
        (self.bus, self.rst)
    }
}

impl<BUS, RST> DisplayInterface for Interface<BUS, RST>
where
    BUS: ParallelBus,
    BUS::Error: Debug,
    RST: OutputPin,
    RST::Error: Debug,
{
    type Error = InterfaceError<BUS::Error, RST::Error>;

    fn configure_timing(&mut self, timing: &BusTiming) -> InterfaceResult<(), Self::Error> {
        self.bus
            .configure_timing(timing)
            .map_err(InterfaceError::Bus)
    }

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.bus
            .write(Channel::Command, command)
            .map_err(InterfaceError::Bus)
    }

    fn send_data(&mut self, byte: u8) -> InterfaceResult<(), Self::Error> {
        self.bus
            .write(Channel::Data, byte)
            .map_err(InterfaceError::Bus)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        // Reset sequence: HIGH -> 3ms -> LOW -> 3ms -> HIGH -> 10ms settle
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(3);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(3);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(10);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        RstHigh,
        RstLow,
        DelayMs(u32),
        Write(Channel, u8),
    }

    // Shared event log so pin, bus, and delay ordering can be asserted together
    struct Recorder {
        events: RefCell<alloc::vec::Vec<Event>>,
    }

    struct RecordingBus<'a>(&'a Recorder);

    impl ParallelBus for RecordingBus<'_> {
        type Error = core::convert::Infallible;

        fn configure_timing(&mut self, _timing: &BusTiming) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, channel: Channel, byte: u8) -> Result<(), Self::Error> {
            self.0.events.borrow_mut().push(Event::Write(channel, byte));
            Ok(())
        }
    }

    struct RecordingPin<'a>(&'a Recorder);

    impl embedded_hal::digital::ErrorType for RecordingPin<'_> {
        type Error = core::convert::Infallible;
    }

    impl OutputPin for RecordingPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.events.borrow_mut().push(Event::RstLow);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.events.borrow_mut().push(Event::RstHigh);
            Ok(())
        }
    }

    struct RecordingDelay<'a>(&'a Recorder);

    impl DelayNs for RecordingDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.0
                .events
                .borrow_mut()
                .push(Event::DelayMs(ns / 1_000_000));
        }
    }

    #[test]
    fn test_reset_sequence_ordering() {
        let recorder = Recorder {
            events: RefCell::new(alloc::vec::Vec::new()),
        };
        let mut interface = Interface::new(RecordingBus(&recorder), RecordingPin(&recorder));
        let mut delay = RecordingDelay(&recorder);

        interface.reset(&mut delay).unwrap();

        assert_eq!(
            *recorder.events.borrow(),
            [
                Event::RstHigh,
                Event::DelayMs(3),
                Event::RstLow,
                Event::DelayMs(3),
                Event::RstHigh,
                Event::DelayMs(10),
            ]
        );
    }

    #[test]
    fn test_command_and_data_channels() {
        let recorder = Recorder {
            events: RefCell::new(alloc::vec::Vec::new()),
        };
        let mut interface = Interface::new(RecordingBus(&recorder), RecordingPin(&recorder));

        interface.send_command(0x40).unwrap();
        interface.send_data(0x30).unwrap();

        assert_eq!(
            *recorder.events.borrow(),
            [
                Event::Write(Channel::Command, 0x40),
                Event::Write(Channel::Data, 0x30),
            ]
        );
    }

    #[test]
    fn test_channel_address_line_values() {
        assert_eq!(Channel::Data as u8, 0);
        assert_eq!(Channel::Command as u8, 1);
    }
}
