//! Output sink abstraction.

use crate::config::units::PortAddress;
use crate::error::PortError;

/// One write of a byte to a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortWrite {
    /// Destination port.
    pub port: PortAddress,
    /// Byte written.
    pub value: u8,
}

impl PortWrite {
    /// Create a new write record.
    #[inline]
    pub const fn new(port: PortAddress, value: u8) -> Self {
        Self { port, value }
    }
}

/// Destination for port writes and transcript annotations.
///
/// Implementations decide what a write means: print it, store it, or
/// put it on a real parallel port.
pub trait PortBus {
    /// Error raised when the sink cannot accept output.
    type Error: Into<PortError>;

    /// Write `value` to `port`.
    fn out(&mut self, port: PortAddress, value: u8) -> Result<(), Self::Error>;

    /// Emit one annotation line (banners, motor headers).
    ///
    /// Hardware backends have nowhere to print, so the default drops it.
    fn note(&mut self, _text: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<B: PortBus + ?Sized> PortBus for &mut B {
    type Error = B::Error;

    fn out(&mut self, port: PortAddress, value: u8) -> Result<(), Self::Error> {
        (**self).out(port, value)
    }

    fn note(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).note(text)
    }
}
