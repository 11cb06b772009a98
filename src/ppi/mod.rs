//! Simulated 8255 programmable peripheral interface.
//!
//! The three data ports and the control register sit at fixed even
//! addresses. Writes go through a [`PortBus`], so the same sequencing code
//! can print a transcript, record writes, or drive a real backend.

mod bus;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod recording;

pub use bus::{PortBus, PortWrite};
#[cfg(feature = "std")]
pub use console::{format_out_line, ConsoleBus, StdoutSink};
#[cfg(feature = "std")]
pub use recording::{BusEvent, RecordingBus};

use crate::config::units::PortAddress;

/// Mode 0 control word: ports A, B and C all configured as outputs.
pub const CONTROL_ALL_OUTPUT: u8 = 0x80;

/// A register of the 8255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// Port A (0x00)
    A,
    /// Port B (0x02)
    B,
    /// Port C (0x04)
    C,
    /// Control register (0x06)
    Control,
}

impl Port {
    /// All registers in address order.
    pub const ALL: [Port; 4] = [Port::A, Port::B, Port::C, Port::Control];

    /// Bus address of this register.
    #[inline]
    pub const fn address(self) -> PortAddress {
        match self {
            Port::A => PortAddress(0x00),
            Port::B => PortAddress(0x02),
            Port::C => PortAddress(0x04),
            Port::Control => PortAddress(0x06),
        }
    }

    /// Look up the register at `address`.
    pub fn from_address(address: PortAddress) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.address() == address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses_are_fixed() {
        assert_eq!(Port::A.address(), PortAddress(0x00));
        assert_eq!(Port::B.address(), PortAddress(0x02));
        assert_eq!(Port::C.address(), PortAddress(0x04));
        assert_eq!(Port::Control.address(), PortAddress(0x06));
    }

    #[test]
    fn test_from_address() {
        assert_eq!(Port::from_address(PortAddress(0x04)), Some(Port::C));
        assert_eq!(Port::from_address(PortAddress(0x01)), None);
    }
}
