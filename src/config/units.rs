//! Unit types for port addresses and delay cycles.
//!
//! Keeps raw bus addresses and busy-wait cycle counts from being mixed up
//! with data bytes or milliseconds.

use core::fmt;

use serde::Deserialize;

/// Address of an I/O port on the simulated bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct PortAddress(pub u8);

impl PortAddress {
    /// Create a new PortAddress value.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for PortAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// Busy-wait delay expressed in loop cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Cycles(pub u32);

impl Cycles {
    /// Create a new Cycles value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Convert to whole milliseconds, truncating.
    ///
    /// Returns 0 when `cycles_per_ms` is 0.
    #[inline]
    pub const fn to_millis(self, cycles_per_ms: u32) -> u32 {
        if cycles_per_ms == 0 {
            0
        } else {
            self.0 / cycles_per_ms
        }
    }
}
