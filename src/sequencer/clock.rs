//! Delay providers for the inter-step pause.

use embedded_hal::delay::DelayNs;

/// Delay that returns immediately.
///
/// Stands in for the clock when only the transcript matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl DelayNs for NoPause {
    #[inline]
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Delay that blocks the calling thread (std only).
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

#[cfg(feature = "std")]
impl DelayNs for ThreadSleep {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}
