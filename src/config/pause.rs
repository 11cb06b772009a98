//! Inter-step pause configuration.

use serde::Deserialize;

use super::units::Cycles;

/// Cycle count the stepping loop waits after every write.
pub const DEFAULT_PAUSE_CYCLES: Cycles = Cycles(65535);

/// Cycles that make up one millisecond of pause.
pub const DEFAULT_CYCLES_PER_MS: u32 = 1000;

/// Pause inserted after each motor step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct PauseConfig {
    /// Whether to pause at all. Disabling leaves the transcript unchanged.
    pub enabled: bool,

    /// Busy-wait length in cycles.
    pub cycles: Cycles,

    /// Divisor from cycles to milliseconds.
    pub cycles_per_ms: u32,
}

impl PauseConfig {
    /// A pause that never waits.
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            cycles: DEFAULT_PAUSE_CYCLES,
            cycles_per_ms: DEFAULT_CYCLES_PER_MS,
        }
    }

    /// Pause length in milliseconds, or `None` when pauses are off.
    pub fn duration_ms(&self) -> Option<u32> {
        if self.enabled {
            Some(self.cycles.to_millis(self.cycles_per_ms))
        } else {
            None
        }
    }
}

impl Default for PauseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cycles: DEFAULT_PAUSE_CYCLES,
            cycles_per_ms: DEFAULT_CYCLES_PER_MS,
        }
    }
}
