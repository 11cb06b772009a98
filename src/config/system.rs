//! System configuration - root configuration structure.

use heapless::String;
use serde::Deserialize;

use super::pause::PauseConfig;

/// Program name printed in the start banner.
pub const DEFAULT_PROGRAM_NAME: &str = "test_motor";

/// Longest program name, in bytes.
pub const PROGRAM_NAME_CAPACITY: usize = 32;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Name shown as `Programa: <name>.exe`.
    pub program_name: String<PROGRAM_NAME_CAPACITY>,

    /// Pause after each motor step.
    pub pause: PauseConfig,
}

impl SimulationConfig {
    /// Default configuration with pauses switched off.
    pub fn without_pauses() -> Self {
        Self {
            pause: PauseConfig::disabled(),
            ..Self::default()
        }
    }

    /// Get the program name.
    pub fn program_name(&self) -> &str {
        self.program_name.as_str()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let mut program_name = String::new();
        // DEFAULT_PROGRAM_NAME fits in 32 bytes
        let _ = program_name.push_str(DEFAULT_PROGRAM_NAME);
        Self {
            program_name,
            pause: PauseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program_name() {
        let config = SimulationConfig::default();
        assert_eq!(config.program_name(), "test_motor");
        assert!(config.pause.enabled);
    }

    #[test]
    fn test_without_pauses_keeps_name() {
        let config = SimulationConfig::without_pauses();
        assert_eq!(config.program_name(), "test_motor");
        assert_eq!(config.pause.duration_ms(), None);
    }
}
