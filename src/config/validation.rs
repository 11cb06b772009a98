//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{PauseConfig, SimulationConfig};

/// Validate a simulation configuration.
///
/// Checks:
/// - Program name is non-empty and a single line
/// - Pause divisor is positive
pub fn validate_config(config: &SimulationConfig) -> Result<()> {
    validate_program_name(config)?;
    validate_pause(&config.pause)?;
    Ok(())
}

fn validate_program_name(config: &SimulationConfig) -> Result<()> {
    let name = config.program_name();
    if name.trim().is_empty() {
        return Err(Error::Config(ConfigError::EmptyProgramName));
    }

    if name.contains(['\n', '\r']) {
        return Err(Error::Config(ConfigError::InvalidProgramName(
            config.program_name.clone(),
        )));
    }

    Ok(())
}

fn validate_pause(pause: &PauseConfig) -> Result<()> {
    if pause.cycles_per_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidCyclesPerMs(
            pause.cycles_per_ms,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&SimulationConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_program_name() {
        let mut config = SimulationConfig::default();
        config.program_name.clear();

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::EmptyProgramName))
        ));
    }

    #[test]
    fn test_multiline_program_name() {
        let mut config = SimulationConfig::default();
        config.program_name = heapless::String::try_from("a\nb").unwrap();

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidProgramName(_)))
        ));
    }

    #[test]
    fn test_zero_cycles_per_ms() {
        let mut config = SimulationConfig::default();
        config.pause.cycles_per_ms = 0;

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidCyclesPerMs(0)))
        ));
    }
}
