//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SimulationConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_sequencer::load_config;
///
/// let config = load_config("simulation.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncate(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    tracing::debug!(path = %path.as_ref().display(), "loaded simulation config");
    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// Every field is optional; missing ones keep their defaults.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SimulationConfig> {
    let config: SimulationConfig = toml::from_str(content).map_err(|e| {
        let msg = truncate(e.message());
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

fn truncate(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_parse_program_name() {
        let toml = r#"
program_name = "robot_arm"
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.program_name(), "robot_arm");
        assert_eq!(config.pause.duration_ms(), Some(65));
    }

    #[test]
    fn test_parse_pause_table() {
        let toml = r#"
[pause]
enabled = true
cycles = 20000
cycles_per_ms = 2000
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.pause.duration_ms(), Some(10));
    }

    #[test]
    fn test_parse_rejects_zero_divisor() {
        let toml = r#"
[pause]
cycles_per_ms = 0
"#;

        let result = parse_config(toml);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidCyclesPerMs(0)))
        ));
    }

    #[test]
    fn test_parse_error_reported() {
        let result = parse_config("program_name = ");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }
}
