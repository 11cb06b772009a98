//! Error types for stepper-sequencer.
//!
//! Provides unified error handling across configuration and port output.

use core::convert::Infallible;
use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-sequencer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Output sink error
    Port(PortError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Program name is empty
    EmptyProgramName,
    /// Program name contains a line break and would split a banner line
    InvalidProgramName(heapless::String<{ crate::config::PROGRAM_NAME_CAPACITY }>),
    /// Pause divisor must be > 0
    InvalidCyclesPerMs(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Port bus errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PortError {
    /// The output sink rejected a write
    Io(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Port(e) => write!(f, "Port error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::EmptyProgramName => write!(f, "Program name must not be empty"),
            ConfigError::InvalidProgramName(name) => {
                write!(f, "Invalid program name {:?}: must be a single line", name.as_str())
            }
            ConfigError::InvalidCyclesPerMs(v) => {
                write!(f, "Invalid cycles per millisecond: {}. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::Io(msg) => write!(f, "output sink write failed: {}", msg),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PortError> for Error {
    fn from(e: PortError) -> Self {
        Error::Port(e)
    }
}

impl From<Infallible> for PortError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for PortError {
    fn from(e: std::io::Error) -> Self {
        let mut msg: heapless::String<128> = heapless::String::new();
        for c in e.to_string().chars() {
            if msg.push(c).is_err() {
                break;
            }
        }
        PortError::Io(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PortError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wraps_inner_error() {
        let err = Error::from(ConfigError::InvalidCyclesPerMs(0));
        assert_eq!(
            format!("{}", err),
            "Configuration error: Invalid cycles per millisecond: 0. Must be > 0"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_io_error_message_truncated() {
        let long = "x".repeat(300);
        let io = std::io::Error::new(std::io::ErrorKind::Other, long);
        let PortError::Io(msg) = PortError::from(io);
        assert_eq!(msg.len(), 128);
    }
}
