//! Configuration module for stepper-sequencer.
//!
//! Provides the simulation settings (banner program name and inter-step
//! pause), loadable from TOML files (with `std` feature) or built in code.

mod pause;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use pause::{PauseConfig, DEFAULT_CYCLES_PER_MS, DEFAULT_PAUSE_CYCLES};
pub use system::{SimulationConfig, DEFAULT_PROGRAM_NAME, PROGRAM_NAME_CAPACITY};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Cycles, PortAddress};
