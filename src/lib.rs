//! # stepper-sequencer
//!
//! Simulated 8255 stepper sequencing for a three-motor arm (base, shoulder,
//! elbow).
//!
//! ## Features
//!
//! - **Fixed transcript**: configures the 8255, then steps each motor through
//!   the four-entry full-step table, one port write per step
//! - **Injectable output**: every write goes through a [`PortBus`], so a
//!   console, a recorder, or real hardware can sit behind it
//! - **embedded-hal 1.0**: pauses use `DelayNs`, so tests can skip them
//! - **no_std compatible**: the sequencing core works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_sequencer::{ConsoleBus, StepSequencer, ThreadSleep};
//!
//! let mut sequencer = StepSequencer::new(ConsoleBus::stdout(), ThreadSleep);
//! sequencer.run()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables console bus, TOML loading and the `test_motor` binary
//! - `defmt`: Derives `defmt::Format` on value types for embedded logging

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod config;
pub mod error;
#[cfg(feature = "std")]
pub mod logging;
pub mod motor;
pub mod ppi;
pub mod sequencer;

// Re-exports for ergonomic API
pub use config::{validate_config, PauseConfig, SimulationConfig};
pub use error::{ConfigError, Error, PortError, Result};
pub use motor::{Joint, MotorChannel, StepTable, FULL_STEP, MOTOR_CHANNELS};
pub use ppi::{Port, PortBus, PortWrite, CONTROL_ALL_OUTPUT};
pub use sequencer::{NoPause, SequenceSummary, StepSequencer};

// std-only surfaces
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
#[cfg(feature = "std")]
pub use ppi::{ConsoleBus, RecordingBus};
#[cfg(feature = "std")]
pub use sequencer::{render_transcript, ThreadSleep};

// Unit types
pub use config::units::{Cycles, PortAddress};
