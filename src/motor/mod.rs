//! Motor module for stepper-sequencer.
//!
//! Names the three arm motors, the port each one is wired to, and the
//! coil pattern table they all step through.

mod channel;
mod pattern;

pub use channel::{Header, Joint, MotorChannel, MOTOR_CHANNELS};
pub use pattern::{StepTable, STEP_TABLE_LEN, FULL_STEP};
