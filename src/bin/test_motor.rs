//! Prints the three-motor stepping transcript.
//!
//! Takes no arguments. Exits 0 after the last line, or 1 if standard
//! output is closed or cannot be written.

use std::process::ExitCode;

use stepper_sequencer::logging;
use stepper_sequencer::{ConsoleBus, Error, PortError, StepSequencer, ThreadSleep};

fn main() -> ExitCode {
    logging::init_logger();

    let result = ConsoleBus::stdout()
        .map_err(|e| Error::Port(PortError::from(e)))
        .and_then(|bus| StepSequencer::new(bus, ThreadSleep).run());

    match result {
        Ok(summary) => {
            tracing::debug!(?summary, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("sequence aborted: {}", e);
            eprintln!("test_motor: {}", e);
            ExitCode::FAILURE
        }
    }
}
