//! Step sequencer.
//!
//! Configures the 8255, then walks each arm motor through the step table
//! one port write at a time, pausing after every step. All output goes
//! through a [`PortBus`] and all waiting through an embedded-hal
//! [`DelayNs`], so the sequence itself never touches the console or the
//! clock directly.

mod clock;

pub use clock::NoPause;
#[cfg(feature = "std")]
pub use clock::ThreadSleep;

use core::fmt::{self, Write};

use embedded_hal::delay::DelayNs;

use crate::config::units::PortAddress;
use crate::config::{validate_config, SimulationConfig, PROGRAM_NAME_CAPACITY};
use crate::error::{Error, Result};
use crate::motor::{MotorChannel, StepTable, FULL_STEP, MOTOR_CHANNELS};
use crate::ppi::{Port, PortBus, CONTROL_ALL_OUTPUT};

/// First banner line.
pub const TITLE: &str = "=== CONTROL DE 3 MOTORES PASO A PASO ===";
/// Banner line after the program name.
pub const SUBTITLE: &str = "Simulando comportamiento para Proteus";
/// Printed just before the control word is written.
pub const CONFIGURING: &str = "Configurando 8255...";
/// First closing banner line.
pub const COMPLETED: &str = "=== SECUENCIA COMPLETADA ===";
/// Last line of the transcript.
pub const FAREWELL: &str = "Los 3 motores han ejecutado sus secuencias de pasos";

/// Counts from one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceSummary {
    /// Every port write, control word included.
    pub port_writes: u32,
    /// Writes to the control register.
    pub config_writes: u32,
    /// Pauses taken.
    pub pauses: u32,
}

impl SequenceSummary {
    /// Writes that stepped a motor.
    #[inline]
    pub fn motor_writes(&self) -> u32 {
        self.port_writes - self.config_writes
    }
}

/// Drives the fixed three-motor step sequence.
///
/// Generic over:
/// - `B`: output sink (must implement [`PortBus`])
/// - `D`: pause provider (must implement `DelayNs`)
pub struct StepSequencer<B, D>
where
    B: PortBus,
    D: DelayNs,
{
    bus: B,
    delay: D,
    config: SimulationConfig,
    steps: StepTable,
}

impl<B, D> StepSequencer<B, D>
where
    B: PortBus,
    D: DelayNs,
{
    /// Create a sequencer with the default configuration.
    pub fn new(bus: B, delay: D) -> Self {
        Self {
            bus,
            delay,
            config: SimulationConfig::default(),
            steps: FULL_STEP,
        }
    }

    /// Create a sequencer with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `config` fails [`validate_config`].
    pub fn with_config(bus: B, delay: D, config: SimulationConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self {
            bus,
            delay,
            config,
            steps: FULL_STEP,
        })
    }

    /// Get the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Borrow the bus.
    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Release the bus and delay provider.
    pub fn into_parts(self) -> (B, D) {
        (self.bus, self.delay)
    }

    /// Run the whole sequence once.
    ///
    /// Can be called again; every run emits the same output.
    ///
    /// # Errors
    ///
    /// Returns `Error::Port` on the first write the bus rejects. Nothing
    /// after the failed line is attempted.
    pub fn run(&mut self) -> Result<SequenceSummary> {
        tracing::info!(program = self.config.program_name(), "starting step sequence");
        let mut summary = SequenceSummary::default();

        self.note(TITLE)?;
        let banner = line(format_args!("Programa: {}.exe", self.config.program_name()));
        self.note(banner.as_str())?;
        self.note(SUBTITLE)?;
        self.note("")?;

        self.note(CONFIGURING)?;
        self.out(Port::Control.address(), CONTROL_ALL_OUTPUT)?;
        summary.port_writes += 1;
        summary.config_writes += 1;

        for channel in MOTOR_CHANNELS.iter() {
            self.step_channel(channel, &mut summary)?;
        }

        self.note("")?;
        self.note(COMPLETED)?;
        self.note(FAREWELL)?;

        tracing::info!(
            port_writes = summary.port_writes,
            pauses = summary.pauses,
            "step sequence complete"
        );
        Ok(summary)
    }

    fn step_channel(&mut self, channel: &MotorChannel, summary: &mut SequenceSummary) -> Result<()> {
        self.note("")?;
        self.note(line(format_args!("{}", channel.header())).as_str())?;

        let port = channel.port.address();
        let steps = self.steps;
        for pattern in steps.iter() {
            self.out(port, pattern)?;
            summary.port_writes += 1;

            if let Some(ms) = self.config.pause.duration_ms() {
                tracing::trace!(ms, "pause");
                self.delay.delay_ms(ms);
                summary.pauses += 1;
            }
        }

        Ok(())
    }

    fn out(&mut self, port: PortAddress, value: u8) -> Result<()> {
        tracing::debug!(port = port.0, value, "port write");
        self.bus
            .out(port, value)
            .map_err(|e| Error::Port(e.into()))
    }

    fn note(&mut self, text: &str) -> Result<()> {
        self.bus.note(text).map_err(|e| Error::Port(e.into()))
    }
}

/// Room for the longest line: the program banner around a full-length name.
const LINE_CAPACITY: usize = PROGRAM_NAME_CAPACITY + 32;

fn line(args: fmt::Arguments<'_>) -> heapless::String<LINE_CAPACITY> {
    let mut out = heapless::String::new();
    let written = out.write_fmt(args);
    debug_assert!(written.is_ok(), "transcript line exceeds {} bytes", LINE_CAPACITY);
    out
}

/// Run the sequence against an in-memory console and return the text.
///
/// Pauses are skipped regardless of `config.pause`.
///
/// # Errors
///
/// Returns `Error::Config` if `config` is invalid.
#[cfg(feature = "std")]
pub fn render_transcript(config: &SimulationConfig) -> Result<String> {
    let bus = crate::ppi::ConsoleBus::new(Vec::new());
    let mut sequencer = StepSequencer::with_config(bus, NoPause, config.clone())?;
    sequencer.run()?;

    let (bus, _) = sequencer.into_parts();
    Ok(String::from_utf8_lossy(&bus.into_inner()).into_owned())
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::ppi::{BusEvent, PortWrite, RecordingBus};

    /// Delay that remembers every request.
    #[derive(Default)]
    struct CountingDelay {
        calls: Vec<u32>,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.calls.push(ns / 1_000_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.calls.push(ms);
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut sequencer = StepSequencer::new(RecordingBus::new(), CountingDelay::default());
        let summary = sequencer.run().unwrap();

        assert_eq!(summary.port_writes, 13);
        assert_eq!(summary.config_writes, 1);
        assert_eq!(summary.motor_writes(), 12);
        assert_eq!(summary.pauses, 12);
    }

    #[test]
    fn test_pause_after_each_motor_step() {
        let mut sequencer = StepSequencer::new(RecordingBus::new(), CountingDelay::default());
        sequencer.run().unwrap();

        let (_, delay) = sequencer.into_parts();
        assert_eq!(delay.calls, vec![65; 12]);
    }

    #[test]
    fn test_disabled_pause_never_waits() {
        let mut sequencer = StepSequencer::with_config(
            RecordingBus::new(),
            CountingDelay::default(),
            SimulationConfig::without_pauses(),
        )
        .unwrap();
        assert_eq!(sequencer.config().pause.duration_ms(), None);
        let summary = sequencer.run().unwrap();

        assert_eq!(summary.pauses, 0);
        let (_, delay) = sequencer.into_parts();
        assert!(delay.calls.is_empty());
    }

    #[test]
    fn test_control_word_written_first() {
        let mut sequencer = StepSequencer::new(RecordingBus::new(), NoPause);
        sequencer.run().unwrap();

        let first = sequencer.bus().writes().next().copied();
        assert_eq!(first, Some(PortWrite::new(PortAddress(0x06), 0x80)));
    }

    #[test]
    fn test_header_precedes_channel_writes() {
        let mut sequencer = StepSequencer::new(RecordingBus::new(), NoPause);
        sequencer.run().unwrap();

        let events = sequencer.bus().events();
        let header = events
            .iter()
            .position(|e| *e == BusEvent::Note("--- MOTOR B (HOMBRO) ---".into()))
            .unwrap();
        assert_eq!(
            events[header + 1],
            BusEvent::Write(PortWrite::new(PortAddress(0x02), 0x06))
        );
    }

    #[test]
    fn test_custom_program_name() {
        let mut config = SimulationConfig::without_pauses();
        config.program_name = heapless::String::try_from("brazo").unwrap();

        let text = render_transcript(&config).unwrap();
        assert!(text.contains("Programa: brazo.exe\n"));
    }

    #[test]
    fn test_full_length_name_not_truncated() {
        let name = "n".repeat(PROGRAM_NAME_CAPACITY);
        let mut config = SimulationConfig::without_pauses();
        config.program_name = heapless::String::try_from(name.as_str()).unwrap();

        let text = render_transcript(&config).unwrap();
        let expected = format!("Programa: {}.exe", name);
        assert_eq!(text.lines().nth(1), Some(expected.as_str()));
    }

    #[test]
    fn test_multiline_name_rejected_at_construction() {
        let mut config = SimulationConfig::without_pauses();
        config.program_name = heapless::String::try_from("a\nb").unwrap();

        let result = StepSequencer::with_config(RecordingBus::new(), NoPause, config);
        assert!(matches!(
            result,
            Err(Error::Config(crate::error::ConfigError::InvalidProgramName(_)))
        ));
    }

    #[test]
    fn test_invalid_config_not_rendered() {
        let mut config = SimulationConfig::without_pauses();
        config.pause.cycles_per_ms = 0;

        assert!(render_transcript(&config).is_err());
    }
}
