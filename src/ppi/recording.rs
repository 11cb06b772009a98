//! In-memory bus that records everything it is given (std only).

use core::convert::Infallible;

use crate::config::units::PortAddress;

use super::bus::{PortBus, PortWrite};

/// One event seen by a [`RecordingBus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    /// A port write.
    Write(PortWrite),
    /// An annotation line.
    Note(String),
}

/// Bus that keeps every write and note in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingBus {
    events: Vec<BusEvent>,
}

impl RecordingBus {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in arrival order.
    pub fn events(&self) -> &[BusEvent] {
        &self.events
    }

    /// Only the port writes, in order.
    pub fn writes(&self) -> impl Iterator<Item = &PortWrite> + '_ {
        self.events.iter().filter_map(|e| match e {
            BusEvent::Write(w) => Some(w),
            BusEvent::Note(_) => None,
        })
    }

    /// Only the notes, in order.
    pub fn notes(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().filter_map(|e| match e {
            BusEvent::Note(n) => Some(n.as_str()),
            BusEvent::Write(_) => None,
        })
    }
}

impl PortBus for RecordingBus {
    type Error = Infallible;

    fn out(&mut self, port: PortAddress, value: u8) -> Result<(), Self::Error> {
        self.events.push(BusEvent::Write(PortWrite::new(port, value)));
        Ok(())
    }

    fn note(&mut self, text: &str) -> Result<(), Self::Error> {
        self.events.push(BusEvent::Note(text.to_owned()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut bus = RecordingBus::new();
        bus.note("start").unwrap();
        bus.out(PortAddress(0x04), 0x03).unwrap();

        assert_eq!(
            bus.events(),
            &[
                BusEvent::Note("start".into()),
                BusEvent::Write(PortWrite::new(PortAddress(0x04), 0x03)),
            ]
        );
        assert_eq!(bus.writes().count(), 1);
        assert_eq!(bus.notes().collect::<Vec<_>>(), vec!["start"]);
    }
}
