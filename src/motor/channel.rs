//! Motor channels of the three-joint arm.

use core::fmt;

use crate::ppi::Port;

/// Arm joint driven by one stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Joint {
    /// Rotating base.
    Base,
    /// Shoulder.
    Shoulder,
    /// Elbow.
    Elbow,
}

impl Joint {
    /// Label used in the motor header line.
    pub const fn label(self) -> &'static str {
        match self {
            Joint::Base => "BASE",
            Joint::Shoulder => "HOMBRO",
            Joint::Elbow => "CODO",
        }
    }
}

/// A stepper bound to a joint and a data port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorChannel {
    /// Motor letter (A, B, C).
    pub letter: char,
    /// Joint it moves.
    pub joint: Joint,
    /// Port its coils hang off.
    pub port: Port,
}

impl MotorChannel {
    /// Create a channel.
    pub const fn new(letter: char, joint: Joint, port: Port) -> Self {
        Self { letter, joint, port }
    }

    /// Header line printed before the channel's steps.
    pub fn header(&self) -> Header<'_> {
        Header(self)
    }
}

/// Display adapter for `--- MOTOR <letter> (<JOINT>) ---`.
pub struct Header<'a>(&'a MotorChannel);

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--- MOTOR {} ({}) ---", self.0.letter, self.0.joint.label())
    }
}

/// The arm's motors, in the order they are stepped.
pub const MOTOR_CHANNELS: [MotorChannel; 3] = [
    MotorChannel::new('A', Joint::Base, Port::A),
    MotorChannel::new('B', Joint::Shoulder, Port::B),
    MotorChannel::new('C', Joint::Elbow, Port::C),
];
