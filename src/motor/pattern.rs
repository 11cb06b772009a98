//! Coil energizing patterns.

/// Number of entries in a step table.
pub const STEP_TABLE_LEN: usize = 4;

/// Immutable table of coil patterns, applied in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepTable([u8; STEP_TABLE_LEN]);

impl StepTable {
    /// Wrap a pattern array.
    pub const fn new(patterns: [u8; STEP_TABLE_LEN]) -> Self {
        Self(patterns)
    }

    /// Patterns in stepping order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Number of patterns (always 4).
    #[inline]
    pub const fn len(&self) -> usize {
        STEP_TABLE_LEN
    }

    /// Always false; a table never has zero entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Two-phase-on full-step sequence for a unipolar stepper.
pub const FULL_STEP: StepTable = StepTable::new([0x06, 0x0C, 0x09, 0x03]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_step_order() {
        let steps: Vec<u8> = FULL_STEP.iter().collect();
        assert_eq!(steps, vec![0x06, 0x0C, 0x09, 0x03]);
        assert_eq!(FULL_STEP.len(), 4);
    }

    #[test]
    fn test_each_step_energizes_two_coils() {
        for pattern in FULL_STEP.iter() {
            assert_eq!(pattern.count_ones(), 2, "pattern {:#04x}", pattern);
        }
    }
}
