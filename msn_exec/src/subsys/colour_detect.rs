//! Colour detection subsystem simulation

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;

// Internal
use super::{SimActivity, Subsystem};
use crate::msn_ctrl::PadColour;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Colour detection unit.
///
/// While enabled with a pad colour visible it "samples" for a fixed number
/// of ticks, then latches the identified colour and pulses done.
pub struct ColourDetect {
    act: SimActivity,

    /// Pad colour currently visible to the sensor, set each tick by the
    /// executive.
    pad_colour: PadColour,

    /// Colour latched by the last completed detection.
    detected: Option<PadColour>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ColourDetect {
    pub fn new(detect_ticks: u64) -> Self {
        Self {
            act: SimActivity::new(detect_ticks),
            pad_colour: PadColour::NONE,
            detected: None,
        }
    }

    /// Present the pad colour visible to the sensor this tick.
    pub fn set_pad_colour(&mut self, colour: PadColour) {
        self.pad_colour = colour;
    }

    /// The colour identified by the last completed detection, if any.
    pub fn detected(&self) -> Option<PadColour> {
        self.detected
    }
}

impl Subsystem for ColourDetect {
    fn name(&self) -> &'static str {
        "ColourDetect"
    }

    fn tick(&mut self, enable: bool) {
        // A detection can only run while a colour is actually visible
        let go = enable && !self.pad_colour.is_none();

        if self.act.tick(go) {
            self.detected = Some(self.pad_colour);
            debug!("{}: identified pad colour {}", self.name(), self.pad_colour);
        }
    }

    fn done(&self) -> bool {
        self.act.done()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_detection_latches_colour() {
        let mut cd = ColourDetect::new(2);
        cd.set_pad_colour(PadColour::new(0b011));

        cd.tick(true);
        assert!(!cd.done());
        assert_eq!(cd.detected(), None);

        cd.tick(true);
        assert!(cd.done());
        assert_eq!(cd.detected(), Some(PadColour::new(0b011)));
    }

    #[test]
    fn test_no_detection_without_colour() {
        let mut cd = ColourDetect::new(1);
        cd.set_pad_colour(PadColour::NONE);

        for _ in 0..5 {
            cd.tick(true);
            assert!(!cd.done());
        }
        assert_eq!(cd.detected(), None);
    }
}
