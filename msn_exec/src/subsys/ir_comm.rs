//! Infrared communication subsystem simulation

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

/// Infrared communication unit.
///
/// While enabled it drives the identified colour code onto the infrared
/// channel for a fixed number of ticks, then pulses done. The channel is
/// all-zero whenever the unit is not transmitting.
pub struct IrComm {
    act: SimActivity,

    /// Colour code to report, set by the executive once detection completes.
    colour: PadColour,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl IrComm {
    pub fn new(comm_ticks: u64) -> Self {
        Self {
            act: SimActivity::new(comm_ticks),
            colour: PadColour::NONE,
        }
    }

    /// Set the colour code to be reported.
    pub fn set_colour(&mut self, colour: PadColour) {
        self.colour = colour;
    }

    /// The 3-bit code currently driven onto the infrared channel, all-zero
    /// when not transmitting.
    pub fn ir_signal(&self) -> PadColour {
        if self.act.is_active() {
            self.colour
        } else {
            PadColour::NONE
        }
    }
}

impl Subsystem for IrComm {
    fn name(&self) -> &'static str {
        "IrComm"
    }

    fn tick(&mut self, enable: bool) {
        // Nothing to transmit until a colour has been identified
        let go = enable && !self.colour.is_none();

        if self.act.tick(go) {
            debug!("{}: colour report {} transmitted", self.name(), self.colour);
        }
    }

    fn done(&self) -> bool {
        self.act.done()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
