//! Signal codes exchanged between the mission controller and its collaborators

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A 3-bit pad colour code.
///
/// The all-zero pattern is "no colour" - a pad which is not visible or has no
/// colour selection. Any nonzero code is a valid colour selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PadColour(u8);

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Command issued to the navigation subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NavCmd {
    /// No navigation - remain stationary.
    None,
    /// Drive to the desk.
    GotoDesk,
    /// Drive to the dropoff pad.
    GotoDropoff,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl PadColour {
    /// The "no colour" code.
    pub const NONE: PadColour = PadColour(0);

    /// Build a pad colour from a raw code, masking down to 3 bits.
    pub fn new(code: u8) -> Self {
        PadColour(code & 0b111)
    }

    /// The raw 3-bit code.
    pub fn code(&self) -> u8 {
        self.0
    }

    /// True if this is the "no colour" code.
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PadColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0b{:03b}", self.0)
    }
}

impl NavCmd {
    /// The 2-bit wire code for this command: `0b00` idle, `0b01` go-to-desk,
    /// `0b10` go-to-dropoff.
    pub fn as_code(&self) -> u8 {
        match self {
            NavCmd::None => 0b00,
            NavCmd::GotoDesk => 0b01,
            NavCmd::GotoDropoff => 0b10,
        }
    }
}

impl Default for NavCmd {
    fn default() -> Self {
        NavCmd::None
    }
}

impl fmt::Display for NavCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavCmd::None => write!(f, "None"),
            NavCmd::GotoDesk => write!(f, "GotoDesk"),
            NavCmd::GotoDropoff => write!(f, "GotoDropoff"),
        }
    }
}
