//! Output-control function for the mission controller

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;

// Internal
use super::{MsnPhase, NavCmd};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Outputs driven by the mission controller.
///
/// Derived fresh every cycle from the current phase alone, no hidden memory.
/// At most one of the four enable lines and the navigation command is active
/// in any phase - mutual exclusion across collaborators is by construction,
/// not by runtime arbitration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct OutputData {
    /// Enable line to the colour detection unit.
    pub colour_detect_en: bool,

    /// Enable line to the infrared communication unit.
    pub ir_comm_en: bool,

    /// Enable line to the pickup unit.
    pub pickup_en: bool,

    /// Enable line to the dropoff unit.
    pub dropoff_en: bool,

    /// Command to the navigation subsystem.
    pub nav_cmd: NavCmd,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Compute the output set for the given phase.
///
/// Pure function of the phase only.
pub fn output_set(phase: MsnPhase) -> OutputData {
    match phase {
        MsnPhase::Idle => OutputData::default(),
        MsnPhase::ColourIdentify => OutputData {
            colour_detect_en: true,
            ..Default::default()
        },
        MsnPhase::NavToDesk => OutputData {
            nav_cmd: NavCmd::GotoDesk,
            ..Default::default()
        },
        MsnPhase::IrComm => OutputData {
            ir_comm_en: true,
            ..Default::default()
        },
        MsnPhase::Pickup => OutputData {
            pickup_en: true,
            ..Default::default()
        },
        MsnPhase::NavToDropoff => OutputData {
            nav_cmd: NavCmd::GotoDropoff,
            ..Default::default()
        },
        MsnPhase::Dropoff => OutputData {
            dropoff_en: true,
            ..Default::default()
        },
    }
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl OutputData {
    /// Number of active lines in this output set (enables plus a non-idle
    /// navigation command).
    pub fn num_asserted(&self) -> usize {
        [
            self.colour_detect_en,
            self.ir_comm_en,
            self.pickup_en,
            self.dropoff_en,
            self.nav_cmd != NavCmd::None,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    const ALL_PHASES: [MsnPhase; 7] = [
        MsnPhase::Idle,
        MsnPhase::ColourIdentify,
        MsnPhase::NavToDesk,
        MsnPhase::IrComm,
        MsnPhase::Pickup,
        MsnPhase::NavToDropoff,
        MsnPhase::Dropoff,
    ];

    #[test]
    fn test_output_table() {
        // Exact output set per phase
        assert_eq!(output_set(MsnPhase::Idle), OutputData::default());

        assert_eq!(
            output_set(MsnPhase::ColourIdentify),
            OutputData {
                colour_detect_en: true,
                ..Default::default()
            }
        );

        assert_eq!(
            output_set(MsnPhase::NavToDesk),
            OutputData {
                nav_cmd: NavCmd::GotoDesk,
                ..Default::default()
            }
        );

        assert_eq!(
            output_set(MsnPhase::IrComm),
            OutputData {
                ir_comm_en: true,
                ..Default::default()
            }
        );

        assert_eq!(
            output_set(MsnPhase::Pickup),
            OutputData {
                pickup_en: true,
                ..Default::default()
            }
        );

        assert_eq!(
            output_set(MsnPhase::NavToDropoff),
            OutputData {
                nav_cmd: NavCmd::GotoDropoff,
                ..Default::default()
            }
        );

        assert_eq!(
            output_set(MsnPhase::Dropoff),
            OutputData {
                dropoff_en: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_mutual_exclusion() {
        // At most one line active in every phase, all-zero only in Idle
        for &phase in ALL_PHASES.iter() {
            let out = output_set(phase);

            match phase {
                MsnPhase::Idle => assert_eq!(out.num_asserted(), 0),
                _ => assert_eq!(out.num_asserted(), 1),
            }
        }
    }

    #[test]
    fn test_nav_wire_codes() {
        assert_eq!(output_set(MsnPhase::Idle).nav_cmd.as_code(), 0b00);
        assert_eq!(output_set(MsnPhase::NavToDesk).nav_cmd.as_code(), 0b01);
        assert_eq!(output_set(MsnPhase::NavToDropoff).nav_cmd.as_code(), 0b10);
    }
}
