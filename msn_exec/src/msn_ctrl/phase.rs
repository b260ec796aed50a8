//! Mission phase definition and the phase transition function

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::Serialize;
use std::fmt;

// Internal
use super::InputData;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// One discrete step of the delivery mission sequence.
///
/// Exactly one phase is current at any cycle. Phases advance only along the
/// fixed mission cycle `Idle -> ColourIdentify -> NavToDesk -> IrComm ->
/// Pickup -> NavToDropoff -> Dropoff -> Idle`; the only other edge is the
/// universal reset edge back to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MsnPhase {
    /// Waiting on the starting pad, no collaborator enabled.
    Idle,
    /// Colour detection is identifying the starting pad colour.
    ColourIdentify,
    /// Navigation is driving the rover to the desk.
    NavToDesk,
    /// The infrared unit is reporting the identified colour.
    IrComm,
    /// The pickup unit is securing the package.
    Pickup,
    /// Navigation is driving the rover to the dropoff pad.
    NavToDropoff,
    /// The dropoff unit is releasing the package.
    Dropoff,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for MsnPhase {
    fn default() -> Self {
        MsnPhase::Idle
    }
}

impl fmt::Display for MsnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MsnPhase::Idle => write!(f, "Idle"),
            MsnPhase::ColourIdentify => write!(f, "ColourIdentify"),
            MsnPhase::NavToDesk => write!(f, "NavToDesk"),
            MsnPhase::IrComm => write!(f, "IrComm"),
            MsnPhase::Pickup => write!(f, "Pickup"),
            MsnPhase::NavToDropoff => write!(f, "NavToDropoff"),
            MsnPhase::Dropoff => write!(f, "Dropoff"),
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Compute the phase for the next cycle.
///
/// Pure function of the current phase and this cycle's input snapshot. Each
/// phase has a single exit condition and is held if that condition is not
/// met. Only the signal relevant to the current phase is consulted, so a
/// spurious or stale done signal from another collaborator can never skip a
/// phase.
pub fn next_phase(current: MsnPhase, input: &InputData) -> MsnPhase {
    use MsnPhase::*;

    match current {
        Idle if !input.start_pad_colour.is_none() => ColourIdentify,
        ColourIdentify if input.colour_detect_done => NavToDesk,
        NavToDesk if input.desk_reached => IrComm,
        IrComm if input.ir_comm_done => Pickup,
        Pickup if input.pickup_done => NavToDropoff,
        NavToDropoff if input.dropoff_reached => Dropoff,
        Dropoff if input.dropoff_done => Idle,
        // No exit condition met - explicit hold
        _ => current,
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::super::PadColour;
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
    fn test_hold_without_exit_condition() {
        // With no signal asserted every phase must hold itself
        let input = InputData::default();

        for &phase in ALL_PHASES.iter() {
            assert_eq!(next_phase(phase, &input), phase);
        }
    }

    #[test]
    fn test_single_exit_per_phase() {
        // Each (phase, signal) pair from the transition table advances one
        // step along the mission cycle
        let steps: [(MsnPhase, InputData, MsnPhase); 7] = [
            (
                MsnPhase::Idle,
                InputData {
                    start_pad_colour: PadColour::new(0b001),
                    ..Default::default()
                },
                MsnPhase::ColourIdentify,
            ),
            (
                MsnPhase::ColourIdentify,
                InputData {
                    colour_detect_done: true,
                    ..Default::default()
                },
                MsnPhase::NavToDesk,
            ),
            (
                MsnPhase::NavToDesk,
                InputData {
                    desk_reached: true,
                    ..Default::default()
                },
                MsnPhase::IrComm,
            ),
            (
                MsnPhase::IrComm,
                InputData {
                    ir_comm_done: true,
                    ..Default::default()
                },
                MsnPhase::Pickup,
            ),
            (
                MsnPhase::Pickup,
                InputData {
                    pickup_done: true,
                    ..Default::default()
                },
                MsnPhase::NavToDropoff,
            ),
            (
                MsnPhase::NavToDropoff,
                InputData {
                    dropoff_reached: true,
                    ..Default::default()
                },
                MsnPhase::Dropoff,
            ),
            (
                MsnPhase::Dropoff,
                InputData {
                    dropoff_done: true,
                    ..Default::default()
                },
                MsnPhase::Idle,
            ),
        ];

        for (current, input, expected) in steps.iter() {
            assert_eq!(next_phase(*current, input), *expected);
        }
    }

    #[test]
    fn test_wrong_phase_signal_ignored() {
        // In NavToDesk only desk_reached may advance the phase - a dropoff
        // arrival must be ignored
        let input = InputData {
            dropoff_reached: true,
            ..Default::default()
        };
        assert_eq!(next_phase(MsnPhase::NavToDesk, &input), MsnPhase::NavToDesk);

        // Likewise a colour detection done pulse means nothing in Pickup
        let input = InputData {
            colour_detect_done: true,
            ..Default::default()
        };
        assert_eq!(next_phase(MsnPhase::Pickup, &input), MsnPhase::Pickup);
    }

    #[test]
    fn test_simultaneous_signals_no_phase_skip() {
        // All completion signals asserted at once - each phase must advance
        // exactly one step, never two
        let input = InputData {
            start_pad_colour: PadColour::new(0b101),
            colour_detect_done: true,
            desk_reached: true,
            ir_comm_done: true,
            pickup_done: true,
            dropoff_reached: true,
            dropoff_done: true,
            ..Default::default()
        };

        assert_eq!(next_phase(MsnPhase::Idle, &input), MsnPhase::ColourIdentify);
        assert_eq!(
            next_phase(MsnPhase::ColourIdentify, &input),
            MsnPhase::NavToDesk
        );
        assert_eq!(next_phase(MsnPhase::NavToDesk, &input), MsnPhase::IrComm);
        assert_eq!(next_phase(MsnPhase::IrComm, &input), MsnPhase::Pickup);
        assert_eq!(next_phase(MsnPhase::Pickup, &input), MsnPhase::NavToDropoff);
        assert_eq!(next_phase(MsnPhase::NavToDropoff, &input), MsnPhase::Dropoff);
        assert_eq!(next_phase(MsnPhase::Dropoff, &input), MsnPhase::Idle);
    }

    #[test]
    fn test_pad_colour_inert_outside_idle() {
        // The pad colour code has no consuming phase other than Idle, so it
        // must not influence any other phase
        let input = InputData {
            start_pad_colour: PadColour::new(0b111),
            ..Default::default()
        };

        for &phase in ALL_PHASES.iter() {
            if phase != MsnPhase::Idle {
                assert_eq!(next_phase(phase, &input), phase);
            }
        }
    }

    #[test]
    fn test_zero_colour_holds_idle() {
        // The all-zero pattern is "no colour", not an error - Idle holds
        let input = InputData {
            start_pad_colour: PadColour::new(0),
            ..Default::default()
        };
        assert_eq!(next_phase(MsnPhase::Idle, &input), MsnPhase::Idle);
    }
}
