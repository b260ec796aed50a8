//! Implementations for the MsnCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::info;
use serde::Serialize;
use std::convert::Infallible;

// Internal
use super::{next_phase, output_set, MsnPhase, OutputData, PadColour};
use util::{module::State, session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Mission controller module state.
///
/// Holds the single phase register, the only mutable state of the
/// controller. The register is forced to [`MsnPhase::Idle`] at init and
/// whenever the reset input is asserted, and is otherwise written exactly
/// once per cycle with the value produced by [`next_phase`].
#[derive(Default)]
pub struct MsnCtrl {
    phase: MsnPhase,

    report: StatusReport,
}

/// Input data to the Mission Controller.
///
/// A snapshot of all external signals for one cycle. Each completion signal
/// is sourced from a named collaborator; the reset line and pad colour come
/// from the environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputData {
    /// Synchronous reset. Takes priority over the transition table and
    /// forces the phase to `Idle` this cycle regardless of any other input.
    pub reset: bool,

    /// Colour code read from the starting pad, all-zero when no colour is
    /// visible.
    pub start_pad_colour: PadColour,

    /// Done signal from the colour detection unit.
    pub colour_detect_done: bool,

    /// Arrival at the desk, from the navigation subsystem.
    pub desk_reached: bool,

    /// Done signal from the infrared communication unit.
    pub ir_comm_done: bool,

    /// Done signal from the pickup unit.
    pub pickup_done: bool,

    /// Arrival at the dropoff pad, from the navigation subsystem.
    pub dropoff_reached: bool,

    /// Done signal from the dropoff unit.
    pub dropoff_done: bool,
}

/// Status report for MsnCtrl processing.
#[derive(Clone, Copy, Default, Serialize, Debug)]
pub struct StatusReport {
    /// The phase held before this cycle's transition.
    pub prev_phase: MsnPhase,

    /// The phase held after this cycle's transition.
    pub phase: MsnPhase,

    /// True if this cycle's transition changed the phase.
    pub phase_changed: bool,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl MsnCtrl {
    /// The phase currently held by the controller.
    pub fn phase(&self) -> MsnPhase {
        self.phase
    }
}

impl StatusReport {
    /// True if this cycle's transition finished the mission: Dropoff handed
    /// back to Idle with the package released.
    ///
    /// A reset asserted during Dropoff also lands in Idle, but that is a
    /// recovery - the mission restarts if a pad colour is still visible -
    /// so the reset line must be consulted alongside the report.
    pub fn mission_complete(&self, input: &InputData) -> bool {
        self.phase_changed
            && self.prev_phase == MsnPhase::Dropoff
            && self.phase == MsnPhase::Idle
            && !input.reset
    }
}

impl State for MsnCtrl {
    type InitData = ();
    type InitError = Infallible;

    type InputData = InputData;
    type OutputData = OutputData;
    type StatusReport = StatusReport;
    type ProcError = Infallible;

    /// Initialise the mission controller.
    ///
    /// The controller has no parameters; init forces the phase register to
    /// `Idle`.
    fn init(&mut self, _init_data: Self::InitData, _session: &Session)
        -> Result<(), Self::InitError>
    {
        self.phase = MsnPhase::Idle;
        self.report = StatusReport::default();

        Ok(())
    }

    /// Perform cyclic processing of the mission controller.
    ///
    /// Total over all inputs - there is no fallible path, hence the
    /// `Infallible` error type. Every input combination yields a defined
    /// phase and output set.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        // Reset takes priority over any computed next value
        let next = if input_data.reset {
            MsnPhase::Idle
        } else {
            next_phase(self.phase, input_data)
        };

        let changed = next != self.phase;
        if changed {
            info!("Mission phase change: {} -> {}", self.phase, next);
        }

        self.report = StatusReport {
            prev_phase: self.phase,
            phase: next,
            phase_changed: changed,
        };
        self.phase = next;

        let output = output_set(self.phase);
        debug_assert!(output.num_asserted() <= 1);

        Ok((output, self.report))
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------
