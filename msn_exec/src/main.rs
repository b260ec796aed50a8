//! Main mission executive entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise the session, logger and all modules
//!     - Main loop:
//!         - Scenario input acquisition
//!         - Mission controller processing
//!         - Collaborator subsystem stepping
//!         - Cycle management
//!
//! The mission controller is the only cyclic module; the five collaborator
//! subsystems it coordinates are simulations honouring the enable/done
//! handshake contract of the real units. One loop iteration is one
//! controller tick.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use log::{debug, info, warn};
use std::thread;
use std::time::{Duration, Instant};

// Internal
use msn_lib::{
    data_store::DataStore,
    msn_ctrl::{self, PadColour},
    params::MsnExecParams,
    subsys::Subsystem,
};
use util::{
    logger::{logger_init, LevelFilter},
    module::State,
    raise_error,
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Target period of one cycle.
const CYCLE_PERIOD_S: f64 = 0.10;

/// Number of cycles per second
const CYCLE_FREQUENCY_HZ: f64 = 1.0 / CYCLE_PERIOD_S;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// End-of-mission data product written into the session directory.
#[derive(serde::Serialize)]
struct MissionSummary {
    completed_at: String,
    elapsed_s: f64,
    num_cycles: u128,
    pad_colour: PadColour,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("msn_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session).wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Courier Rover Mission Executive\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params: MsnExecParams =
        util::params::load("msn_exec.toml").wrap_err("Could not load exec params")?;

    info!("Exec parameters loaded");

    let pad_colour = PadColour::new(params.scenario.pad_colour);
    if pad_colour.is_none() {
        raise_error!("Scenario pad colour is the no-colour code, the mission could never leave Idle");
    }

    // ---- INITIALISE DATASTORE ----

    info!("Initialising modules...");

    let mut ds = DataStore::new(&params);

    // ---- INITIALISE MODULES ----

    ds.msn_ctrl
        .init((), &session)
        .unwrap_or_else(|e| match e {});
    info!("MsnCtrl init complete");

    info!("Module initialisation complete\n");

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    loop {
        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // Clear items that need wiping at the start of the cycle
        ds.cycle_start(CYCLE_FREQUENCY_HZ);

        // ---- INPUT ACQUISITION ----

        // Scenario-sourced signals
        let pad_visible = ds.num_cycles >= params.scenario.pad_colour_cycle as u128;
        let reset = params
            .scenario
            .reset_at_cycle
            .map(|c| ds.num_cycles == c as u128)
            .unwrap_or(false);

        if reset {
            warn!("Scenario reset asserted on cycle {}", ds.num_cycles);
        }

        // Collaborator done/arrival signals from the previous cycle's step
        ds.msn_ctrl_input = msn_ctrl::InputData {
            reset,
            start_pad_colour: if pad_visible {
                pad_colour
            } else {
                PadColour::NONE
            },
            colour_detect_done: ds.colour_detect.done(),
            desk_reached: ds.nav.desk_reached(),
            ir_comm_done: ds.ir_comm.done(),
            pickup_done: ds.pickup.done(),
            dropoff_reached: ds.nav.dropoff_reached(),
            dropoff_done: ds.dropoff.done(),
        };

        // ---- MISSION CONTROLLER PROCESSING ----

        match ds.msn_ctrl.proc(&ds.msn_ctrl_input) {
            Ok((output, report)) => {
                ds.msn_ctrl_output = output;
                ds.msn_ctrl_status_rpt = report;
            }
            Err(e) => match e {},
        }

        // Mission is complete when Dropoff hands back to Idle with the
        // package released - a reset landing in Dropoff takes the same edge
        // but restarts the mission instead
        if ds.msn_ctrl_status_rpt.mission_complete(&ds.msn_ctrl_input) {
            break;
        }

        // ---- COLLABORATOR SUBSYSTEM STEPPING ----

        // Auxiliary inputs
        ds.colour_detect
            .set_pad_colour(ds.msn_ctrl_input.start_pad_colour);
        if let Some(colour) = ds.colour_detect.detected() {
            ds.ir_comm.set_colour(colour);
        }

        // The package-presence switch trips a fixed delay after pickup is
        // first enabled
        if ds.msn_ctrl_output.pickup_en {
            let start = *ds.pickup_en_start_cycle.get_or_insert(ds.num_cycles);
            ds.pickup.set_package_detected(
                ds.num_cycles - start >= params.scenario.pickup_detect_delay_cycles as u128,
            );
        } else {
            ds.pickup_en_start_cycle = None;
            ds.pickup.set_package_detected(false);
        }

        ds.colour_detect.tick(ds.msn_ctrl_output.colour_detect_en);
        ds.ir_comm.tick(ds.msn_ctrl_output.ir_comm_en);
        ds.pickup.tick(ds.msn_ctrl_output.pickup_en);
        ds.dropoff.tick(ds.msn_ctrl_output.dropoff_en);
        ds.nav.tick(ds.msn_ctrl_output.nav_cmd);

        // ---- TELEMETRY ----

        if ds.is_1_hz_cycle {
            debug!(
                "Phase: {}, nav_control: 0b{:02b}, ir_signal: {}, pickup_action: {}, \
                 dropoff_action: {}",
                ds.msn_ctrl_status_rpt.phase,
                ds.msn_ctrl_output.nav_cmd.as_code(),
                ds.ir_comm.ir_signal(),
                ds.pickup.pickup_action(),
                ds.dropoff.dropoff_action()
            );
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match Duration::from_secs_f64(CYCLE_PERIOD_S).checked_sub(cycle_dur) {
            Some(d) => {
                ds.num_consec_cycle_overruns = 0;
                thread::sleep(d);
            }
            None => {
                warn!(
                    "Cycle overran by {:.06} s",
                    cycle_dur.as_secs_f64() - CYCLE_PERIOD_S
                );
                ds.num_consec_cycle_overruns += 1;
            }
        }

        // Increment cycle counter
        ds.num_cycles += 1;
    }

    // ---- SHUTDOWN ----

    let summary = MissionSummary {
        completed_at: chrono::Utc::now().to_rfc3339(),
        elapsed_s: util::session::get_elapsed_seconds(),
        num_cycles: ds.num_cycles,
        pad_colour,
    };

    info!(
        "Mission complete after {} cycles ({:.02} s)",
        summary.num_cycles, summary.elapsed_s
    );

    session.save_json("mission_summary.json", &summary);

    info!("End of execution");

    Ok(())
}
